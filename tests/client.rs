mod common;

use common::TestContext;
use serde_json::json;
use slickpay_transfer::{client::Environment, Error, TransferClient};
use url::Url;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn every_operation_fails_fast_without_a_public_key() {
    let ctx = TestContext::with_public_key("").await;

    let results = [
        ctx.client.bank_accounts.list(0).await.map(|_| ()),
        ctx.client.receivers.list(0).await.map(|_| ()),
        ctx.client.transfers.calculate_commission(500.0).await.map(|_| ()),
        ctx.client.transfers.payment_status(42).await.map(|_| ()),
        ctx.client.transfers.payment_history(0).await.map(|_| ()),
    ];

    for result in results {
        let err = result.expect_err("call succeeded");
        assert!(matches!(err, Error::Configuration));
        assert_eq!(
            err.messages(),
            vec!["You have to set a public key, from your config file.".to_string()]
        );
    }
    ctx.assert_no_requests().await;
}

#[tokio::test]
async fn a_caller_supplied_http_client_is_used_as_is() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/transfer"))
        .and(header("Authorization", TestContext::bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TransferClient::builder(common::PUBLIC_KEY)
        .with_http_client(reqwest::Client::new())
        .with_environment(Environment::from_single_url(
            &Url::parse(&mock_server.uri()).unwrap(),
        ))
        .build();

    let history = client.transfers.payment_history(0).await.unwrap();

    assert_eq!(history, json!({"data": []}));
}

#[tokio::test]
async fn an_unreachable_host_surfaces_as_a_transport_error() {
    // Bind a port, then drop the listener so connecting to it fails fast.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();

    let client = TransferClient::builder(common::PUBLIC_KEY)
        .with_environment(Environment::from_single_url(&url))
        .build();

    let err = client
        .bank_accounts
        .list(0)
        .await
        .expect_err("call succeeded");

    assert!(matches!(err, Error::Transport(_)));
    assert!(!err.messages().is_empty());
}
