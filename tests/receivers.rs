mod common;

use common::TestContext;
use serde_json::json;
use slickpay_transfer::{
    apis::receivers::{ReceiverRequest, ReceiverRequestBuilder},
    Error,
};
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, ResponseTemplate,
};

fn valid_request() -> ReceiverRequest {
    ReceiverRequestBuilder::default()
        .title("Supplier")
        .fname("Amine")
        .lname("Bensalem")
        .rib("09876543210987654321")
        .address("5 Rue Larbi Ben M'hidi, Oran")
        .build()
        .unwrap()
}

#[tokio::test]
async fn create_omits_unset_contact_fields_and_projects_the_data_field() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/receiver"))
        .and(header("Authorization", TestContext::bearer().as_str()))
        .and(body_json(json!({
            "title": "Supplier",
            "fname": "Amine",
            "lname": "Bensalem",
            "rib": "09876543210987654321",
            "address": "5 Rue Larbi Ben M'hidi, Oran",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"uuid": "recv-1", "fname": "Amine"},
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let receiver = ctx.client.receivers.create(&valid_request()).await.unwrap();

    assert_eq!(receiver, json!({"uuid": "recv-1", "fname": "Amine"}));
}

#[tokio::test]
async fn an_invalid_email_is_rejected_locally() {
    let ctx = TestContext::start().await;

    let mut request = valid_request();
    request.email = Some("not-an-email".to_string());
    let err = ctx
        .client
        .receivers
        .create(&request)
        .await
        .expect_err("call succeeded");

    match err {
        Error::Validation(messages) => assert_eq!(
            messages,
            vec!["The email must be a valid email address.".to_string()]
        ),
        e => panic!("unexpected error: {}", e),
    }
    ctx.assert_no_requests().await;
}

#[tokio::test]
async fn update_puts_to_the_uuid_path() {
    let ctx = TestContext::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/user/receiver/recv-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"uuid": "recv-1", "title": "Supplier"},
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let receiver = ctx
        .client
        .receivers
        .update("recv-1", &valid_request())
        .await
        .unwrap();

    assert_eq!(receiver, json!({"uuid": "recv-1", "title": "Supplier"}));
}

#[tokio::test]
async fn list_projects_data_meta_and_links() {
    let ctx = TestContext::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/receiver"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"uuid": "recv-1"}],
            "meta": {"total": 1},
            "links": {"next": null},
            "extraneous": "dropped by the projection",
        })))
        .mount(&ctx.mock_server)
        .await;

    let page = ctx.client.receivers.list(0).await.unwrap();

    assert_eq!(page.data, json!([{"uuid": "recv-1"}]));
    assert_eq!(page.meta, json!({"total": 1}));
    assert_eq!(page.links, json!({"next": null}));
}
