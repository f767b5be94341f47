#![allow(dead_code)]

use slickpay_transfer::{client::Environment, TransferClient};
use url::Url;
use wiremock::MockServer;

pub const PUBLIC_KEY: &str = "test-public-key";

/// Test harness binding a [`TransferClient`] to a local mock of the
/// Slick-Pay transfer API.
pub struct TestContext {
    pub client: TransferClient,
    pub mock_server: MockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        Self::with_public_key(PUBLIC_KEY).await
    }

    pub async fn with_public_key(public_key: &str) -> Self {
        let mock_server = MockServer::start().await;
        let url = Url::parse(&mock_server.uri()).unwrap();

        let client = TransferClient::builder(public_key)
            .with_environment(Environment::from_single_url(&url))
            .build();

        Self {
            client,
            mock_server,
        }
    }

    pub fn bearer() -> String {
        format!("Bearer {}", PUBLIC_KEY)
    }

    pub async fn assert_no_requests(&self) {
        assert!(self
            .mock_server
            .received_requests()
            .await
            .unwrap()
            .is_empty());
    }
}
