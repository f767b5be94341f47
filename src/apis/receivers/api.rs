use crate::{
    apis::{
        ensure_remote_success,
        receivers::{model::RECEIVER_FIELDS, ReceiverList, ReceiverRequest},
        validate_request, TransferClientInner,
    },
    Error,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Slick-Pay receiver APIs client.
#[derive(Clone, Debug)]
pub struct ReceiversApi {
    inner: Arc<TransferClientInner>,
}

impl ReceiversApi {
    pub(crate) fn new(inner: Arc<TransferClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new receiver.
    ///
    /// Returns the created receiver as the raw `data` object of the
    /// upstream response.
    #[tracing::instrument(name = "Create Receiver", skip(self, request))]
    pub async fn create(&self, request: &ReceiverRequest) -> Result<Value, Error> {
        self.inner.ensure_configured()?;
        validate_request(request, RECEIVER_FIELDS)?;

        let (status, mut body) = self
            .inner
            .execute(Method::POST, "/api/user/receiver", Some(request))
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    }

    /// Updates an existing receiver.
    #[tracing::instrument(name = "Update Receiver", skip(self, request))]
    pub async fn update(&self, uuid: &str, request: &ReceiverRequest) -> Result<Value, Error> {
        self.inner.ensure_configured()?;
        validate_request(request, RECEIVER_FIELDS)?;

        let (status, mut body) = self
            .inner
            .execute(
                Method::PUT,
                &format!("/api/user/receiver/{}", encode(uuid)),
                Some(request),
            )
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    }

    /// Retrieves one page of the user's receivers, starting at the given
    /// pagination offset.
    #[tracing::instrument(name = "List Receivers", skip(self))]
    pub async fn list(&self, offset: u32) -> Result<ReceiverList, Error> {
        let (status, body) = self
            .inner
            .execute::<()>(
                Method::GET,
                &format!("/api/user/receiver?offset={}", offset),
                None,
            )
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(serde_json::from_value(body)?)
    }
}
