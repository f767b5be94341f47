use crate::{
    apis::{
        bank_accounts::{model::BANK_ACCOUNT_FIELDS, BankAccountRequest},
        ensure_remote_success, validate_request, TransferClientInner,
    },
    Error,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Slick-Pay bank account APIs client.
#[derive(Clone, Debug)]
pub struct BankAccountsApi {
    inner: Arc<TransferClientInner>,
}

impl BankAccountsApi {
    pub(crate) fn new(inner: Arc<TransferClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new user bank account.
    ///
    /// Returns the created account as the raw `data` object of the upstream
    /// response.
    #[tracing::instrument(name = "Create Bank Account", skip(self, request))]
    pub async fn create(&self, request: &BankAccountRequest) -> Result<Value, Error> {
        self.inner.ensure_configured()?;
        validate_request(request, BANK_ACCOUNT_FIELDS)?;

        let (status, mut body) = self
            .inner
            .execute(Method::POST, "/api/user/bank-account", Some(request))
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    }

    /// Updates an existing user bank account.
    #[tracing::instrument(name = "Update Bank Account", skip(self, request))]
    pub async fn update(&self, uuid: &str, request: &BankAccountRequest) -> Result<Value, Error> {
        self.inner.ensure_configured()?;
        validate_request(request, BANK_ACCOUNT_FIELDS)?;

        let (status, mut body) = self
            .inner
            .execute(
                Method::PUT,
                &format!("/api/user/bank-account/{}", encode(uuid)),
                Some(request),
            )
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    }

    /// Retrieves the user bank accounts list, starting at the given
    /// pagination offset.
    ///
    /// Returns the full upstream body, pagination metadata included.
    #[tracing::instrument(name = "List Bank Accounts", skip(self))]
    pub async fn list(&self, offset: u32) -> Result<Value, Error> {
        let (status, body) = self
            .inner
            .execute::<()>(
                Method::GET,
                &format!("/api/user/bank-account?offset={}", offset),
                None,
            )
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(body)
    }
}
