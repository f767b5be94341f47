use crate::{
    apis::{
        ensure_remote_success,
        transfers::{
            model::CommissionRequest, Commission, CreatePaymentRequest, CreatePaymentResponse,
            PaymentStatus,
        },
        TransferClientInner,
    },
    Error,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Slick-Pay transfer APIs client.
#[derive(Clone, Debug)]
pub struct TransfersApi {
    inner: Arc<TransferClientInner>,
}

impl TransfersApi {
    pub(crate) fn new(inner: Arc<TransferClientInner>) -> Self {
        Self { inner }
    }

    /// Calculates the commission charged for a transfer of the given
    /// amount.
    ///
    /// The amount must be a finite number strictly greater than 100.
    #[tracing::instrument(name = "Calculate Commission", skip(self))]
    pub async fn calculate_commission(&self, amount: f64) -> Result<Commission, Error> {
        self.inner.ensure_configured()?;
        if !amount.is_finite() || amount <= 100.0 {
            return Err(Error::Validation(vec![
                "The amount must be a valid number.".to_string(),
            ]));
        }

        let (status, body) = self
            .inner
            .execute(
                Method::POST,
                "/api/user/transfer/commission",
                Some(&CommissionRequest { amount }),
            )
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(serde_json::from_value(body)?)
    }

    /// Initiates a new payment.
    ///
    /// On success the payer must be redirected to
    /// [`redirect_url`](CreatePaymentResponse::redirect_url) to complete
    /// the transfer.
    #[tracing::instrument(
        name = "Create Payment",
        skip(self, request),
        fields(amount = request.amount)
    )]
    pub async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<CreatePaymentResponse, Error> {
        self.inner.ensure_configured()?;
        request.check()?;

        let (status, body) = self
            .inner
            .execute(Method::POST, "/api/user/transfer", Some(request))
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(serde_json::from_value(body)?)
    }

    /// Checks the status of a previously initiated payment.
    ///
    /// A body reporting a draft transfer short-circuits every other check,
    /// HTTP status included: upstream answers drafts with a bare
    /// `{"msg": "draft"}` regardless of the status line.
    #[tracing::instrument(name = "Payment Status", skip(self))]
    pub async fn payment_status(&self, transfer_id: u64) -> Result<PaymentStatus, Error> {
        let (status, body) = self
            .inner
            .execute::<()>(
                Method::GET,
                &format!("/api/user/transfer/{}", transfer_id),
                None,
            )
            .await?;

        if body.get("msg").and_then(Value::as_str) == Some("draft") {
            return Ok(PaymentStatus::Draft);
        }
        ensure_remote_success(status, &body)?;

        Ok(PaymentStatus::Completed(serde_json::from_value(body)?))
    }

    /// Retrieves the user's payment history, starting at the given
    /// pagination offset.
    ///
    /// Returns the full upstream body, pagination metadata included.
    #[tracing::instrument(name = "Payment History", skip(self))]
    pub async fn payment_history(&self, offset: u32) -> Result<Value, Error> {
        let (status, body) = self
            .inner
            .execute::<()>(
                Method::GET,
                &format!("/api/user/transfer?offset={}", offset),
                None,
            )
            .await?;
        ensure_remote_success(status, &body)?;

        Ok(body)
    }
}
