use crate::{apis::field_messages, Error};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Kind of transfer to initiate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    /// Towards a bank account outside Slick-Pay.
    External,
    /// Between two Slick-Pay accounts.
    Internal,
}

/// Parameters for initiating a new payment.
///
/// The beneficiary is either an existing receiver (`receiver_uuid`) or an
/// inline one (`rib` plus the identity fields that become required with
/// it). Setting `transfer_id` resubmits an existing draft transfer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate, Builder)]
#[builder(derive(Debug))]
pub struct CreatePaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    #[validate(range(min = 1.0, message = "The transfer id must be at least 1."))]
    pub transfer_id: Option<u64>,
    /// Amount in DZD.
    #[validate(range(min = 100.0, message = "The amount must be at least 100."))]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub receiver_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(custom = "crate::apis::validate_rib")]
    pub rib: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(length(
        min = 2,
        max = 225,
        message = "The title must be between 2 and 225 characters."
    ))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(length(
        min = 2,
        max = 225,
        message = "The fname must be between 2 and 225 characters."
    ))]
    pub fname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(length(
        min = 2,
        max = 225,
        message = "The lname must be between 2 and 225 characters."
    ))]
    pub lname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(length(
        min = 5,
        max = 225,
        message = "The address must be between 5 and 225 characters."
    ))]
    pub address: Option<String>,
    /// Where the payer is redirected once the payment completes.
    #[serde(rename = "returnUrl", skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(url(message = "The return url format is invalid."))]
    pub return_url: Option<String>,
    #[serde(rename = "type")]
    pub transfer_type: TransferType,
}

impl CreatePaymentRequest {
    /// Runs the full parameter schema, cross-field rules included,
    /// reporting every failing field in declaration order.
    pub(crate) fn check(&self) -> Result<(), Error> {
        let errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        let mut messages = Vec::new();

        messages.extend(field_messages(&errors, "transfer_id"));
        messages.extend(field_messages(&errors, "amount"));
        if self.rib.is_none() && !has_text(&self.receiver_uuid) {
            messages
                .push("The receiver uuid field is required when rib is not present.".to_string());
        }
        messages.extend(field_messages(&errors, "rib"));
        messages.extend(field_messages(&errors, "email"));
        for (name, value) in [
            ("title", &self.title),
            ("fname", &self.fname),
            ("lname", &self.lname),
            ("address", &self.address),
        ] {
            if self.rib.is_some() && !has_text(value) {
                messages.push(format!("The {} field is required when rib is present.", name));
            } else {
                messages.extend(field_messages(&errors, name));
            }
        }
        messages.extend(field_messages(&errors, "returnUrl"));

        if messages.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(messages))
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |s| !s.is_empty())
}

#[derive(Serialize, Debug, Clone, Copy)]
pub(crate) struct CommissionRequest {
    pub(crate) amount: f64,
}

/// Commission charged for a transfer of the submitted amount.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Commission {
    pub amount: f64,
}

/// Outcome of a successfully initiated payment.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatePaymentResponse {
    /// Identifier to poll [`payment_status`](super::TransfersApi::payment_status) with.
    #[serde(rename = "transfer_id")]
    pub transfer_id: u64,
    /// Payment page the payer must be redirected to.
    #[serde(rename = "url")]
    pub redirect_url: String,
}

/// State of a previously initiated payment.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentStatus {
    /// The transfer was initiated but the payer has not completed it yet.
    Draft,
    /// The transfer went through; the receipt details are attached.
    Completed(CompletedPayment),
}

/// Receipt of a completed payment.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CompletedPayment {
    pub date: String,
    pub amount: f64,
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    #[serde(rename = "approvalCode")]
    pub approval_code: String,
    /// URL of the receipt document.
    pub pdf: String,
    #[serde(rename = "respCode_desc")]
    pub resp_code: String,
}
