use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Field order used when reporting validation failures.
pub(crate) static BANK_ACCOUNT_FIELDS: &[&str] = &["title", "fname", "lname", "rib", "address"];

/// Parameters for creating or updating a user bank account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Validate, Builder)]
#[builder(derive(Debug))]
pub struct BankAccountRequest {
    /// Label of the account, e.g. "Company account".
    #[validate(length(min = 1, message = "The title field is required."))]
    #[builder(setter(into))]
    pub title: String,
    #[validate(length(
        min = 2,
        max = 255,
        message = "The fname must be between 2 and 255 characters."
    ))]
    #[builder(setter(into))]
    pub fname: String,
    #[validate(length(
        min = 2,
        max = 255,
        message = "The lname must be between 2 and 255 characters."
    ))]
    #[builder(setter(into))]
    pub lname: String,
    /// Bank account identity, exactly 20 digits.
    #[validate(custom = "crate::apis::validate_rib")]
    #[builder(setter(into))]
    pub rib: String,
    #[validate(length(
        min = 5,
        max = 255,
        message = "The address must be between 5 and 255 characters."
    ))]
    #[builder(setter(into))]
    pub address: String,
}
