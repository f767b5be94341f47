use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Field order used when reporting validation failures, matching the
/// upstream schema declaration.
pub(crate) static RECEIVER_FIELDS: &[&str] =
    &["title", "fname", "lname", "phone", "email", "rib", "address"];

/// Parameters for creating or updating a receiver.
///
/// Same identity fields as a bank account, plus optional contact details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Validate, Builder)]
#[builder(derive(Debug))]
pub struct ReceiverRequest {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    /// Bank account identity of the receiver, exactly 20 digits.
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

/// One page of receivers, as upstream paginates them.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ReceiverList {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: Value,
    #[serde(default)]
    pub links: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apis::validate_request, Error};

    fn valid_request() -> ReceiverRequest {
        ReceiverRequestBuilder::default()
            .title("Supplier")
            .fname("Amine")
            .lname("Bensalem")
            .rib("12345678901234567890")
            .address("5 Rue Larbi Ben M'hidi, Oran")
            .build()
            .unwrap()
    }

    #[test]
    fn contact_details_are_optional() {
        assert!(validate_request(&valid_request(), RECEIVER_FIELDS).is_ok());
    }

    #[test]
    fn an_invalid_email_is_reported() {
        let mut request = valid_request();
        request.email = Some("not-an-email".to_string());

        let err = validate_request(&request, RECEIVER_FIELDS).expect_err("schema passed");
        match err {
            Error::Validation(messages) => assert_eq!(
                messages,
                vec!["The email must be a valid email address.".to_string()]
            ),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn a_missing_page_section_deserializes_to_null() {
        let list: ReceiverList = serde_json::from_value(serde_json::json!({
            "data": [{"uuid": "abc"}]
        }))
        .unwrap();

        assert_eq!(list.data, serde_json::json!([{"uuid": "abc"}]));
        assert_eq!(list.meta, Value::Null);
        assert_eq!(list.links, Value::Null);
    }
}
