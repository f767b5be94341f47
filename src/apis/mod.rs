//! Clients for the various Slick-Pay transfer APIs.

use crate::{client::Environment, common::REMOTE_FAILURE_MESSAGE, error::Error};
use reqwest::{header, Method, StatusCode};
use reqwest_middleware::ClientWithMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use validator::{Validate, ValidationError, ValidationErrors};

pub mod bank_accounts;
pub mod receivers;
pub mod transfers;

pub(crate) struct TransferClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
    pub(crate) public_key: SecretString,
}

impl Debug for TransferClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl TransferClientInner {
    /// Credential guard shared by every operation. Runs before validation
    /// and before any network activity.
    pub(crate) fn ensure_configured(&self) -> Result<(), Error> {
        if self.public_key.expose_secret().is_empty() {
            return Err(Error::Configuration);
        }
        Ok(())
    }

    /// Executes one remote operation: builds the URL from the configured
    /// environment, sends the request and returns the HTTP status together
    /// with the JSON-decoded body (`Null` when the body is not JSON).
    pub(crate) async fn execute<B>(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Value), Error>
    where
        B: Serialize + ?Sized,
    {
        self.ensure_configured()?;

        let url = self.environment.base_url().join(path_and_query).unwrap();

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request
                .header(header::ACCEPT, "application/json")
                .json(body);
        }

        let response = request.send().await.map_err(Error::from)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(Error::from)?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok((status, body))
    }
}

/// Classifies a response into the envelope's failure kinds: a non-2xx
/// status maps to the fixed generic message, a truthy `errors` field in the
/// body maps to the body-supplied message.
pub(crate) fn ensure_remote_success(status: StatusCode, body: &Value) -> Result<(), Error> {
    if !status.is_success() {
        return Err(Error::Remote(vec![REMOTE_FAILURE_MESSAGE.to_string()]));
    }

    if is_truthy(body.get("errors").unwrap_or(&Value::Null)) {
        return Err(Error::Remote(vec![remote_error_message(body)]));
    }

    Ok(())
}

/// Picks the failure message out of an error body: `message` first, then
/// `msg`, then the fixed generic message.
fn remote_error_message(body: &Value) -> String {
    non_empty_str(body.get("message"))
        .or_else(|| non_empty_str(body.get("msg")))
        .map(str::to_owned)
        .unwrap_or_else(|| REMOTE_FAILURE_MESSAGE.to_string())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// PHP-style truthiness, as the upstream API applies it to the `errors`
/// field: `false`, `0`, `0.0`, `""`, `"0"`, `[]`, `{}` and `null` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Runs a request's field schema, reporting every failing field in the
/// given field order.
pub(crate) fn validate_request<T: Validate>(request: &T, fields: &[&str]) -> Result<(), Error> {
    match request.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(Error::Validation(ordered_messages(&errors, fields))),
    }
}

pub(crate) fn ordered_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let mut messages = Vec::new();
    for field in fields {
        messages.extend(field_messages(errors, field));
    }

    // The field list is exhaustive, but the envelope guarantees at least
    // one message per failure.
    if messages.is_empty() {
        messages.push("The given data was invalid.".to_string());
    }

    messages
}

pub(crate) fn field_messages(errors: &ValidationErrors, field: &str) -> Vec<String> {
    errors
        .field_errors()
        .get(field)
        .map(|field_errors| {
            field_errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid.", field),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// A RIB is a bank account identity: exactly 20 digits, leading zeros
/// included.
pub(crate) fn validate_rib(rib: &str) -> Result<(), ValidationError> {
    if rib.len() == 20 && rib.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(());
    }

    let mut error = ValidationError::new("digits");
    error.message = Some("The rib must be 20 digits.".into());
    Err(error)
}
