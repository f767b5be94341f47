//! Standard errors used by all functions in the crate.

use crate::common::MISSING_PUBLIC_KEY_MESSAGE;

/// Error collecting all possible failures of the Slick-Pay transfer client.
///
/// Exactly one kind is produced per failed call, and every kind carries an
/// ordered list of human-readable messages (see [`Error::messages`]).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No public key was configured on the client.
    ///
    /// Produced before any network activity.
    #[error("{}", MISSING_PUBLIC_KEY_MESSAGE)]
    Configuration,
    /// One or more request parameters failed the local schema.
    ///
    /// Carries one message per failing field, in field order. Produced
    /// before any network activity.
    #[error("invalid request parameters: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// The request could not be completed: connection failure, timeout, or
    /// a response body that did not decode into the expected shape.
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),
    /// The remote API reported a failure, either through a non-2xx HTTP
    /// status or an application-level `errors` flag in the body.
    #[error("remote failure: {}", .0.join("; "))]
    Remote(Vec<String>),
}

impl Error {
    /// Ordered human-readable messages describing this failure.
    ///
    /// Always non-empty, even when a single message applies.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Configuration => vec![MISSING_PUBLIC_KEY_MESSAGE.to_string()],
            Error::Validation(messages) | Error::Remote(messages) => messages.clone(),
            Error::Transport(source) => vec![source.to_string()],
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Transport(e.into())
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::Transport(e.into()),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Transport)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}
