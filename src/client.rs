//! Module containing the main Slick-Pay transfer API client.

use crate::{
    apis::{
        bank_accounts::BankAccountsApi, receivers::ReceiversApi, transfers::TransfersApi,
        TransferClientInner,
    },
    common::{CONNECT_TIMEOUT, DEFAULT_PRODUCTION_URL, DEFAULT_SANDBOX_URL, REQUEST_TIMEOUT},
    middlewares::authentication::BearerAuthMiddleware,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::SecretString;
use std::sync::Arc;

/// Remote environment a [`TransferClient`] talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// `https://dev.transfer.slick-pay.com`. The default.
    Sandbox,
    /// `https://transfer.slick-pay.com`.
    Production,
    /// A custom base URL, mainly useful for tests.
    Custom(Url),
}

impl Environment {
    /// Points every request at a single custom base URL.
    pub fn from_single_url(url: &Url) -> Self {
        Environment::Custom(url.clone())
    }

    pub(crate) fn base_url(&self) -> Url {
        match self {
            Environment::Sandbox => Url::parse(DEFAULT_SANDBOX_URL).unwrap(),
            Environment::Production => Url::parse(DEFAULT_PRODUCTION_URL).unwrap(),
            Environment::Custom(url) => url.clone(),
        }
    }

    /// Insecure TLS overrides are honored everywhere but production.
    pub(crate) fn allows_insecure_tls(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

/// Client for the Slick-Pay transfer public APIs.
///
/// The client is stateless: every method performs exactly one HTTP call and
/// no state is shared between calls, so a single instance can be used
/// concurrently from multiple tasks.
#[derive(Debug, Clone)]
pub struct TransferClient {
    /// Bank account APIs client.
    pub bank_accounts: BankAccountsApi,
    /// Receiver APIs client.
    pub receivers: ReceiversApi,
    /// Transfer and payment APIs client.
    pub transfers: TransfersApi,
}

impl TransferClient {
    /// Builds a new [`TransferClient`] with the default configuration,
    /// pointed at the sandbox environment.
    pub fn new(public_key: impl Into<String>) -> TransferClient {
        TransferClientBuilder::new(public_key.into()).build()
    }

    /// Returns a new builder to configure a new [`TransferClient`].
    pub fn builder(public_key: impl Into<String>) -> TransferClientBuilder {
        TransferClientBuilder::new(public_key.into())
    }
}

/// Builder for a [`TransferClient`].
#[derive(Debug)]
pub struct TransferClientBuilder {
    client: Option<reqwest::Client>,
    environment: Environment,
    public_key: SecretString,
    accept_invalid_hostnames: bool,
}

impl TransferClientBuilder {
    fn new(public_key: String) -> Self {
        Self {
            client: None,
            environment: Environment::Sandbox,
            public_key: SecretString::new(public_key),
            accept_invalid_hostnames: false,
        }
    }

    /// Consumes the builder and builds a new [`TransferClient`].
    pub fn build(self) -> TransferClient {
        let client = self
            .client
            .unwrap_or_else(|| default_http_client(&self.environment, self.accept_invalid_hostnames));

        let inner = Arc::new(TransferClientInner {
            client: build_client_with_middleware(client, self.public_key.clone()),
            environment: self.environment,
            public_key: self.public_key,
        });

        TransferClient {
            bank_accounts: BankAccountsApi::new(inner.clone()),
            receivers: ReceiversApi::new(inner.clone()),
            transfers: TransfersApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Timeouts and TLS settings are then taken from the given client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Selects the environment requests are sent to.
    ///
    /// Defaults to [`Environment::Sandbox`].
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Disables TLS hostname verification on the default HTTP client.
    ///
    /// Only honored outside [`Environment::Production`]; production
    /// connections always verify the remote host.
    pub fn danger_accept_invalid_hostnames(mut self, accept: bool) -> Self {
        self.accept_invalid_hostnames = accept;
        self
    }
}

fn default_http_client(environment: &Environment, accept_invalid_hostnames: bool) -> reqwest::Client {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT);

    if accept_invalid_hostnames && environment.allows_insecure_tls() {
        builder = builder.danger_accept_invalid_hostnames(true);
    }

    builder.build().expect("failed to initialize the TLS backend")
}

fn build_client_with_middleware(
    client: reqwest::Client,
    public_key: SecretString,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware)
        .with(BearerAuthMiddleware::new(public_key))
        .build()
}
