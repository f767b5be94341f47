use crate::Error;
use async_trait::async_trait;
use reqwest::{header::HeaderValue, Request, Response};
use reqwest_middleware::{Middleware, Next};
use secrecy::{ExposeSecret, SecretString};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the configured public key as a bearer token
/// into outgoing HTTP requests.
///
/// An empty key aborts the request before it leaves the process.
pub struct BearerAuthMiddleware {
    public_key: SecretString,
}

impl BearerAuthMiddleware {
    pub(crate) fn new(public_key: SecretString) -> Self {
        Self { public_key }
    }
}

#[async_trait]
impl Middleware for BearerAuthMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let public_key = self.public_key.expose_secret();
        if public_key.is_empty() {
            return Err(Error::Configuration.into());
        }

        // Inject the public key as a bearer token header
        let mut header_value = HeaderValue::from_str(&format!("Bearer {}", public_key))
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert("Authorization", header_value);

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}
