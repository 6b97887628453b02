//! Outbound request construction and dispatch.
//!
//! # Responsibilities
//! - Turn a ForwardSpec into exactly one native HTTP request
//! - Apply the declared headers (map semantics, later duplicates overwrite)
//! - Execute against the target and drop the response unread
//!
//! # Design Decisions
//! - Default-configured client: default timeouts, default redirect policy,
//!   no TLS customization, no pool tuning
//! - Construction failures are reported before any network activity
//! - One shared client; it holds no per-call state

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request};
use url::Url;

use crate::relay::envelope::ForwardSpec;
use crate::relay::error::RelayError;

/// Executes forward specs against their declared targets.
pub struct Forwarder {
    client: Client,
}

impl Forwarder {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Build and execute exactly one outbound request.
    ///
    /// The forwarded response is discarded without being read; only
    /// transport failure is surfaced.
    pub async fn dispatch(&self, spec: &ForwardSpec) -> Result<(), RelayError> {
        let request = self.build_request(spec)?;
        let response = self.client.execute(request).await?;
        tracing::debug!(status = %response.status(), "forwarded response discarded");
        Ok(())
    }

    /// Construct the outbound request from the spec, without sending it.
    fn build_request(&self, spec: &ForwardSpec) -> Result<Request, RelayError> {
        let method = Method::from_bytes(spec.method.as_bytes()).map_err(|e| {
            RelayError::Construction(format!("method {:?}: {}", spec.method, e))
        })?;
        let url = Url::parse(&spec.url)
            .map_err(|e| RelayError::Construction(format!("url {:?}: {}", spec.url, e)))?;

        let mut headers = HeaderMap::with_capacity(spec.headers.len());
        for (name, value) in &spec.headers {
            let parsed_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                RelayError::Construction(format!("header name {:?}: {}", name, e))
            })?;
            let parsed_value = HeaderValue::from_str(value).map_err(|e| {
                RelayError::Construction(format!("header value for {:?}: {}", name, e))
            })?;
            headers.insert(parsed_name, parsed_value);
        }

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = spec.body_bytes() {
            builder = builder.body(body.to_vec());
        }
        builder
            .build()
            .map_err(|e| RelayError::Construction(e.to_string()))
    }
}

impl Default for Forwarder {
    fn default() -> Self {
        Self::new()
    }
}
