//! HTTP transport capability consumed by the resource fetcher.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

/// Status and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  pub status: u16,
  pub body: Vec<u8>,
}

impl HttpResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// The request never produced a complete response (timeout, refused
/// connection, truncated body, ...).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// GET-only transport (enables testing with fake implementations).
#[async_trait]
pub trait Transport: Send + Sync {
  /// Issue a GET for an already canonical URL.
  ///
  /// # Errors
  /// Returns [`TransportError`] when no response could be obtained. Non-2xx
  /// statuses are not errors at this level.
  async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Basic-auth credentials attached to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
  pub username: String,
  pub password: String,
}

impl BasicAuth {
  fn header_value(&self) -> String {
    let credentials = format!("{}:{}", self.username, self.password);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
  }
}

/// `reqwest`-backed transport with a bounded per-request timeout.
#[derive(Clone)]
pub struct HttpTransport {
  client: reqwest::Client,
  auth: Option<BasicAuth>,
}

impl HttpTransport {
  /// Build a transport.
  ///
  /// # Arguments
  /// * `timeout_secs` - Upper bound for each request, connection included.
  /// * `auth` - Optional credentials sent as an `Authorization: Basic` header.
  ///
  /// # Errors
  /// Returns an error if the underlying `reqwest::Client` cannot be built.
  pub fn new(timeout_secs: u64, auth: Option<BasicAuth>) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .user_agent(format!(
        "xwiki-reader/{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TARGET")
      ))
      .build()
      .context("Failed to create HTTP client")?;

    Ok(Self { client, auth })
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
    let mut request = self.client.get(url).header("Accept", "application/json");
    if let Some(auth) = &self.auth {
      request = request.header("Authorization", auth.header_value());
    }

    let response = request.send().await.map_err(|e| TransportError(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
      .bytes()
      .await
      .map_err(|e| TransportError(format!("failed to read response body: {e}")))?;

    Ok(HttpResponse {
      status,
      body: body.to_vec(),
    })
  }
}
