//! Fake XWiki transport for testing
//!
//! Serves canned responses keyed by URL (query string ignored) without making
//! any network request, and records every URL it was asked for.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use xwiki_reader::xwiki::{HttpResponse, Transport, TransportError, XWikiConfig, XWikiReader};

/// Base URL every fixture href lives under.
pub const BASE_URL: &str = "https://wiki.test";

/// What the fake answers for one route.
#[derive(Debug, Clone)]
enum Route {
  Json(serde_json::Value),
  Status(u16),
  Unreachable(String),
}

/// A transport that answers from an in-memory route table
#[derive(Default)]
pub struct FakeXWiki {
  routes: HashMap<String, Route>,
  requests: Mutex<Vec<String>>,
}

impl FakeXWiki {
  pub fn new() -> Self {
    Self::default()
  }

  /// Answer `url` with a 200 and `body`.
  pub fn with_json(mut self, url: &str, body: serde_json::Value) -> Self {
    self.routes.insert(route_key(url), Route::Json(body));
    self
  }

  /// Answer `url` with an empty body and `status`.
  pub fn with_status(mut self, url: &str, status: u16) -> Self {
    self.routes.insert(route_key(url), Route::Status(status));
    self
  }

  /// Fail `url` before any response is produced.
  pub fn with_unreachable(mut self, url: &str, reason: &str) -> Self {
    self.routes.insert(route_key(url), Route::Unreachable(reason.to_string()));
    self
  }

  /// Every URL requested so far, in order, exactly as received.
  pub fn requests(&self) -> Vec<String> {
    self.requests.lock().unwrap().clone()
  }
}

fn route_key(url: &str) -> String {
  url.split('?').next().unwrap_or(url).to_string()
}

#[async_trait]
impl Transport for FakeXWiki {
  async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
    self.requests.lock().unwrap().push(url.to_string());

    match self.routes.get(&route_key(url)) {
      Some(Route::Json(body)) => Ok(HttpResponse {
        status: 200,
        body: serde_json::to_vec(body).unwrap(),
      }),
      Some(Route::Status(status)) => Ok(HttpResponse {
        status: *status,
        body: Vec::new(),
      }),
      Some(Route::Unreachable(reason)) => Err(TransportError(reason.clone())),
      None => Ok(HttpResponse {
        status: 404,
        body: Vec::new(),
      }),
    }
  }
}

/// Build a reader over `fake` with the default configuration.
pub fn reader(fake: Arc<FakeXWiki>) -> XWikiReader {
  reader_with(XWikiConfig::new(BASE_URL), fake)
}

/// Build a reader over `fake` with a custom configuration.
pub fn reader_with(config: XWikiConfig, fake: Arc<FakeXWiki>) -> XWikiReader {
  XWikiReader::new(&config, fake)
}
