//! Settings consumed by the reader.
//!
//! Loading these values is the caller's business (the CLI fills them from
//! flags and environment variables); the core only reads them.

use serde::Deserialize;

/// Connection and URL policy settings for one XWiki instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XWikiConfig {
  /// Scheme and host of the XWiki server, e.g. `https://wiki.example.org`.
  pub base_url: String,
  /// Path of the REST entry point below `base_url`, usually `/rest`.
  pub api_entrypoint: String,
  /// Name of the wiki every content path is resolved against.
  pub wiki: String,
  /// Rewrite `http:` to `https:` on every outgoing and returned URL.
  pub https_only: bool,
  /// Value injected as the `media` query parameter (`json` or `xml`).
  pub media: String,
  /// Class name identifying the user profile object on user pages.
  pub users_class: String,
  /// Per-request timeout applied by the HTTP transport.
  pub timeout_secs: u64,
}

impl Default for XWikiConfig {
  fn default() -> Self {
    Self {
      base_url: String::new(),
      api_entrypoint: "/rest".to_string(),
      wiki: "xwiki".to_string(),
      https_only: false,
      media: "json".to_string(),
      users_class: "XWiki.XWikiUsers".to_string(),
      timeout_secs: 30,
    }
  }
}

impl XWikiConfig {
  /// Create a configuration for `base_url` with every other field defaulted.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      ..Self::default()
    }
  }
}
