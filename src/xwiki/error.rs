//! Failure kinds produced while fetching and assembling XWiki resources.

use thiserror::Error;

/// Why a single resource fetch did not yield a decoded value.
///
/// Callers higher up treat every variant except [`FetchError::InvalidUrl`] as
/// "fetch unavailable"; the variants exist so logs can say what actually
/// happened.
#[derive(Debug, Error)]
pub enum FetchError {
  /// The URL could not be parsed while canonicalizing it.
  #[error("invalid URL '{url}': {reason}")]
  InvalidUrl { url: String, reason: String },

  /// The transport failed before a complete response was received.
  #[error("XWiki server not reachable at {url}: {reason}")]
  NotReachable { url: String, reason: String },

  /// The server answered outside the 2xx class; the body was discarded.
  #[error("XWiki server returned status {status} for {url}")]
  NonSuccessStatus { url: String, status: u16 },

  /// The body of a 2xx response did not match the expected resource shape.
  #[error("unable to decode {resource} from {url}: {source}")]
  Decode {
    url: String,
    resource: &'static str,
    #[source]
    source: serde_json::Error,
  },
}

impl FetchError {
  /// `true` for the kinds that collapse to "the resource could not be
  /// retrieved" from the caller's point of view.
  pub fn is_unavailable(&self) -> bool {
    matches!(
      self,
      Self::NotReachable { .. } | Self::NonSuccessStatus { .. } | Self::Decode { .. }
    )
  }

  /// HTTP status carried by a [`FetchError::NonSuccessStatus`].
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::NonSuccessStatus { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Errors surfaced by the read operations of [`crate::xwiki::XWikiReader`].
#[derive(Debug, Error)]
pub enum ReadError {
  /// The page listing for a space could not be fetched or was empty.
  #[error("no page in space '{0}'")]
  NoPagesFound(String),

  /// A primary resource (not an enrichment) could not be fetched.
  #[error(transparent)]
  Fetch(#[from] FetchError),
}
