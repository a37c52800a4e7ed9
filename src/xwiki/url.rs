//! URL canonicalization applied before every request.
//!
//! XWiki hands out hrefs that may be percent-encoded, may use `http` behind a
//! TLS-terminating proxy, and never carry the `media` parameter that selects
//! the response representation. [`UrlPolicy::canonicalize`] fixes all three.

use url::Url;

use super::error::FetchError;

/// Query parameter selecting the REST representation (`json` / `xml`).
pub const MEDIA_PARAM: &str = "media";

/// Scheme and representation policy shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPolicy {
  https_only: bool,
  media: String,
}

impl UrlPolicy {
  pub fn new(https_only: bool, media: impl Into<String>) -> Self {
    Self {
      https_only,
      media: media.into(),
    }
  }

  pub fn https_only(&self) -> bool {
    self.https_only
  }

  pub fn media(&self) -> &str {
    &self.media
  }

  /// Rewrite a leading `http:` scheme to `https:` when the policy is
  /// HTTPS-only. Every other input is returned unchanged.
  ///
  /// This is the only step applied to attachment URLs handed back to
  /// callers.
  pub fn upgrade_scheme(&self, url: &str) -> String {
    match url.strip_prefix("http:") {
      Some(rest) if self.https_only => format!("https:{rest}"),
      _ => url.to_string(),
    }
  }

  /// Produce the canonical form of `url`.
  ///
  /// Steps, in order: scheme upgrade, percent-decoding, injection of
  /// `media=<media>` (replacing any existing value), and a second
  /// percent-decoding pass because the injection re-encodes the query.
  /// Applying it to its own output returns the same string.
  ///
  /// # Errors
  /// Returns [`FetchError::InvalidUrl`] when the input does not decode to
  /// UTF-8 or does not parse as an absolute URL.
  pub fn canonicalize(&self, url: &str) -> Result<String, FetchError> {
    let secured = self.upgrade_scheme(url);
    let decoded = percent_decode(&secured, url)?;

    let mut parsed = Url::parse(&decoded).map_err(|e| FetchError::InvalidUrl {
      url: url.to_string(),
      reason: e.to_string(),
    })?;

    let retained: Vec<(String, String)> = parsed
      .query_pairs()
      .filter(|(key, _)| key != MEDIA_PARAM)
      .map(|(key, value)| (key.into_owned(), value.into_owned()))
      .collect();

    parsed
      .query_pairs_mut()
      .clear()
      .extend_pairs(retained)
      .append_pair(MEDIA_PARAM, &self.media);

    percent_decode(parsed.as_str(), url)
  }
}

fn percent_decode(value: &str, original: &str) -> Result<String, FetchError> {
  urlencoding::decode(value)
    .map(|decoded| decoded.into_owned())
    .map_err(|e| FetchError::InvalidUrl {
      url: original.to_string(),
      reason: e.to_string(),
    })
}
