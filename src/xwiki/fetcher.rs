//! Canonicalize, GET, classify, decode.

use std::any::type_name;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::error::FetchError;
use super::transport::Transport;
use super::url::UrlPolicy;

/// Retrieves typed resources through an injected [`Transport`].
///
/// A fetch either yields a fully decoded value or a [`FetchError`]; nothing
/// partially decoded ever escapes.
#[derive(Clone)]
pub struct ResourceFetcher {
  transport: Arc<dyn Transport>,
  policy: UrlPolicy,
}

impl ResourceFetcher {
  pub fn new(transport: Arc<dyn Transport>, policy: UrlPolicy) -> Self {
    Self { transport, policy }
  }

  pub fn policy(&self) -> &UrlPolicy {
    &self.policy
  }

  /// Fetch and decode the resource at `url`.
  ///
  /// # Errors
  /// * [`FetchError::InvalidUrl`] if `url` cannot be canonicalized.
  /// * [`FetchError::NotReachable`] on transport failure.
  /// * [`FetchError::NonSuccessStatus`] for any status outside 2xx.
  /// * [`FetchError::Decode`] if the body does not match `T`.
  pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
    let url = self.policy.canonicalize(url)?;
    info!("Requesting XWiki server: {url}");

    let response = self.transport.get(&url).await.map_err(|e| {
      warn!("XWiki server not reachable at {url}: {e}");
      FetchError::NotReachable {
        url: url.clone(),
        reason: e.to_string(),
      }
    })?;

    if !response.is_success() {
      warn!("XWiki server returned status {} for {url}", response.status);
      return Err(FetchError::NonSuccessStatus {
        url,
        status: response.status,
      });
    }

    let resource = short_type_name::<T>();
    match serde_json::from_slice::<T>(&response.body) {
      Ok(value) => {
        debug!("Decoded {resource} from {url}");
        Ok(value)
      }
      Err(source) => {
        warn!("Unable to decode {resource} from {url}: {source}");
        Err(FetchError::Decode { url, resource, source })
      }
    }
  }
}

fn short_type_name<T>() -> &'static str {
  let full = type_name::<T>();
  full.rsplit("::").next().unwrap_or(full)
}
