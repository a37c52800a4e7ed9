//! Assembles pages from the XWiki REST API by following relation links.
//!
//! A full page is built from a page-list summary in several hops: the
//! summary's `page` link yields the page, whose `attachments` and `objects`
//! links yield its enrichments. Failures are contained at the smallest
//! boundary: a failed page fetch drops only that page, a failed enrichment
//! drops only that enrichment. The only escalated failure of a listing is an
//! empty or unreadable space.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use tracing::{debug, warn};

use super::config::XWikiConfig;
use super::error::{FetchError, ReadError};
use super::fetcher::ResourceFetcher;
use super::models::{Attachment, Attachments, Link, ObjectSummary, Objects, Page, Pages, Properties, PropertyMap, Wikis, XWikiRoot};
use super::paths::ApiPaths;
use super::relations::{Relation, resolve_href};
use super::transport::{BasicAuth, HttpTransport, Transport};
use super::url::UrlPolicy;

/// Secondary fetches attempted for every page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
  Attachments,
  Objects,
  /// Typed-class metadata; not fetched yet and always succeeds empty.
  ClassMetadata,
}

impl Enrichment {
  pub const ALL: [Enrichment; 3] = [Enrichment::Attachments, Enrichment::Objects, Enrichment::ClassMetadata];
}

impl fmt::Display for Enrichment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Attachments => f.write_str("attachments"),
      Self::Objects => f.write_str("objects"),
      Self::ClassMetadata => f.write_str("class metadata"),
    }
  }
}

/// Result of one successful enrichment, applied to the page afterwards.
#[derive(Debug)]
enum Enriched {
  Attachments(Vec<Attachment>),
  Objects(Vec<ObjectSummary>),
  Nothing,
}

impl Enriched {
  fn apply(self, page: &mut Page) {
    match self {
      Self::Attachments(attachments) => page.attachments = Some(attachments),
      Self::Objects(objects) => page.objects = Some(objects),
      Self::Nothing => {}
    }
  }
}

/// Read-only XWiki client.
///
/// Every call fetches afresh; nothing is cached between calls.
#[derive(Clone)]
pub struct XWikiReader {
  pub(super) fetcher: ResourceFetcher,
  pub(super) paths: ApiPaths,
  pub(super) wiki: String,
  pub(super) users_class: String,
}

impl XWikiReader {
  /// Create a reader that sends its requests through `transport`.
  pub fn new(config: &XWikiConfig, transport: Arc<dyn Transport>) -> Self {
    Self {
      fetcher: ResourceFetcher::new(transport, UrlPolicy::new(config.https_only, config.media.clone())),
      paths: ApiPaths::new(config),
      wiki: config.wiki.clone(),
      users_class: config.users_class.clone(),
    }
  }

  /// Create a reader backed by [`HttpTransport`].
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built.
  pub fn connect(config: &XWikiConfig, auth: Option<BasicAuth>) -> Result<Self> {
    let transport = HttpTransport::new(config.timeout_secs, auth)?;
    Ok(Self::new(config, Arc::new(transport)))
  }

  pub fn paths(&self) -> &ApiPaths {
    &self.paths
  }

  pub fn url_policy(&self) -> &UrlPolicy {
    self.fetcher.policy()
  }

  /// Scheme-normalized absolute download URL of an attachment.
  pub fn attachment_url(&self, attachment: &Attachment) -> Option<String> {
    attachment
      .absolute_url
      .as_deref()
      .map(|url| self.url_policy().upgrade_scheme(url))
  }

  /// Fetch a single page without enrichments.
  ///
  /// # Errors
  /// Returns [`ReadError::Fetch`] when the page cannot be retrieved.
  pub async fn get_page(&self, space_path: &str, page_name: &str) -> Result<Page, ReadError> {
    let endpoint = self.paths.page_endpoint(space_path, page_name);
    Ok(self.fetcher.fetch(&endpoint).await?)
  }

  /// Fetch the raw page-summary listing of a space.
  ///
  /// # Errors
  /// Returns [`ReadError::Fetch`] when the listing cannot be retrieved.
  pub async fn get_pages(&self, space_path: &str) -> Result<Pages, ReadError> {
    let endpoint = self.paths.page_list_endpoint(space_path);
    Ok(self.fetcher.fetch(&endpoint).await?)
  }

  /// Fetch every page of a space, each enriched with whatever attachments
  /// and objects could be resolved.
  ///
  /// Pages keep the order of the listing. A page whose own fetch fails is
  /// left out; a failed enrichment leaves the matching field `None`.
  ///
  /// # Errors
  /// Returns [`ReadError::NoPagesFound`] when the listing cannot be fetched or
  /// holds no page summary. No other failure is propagated.
  pub async fn list_full_pages(&self, space_path: &str) -> Result<Vec<Page>, ReadError> {
    let endpoint = self.paths.page_list_endpoint(space_path);
    let listing = match self.fetcher.fetch::<Pages>(&endpoint).await {
      Ok(listing) if !listing.page_summaries.is_empty() => listing,
      Ok(_) => {
        warn!("Space '{space_path}' lists no page");
        return Err(ReadError::NoPagesFound(space_path.to_string()));
      }
      Err(e) => {
        warn!("Unable to list pages of space '{space_path}': {e}");
        return Err(ReadError::NoPagesFound(space_path.to_string()));
      }
    };

    let mut pages = Vec::with_capacity(listing.page_summaries.len());
    for summary in &listing.page_summaries {
      let Some(href) = resolve_href(Relation::Page, &summary.links) else {
        warn!("Page summary '{}' offers no page link, skipping it", summary.name);
        continue;
      };

      let mut page = match self.fetcher.fetch::<Page>(href).await {
        Ok(page) => page,
        Err(e) => {
          warn!("Skipping page '{}': {e}", summary.name);
          continue;
        }
      };

      self.enrich(&mut page).await;
      pages.push(page);
    }

    Ok(pages)
  }

  /// Properties of the first object attached to a page.
  ///
  /// Missing relations or objects yield an empty map, as do failures of the
  /// object and property hops (logged).
  ///
  /// # Errors
  /// Returns [`ReadError::Fetch`] when the page itself cannot be retrieved.
  pub async fn get_properties(&self, space_path: &str, page_name: &str) -> Result<PropertyMap, ReadError> {
    let page = self.get_page(space_path, page_name).await?;
    match self.page_properties(&page).await {
      Ok(properties) => Ok(properties.unwrap_or_default()),
      Err(e) => {
        warn!("Unable to resolve properties of page '{}': {e}", page.name);
        Ok(PropertyMap::new())
      }
    }
  }

  /// Populate `page.properties` from its first object, leaving it `None` when
  /// nothing can be resolved.
  pub async fn attach_properties(&self, page: &mut Page) {
    match self.page_properties(page).await {
      Ok(Some(properties)) => page.properties = Some(properties),
      Ok(None) => debug!("Page '{}' has no object properties", page.name),
      Err(e) => warn!("Unable to resolve properties of page '{}': {e}", page.name),
    }
  }

  /// Whether the server hosts a wiki named `wiki_name`.
  ///
  /// # Errors
  /// Returns [`ReadError::Fetch`] when the entry point or the wiki listing
  /// cannot be retrieved.
  pub async fn wiki_exists(&self, wiki_name: &str) -> Result<bool, ReadError> {
    let root: XWikiRoot = self.fetcher.fetch(self.paths.entrypoint()).await?;
    let Some(href) = resolve_href(Relation::Wikis, &root.links) else {
      warn!("API entry point offers no wiki listing");
      return Ok(false);
    };

    let wikis: Wikis = self.fetcher.fetch(href).await?;
    Ok(wikis.wikis.iter().any(|wiki| wiki.name == wiki_name))
  }

  /// [`Self::wiki_exists`] for the configured wiki.
  pub async fn check_target_wiki(&self) -> Result<bool, ReadError> {
    self.wiki_exists(&self.wiki).await
  }

  async fn enrich(&self, page: &mut Page) {
    let outcomes = {
      let snapshot: &Page = page;
      join_all(
        Enrichment::ALL
          .iter()
          .map(|enrichment| self.resolve_enrichment(*enrichment, snapshot)),
      )
      .await
    };

    for (enrichment, outcome) in Enrichment::ALL.into_iter().zip(outcomes) {
      match outcome {
        Ok(enriched) => enriched.apply(page),
        Err(e) => warn!("Unable to fetch {enrichment} of page '{}': {e}", page.name),
      }
    }
  }

  async fn resolve_enrichment(&self, enrichment: Enrichment, page: &Page) -> Result<Enriched, FetchError> {
    match enrichment {
      Enrichment::Attachments => Ok(
        self
          .page_attachments(page)
          .await?
          .map_or(Enriched::Nothing, Enriched::Attachments),
      ),
      Enrichment::Objects => Ok(
        self
          .objects_via(Relation::Objects, &page.links)
          .await?
          .map_or(Enriched::Nothing, Enriched::Objects),
      ),
      Enrichment::ClassMetadata => Ok(Enriched::Nothing),
    }
  }

  async fn page_attachments(&self, page: &Page) -> Result<Option<Vec<Attachment>>, FetchError> {
    let Some(href) = resolve_href(Relation::Attachments, &page.links) else {
      debug!("Page '{}' offers no attachments", page.name);
      return Ok(None);
    };

    let listing: Attachments = self.fetcher.fetch(href).await?;
    let policy = self.url_policy();
    let attachments = listing
      .attachments
      .into_iter()
      .map(|mut attachment| {
        attachment.absolute_url = attachment.absolute_url.map(|url| policy.upgrade_scheme(&url));
        attachment.relative_url = attachment.relative_url.map(|url| policy.upgrade_scheme(&url));
        attachment
      })
      .collect();

    Ok(Some(attachments))
  }

  /// Object summaries behind `relation`, `None` when the relation is not
  /// offered.
  pub(super) async fn objects_via(&self, relation: Relation, links: &[Link]) -> Result<Option<Vec<ObjectSummary>>, FetchError> {
    let Some(href) = resolve_href(relation, links) else {
      debug!("Resource offers no {relation} link");
      return Ok(None);
    };

    let objects: Objects = self.fetcher.fetch(href).await?;
    Ok(Some(objects.object_summaries))
  }

  /// Flattened properties of one object, `None` when it offers no
  /// properties link.
  pub(super) async fn object_properties(&self, object: &ObjectSummary) -> Result<Option<PropertyMap>, FetchError> {
    let Some(href) = resolve_href(Relation::Properties, &object.links) else {
      debug!("Object '{}' offers no properties", object.class_name);
      return Ok(None);
    };

    let properties: Properties = self.fetcher.fetch(href).await?;
    Ok(Some(properties.into_map()))
  }

  async fn page_properties(&self, page: &Page) -> Result<Option<PropertyMap>, FetchError> {
    let Some(objects) = self.objects_via(Relation::Objects, &page.links).await? else {
      return Ok(None);
    };
    let Some(first) = objects.first() else {
      debug!("Page '{}' carries no object", page.name);
      return Ok(None);
    };
    self.object_properties(first).await
  }
}
