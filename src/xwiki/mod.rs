//! XWiki module providing the REST models, URL policy, relation resolution,
//! transport abstraction, and the page-assembling reader.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod paths;
pub mod reader;
pub mod relations;
pub mod transport;
pub mod url;
pub mod users;

pub use config::XWikiConfig;
pub use error::{FetchError, ReadError};
pub use fetcher::ResourceFetcher;
#[allow(unused_imports)]
pub use models::{
  Attachment, Attachments, Link, ObjectSummary, Objects, Page, PageSummary, Pages, Properties, Property, PropertyMap,
  SearchResult, SearchResults, Wiki, Wikis, XWikiRoot,
};
pub use paths::{ApiPaths, space_segments};
pub use reader::{Enrichment, XWikiReader};
pub use relations::{Relation, resolve_href};
pub use transport::{BasicAuth, HttpResponse, HttpTransport, Transport, TransportError};
pub use url::UrlPolicy;
