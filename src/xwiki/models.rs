//! Data transfer objects returned by the XWiki REST API (`media=json`).
//!
//! XWiki serializes absent values as explicit `null`s, so collection and text
//! fields that callers expect to always hold a value go through
//! [`null_as_default`].

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Flattened `name -> value` view of an object's properties.
pub type PropertyMap = BTreeMap<String, String>;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Typed hyperlink embedded in every resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
  /// Relation URI, e.g. `http://www.xwiki.org/rel/attachments`.
  pub rel: String,
  /// Absolute URL of the related resource.
  pub href: String,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  /// Media type hint, rarely populated.
  pub media_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub href_lang: Option<String>,
}

/// Root resource served at the API entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XWikiRoot {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  /// Version of the XWiki platform.
  pub version: Option<String>,
}

/// A wiki hosted by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wiki {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub id: String,
  /// Wiki name, the value matched by existence checks.
  pub name: String,
  pub description: Option<String>,
  pub owner: Option<String>,
}

/// Wiki listing wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wikis {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub wikis: Vec<Wiki>,
}

/// Lightweight listing entry referencing a full page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub id: String,
  /// Dotted reference such as `Blog.News.WebHome`.
  pub full_name: Option<String>,
  pub wiki: Option<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub space: String,
  pub name: String,
  pub title: Option<String>,
  pub parent: Option<String>,
}

/// Page listing for one space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pages {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub page_summaries: Vec<PageSummary>,
}

/// Full page, optionally enriched with related resources.
///
/// `attachments`, `objects`, and `properties` are never read from the wire;
/// they are `Some` only when the corresponding enrichment succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub id: String,
  pub full_name: Option<String>,
  pub wiki: Option<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub space: String,
  pub name: String,
  pub title: Option<String>,
  pub parent: Option<String>,
  pub version: Option<String>,
  pub author: Option<String>,
  pub syntax: Option<String>,
  pub language: Option<String>,
  #[serde(rename = "xwikiAbsoluteUrl")]
  /// Browser URL of the page.
  pub absolute_url: Option<String>,
  /// Raw page source in the page syntax.
  #[serde(default, deserialize_with = "null_as_default")]
  pub content: String,
  #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
  pub attachments: Option<Vec<Attachment>>,
  #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
  pub objects: Option<Vec<ObjectSummary>>,
  #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
  pub properties: Option<PropertyMap>,
}

/// File attached to a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub id: String,
  #[serde(rename = "name")]
  pub filename: String,
  #[serde(default, deserialize_with = "null_as_default")]
  /// Size in bytes.
  pub size: u64,
  pub mime_type: Option<String>,
  pub version: Option<String>,
  pub author: Option<String>,
  #[serde(rename = "xwikiAbsoluteUrl")]
  /// Download URL including scheme and host.
  pub absolute_url: Option<String>,
  #[serde(rename = "xwikiRelativeUrl")]
  /// Download URL relative to the server root.
  pub relative_url: Option<String>,
}

/// Attachment listing wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachments {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub attachments: Vec<Attachment>,
}

/// Typed object attached to a page (user profile, group member, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub id: String,
  pub guid: Option<String>,
  pub page_name: Option<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  /// Dotted class reference, e.g. `XWiki.XWikiUsers`.
  pub class_name: String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub number: i32,
  #[serde(default, deserialize_with = "null_as_default")]
  /// Short textual rendering of the object.
  pub headline: String,
}

/// Object listing wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objects {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub object_summaries: Vec<ObjectSummary>,
}

/// Single resolved property value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  pub name: String,
  #[serde(rename = "type")]
  pub property_type: Option<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub value: String,
}

/// Property listing wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub properties: Vec<Property>,
}

impl Properties {
  /// Flatten into a `name -> value` map; a repeated name keeps its last value.
  pub fn into_map(self) -> PropertyMap {
    self
      .properties
      .into_iter()
      .map(|property| (property.name, property.value))
      .collect()
  }
}

/// One hit of a search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(rename = "type")]
  pub result_type: Option<String>,
  pub id: Option<String>,
  pub page_full_name: Option<String>,
  pub title: Option<String>,
  pub space: Option<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub page_name: String,
}

/// Search result wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
  #[serde(default, deserialize_with = "null_as_default")]
  pub links: Vec<Link>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub search_results: Vec<SearchResult>,
}
