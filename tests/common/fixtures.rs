//! Test fixtures for XWiki REST responses
//!
//! Shapes follow the JSON representation of the XWiki REST API, with links
//! carrying `http://www.xwiki.org/rel/...` relation URIs.

#![allow(dead_code)]

use serde_json::{Value, json};

pub const REST: &str = "https://wiki.test/rest";
pub const WIKI: &str = "https://wiki.test/rest/wikis/xwiki";

pub fn rel(name: &str) -> String {
  format!("http://www.xwiki.org/rel/{name}")
}

pub fn link(name: &str, href: &str) -> Value {
  json!({"rel": rel(name), "href": href})
}

/// `{WIKI}/spaces/Blog/spaces/News`
pub fn news_space() -> String {
  format!("{WIKI}/spaces/Blog/spaces/News")
}

pub fn news_page_url(name: &str) -> String {
  format!("{}/pages/{name}", news_space())
}

pub fn root_response() -> Value {
  json!({
    "links": [link("wikis", &format!("{REST}/wikis"))],
    "version": "15.10"
  })
}

pub fn wikis_response(names: &[&str]) -> Value {
  let wikis: Vec<Value> = names
    .iter()
    .map(|name| {
      json!({
        "id": name,
        "name": name,
        "links": [link("spaces", &format!("{REST}/wikis/{name}/spaces"))]
      })
    })
    .collect();
  json!({"links": [], "wikis": wikis})
}

pub fn page_summary(name: &str) -> Value {
  json!({
    "id": format!("xwiki:Blog.News.{name}"),
    "fullName": format!("Blog.News.{name}"),
    "wiki": "xwiki",
    "space": "Blog.News",
    "name": name,
    "title": name,
    "links": [link("page", &news_page_url(name))]
  })
}

pub fn page_listing(names: &[&str]) -> Value {
  let summaries: Vec<Value> = names.iter().map(|name| page_summary(name)).collect();
  json!({"links": [], "pageSummaries": summaries})
}

/// A page offering attachments and objects links.
pub fn page_response(name: &str, title: &str) -> Value {
  let url = news_page_url(name);
  json!({
    "id": format!("xwiki:Blog.News.{name}"),
    "fullName": format!("Blog.News.{name}"),
    "wiki": "xwiki",
    "space": "Blog.News",
    "name": name,
    "title": title,
    "version": "1.1",
    "author": "XWiki.jdoe",
    "syntax": "xwiki/2.1",
    "content": format!("= {title} ="),
    "xwikiAbsoluteUrl": format!("http://wiki.test/bin/view/Blog/News/{name}"),
    "links": [
      link("attachments", &format!("{url}/attachments")),
      link("objects", &format!("{url}/objects"))
    ]
  })
}

pub fn attachments_response(page: &str, files: &[(&str, u64, &str)]) -> Value {
  let attachments: Vec<Value> = files
    .iter()
    .map(|(file, size, mime)| {
      json!({
        "id": format!("xwiki:Blog.News.{page}@{file}"),
        "name": file,
        "size": size,
        "mimeType": mime,
        "version": "1.1",
        "author": "XWiki.jdoe",
        "xwikiAbsoluteUrl": format!("http://wiki.test/bin/download/Blog/News/{page}/{file}"),
        "xwikiRelativeUrl": format!("/bin/download/Blog/News/{page}/{file}")
      })
    })
    .collect();
  json!({"links": [], "attachments": attachments})
}

pub fn object_summary(objects_url: &str, class_name: &str, number: i32, headline: &str) -> Value {
  let object_url = format!("{objects_url}/{class_name}/{number}");
  json!({
    "id": format!("{class_name}-{number}"),
    "guid": format!("guid-{class_name}-{number}"),
    "className": class_name,
    "number": number,
    "headline": headline,
    "links": [
      link("object", &object_url),
      link("properties", &format!("{object_url}/properties"))
    ]
  })
}

pub fn objects_response(summaries: Vec<Value>) -> Value {
  json!({"links": [], "objectSummaries": summaries})
}

pub fn properties_response(pairs: &[(&str, &str)]) -> Value {
  let properties: Vec<Value> = pairs
    .iter()
    .map(|(name, value)| json!({"name": name, "type": "String", "value": value, "links": []}))
    .collect();
  json!({"links": [], "properties": properties})
}

pub fn group_search_response(page_names: &[&str]) -> Value {
  let results: Vec<Value> = page_names
    .iter()
    .map(|name| {
      json!({
        "type": "page",
        "id": format!("xwiki:XWiki.{name}"),
        "pageFullName": format!("XWiki.{name}"),
        "title": name,
        "space": "XWiki",
        "pageName": name,
        "links": []
      })
    })
    .collect();
  json!({"links": [], "searchResults": results})
}

/// A user page at wiki level; its `object` link points at the listing of
/// its `XWiki.XWikiUsers` objects.
pub fn user_page_response(name: &str) -> Value {
  let url = format!("{WIKI}/pages/{name}");
  json!({
    "id": format!("xwiki:{name}"),
    "fullName": name,
    "wiki": "xwiki",
    "space": "",
    "name": name,
    "title": name,
    "links": [
      link("objects", &format!("{url}/objects")),
      link("object", &format!("{url}/objects/XWiki.XWikiUsers"))
    ]
  })
}
