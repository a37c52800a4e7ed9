//! Relation vocabulary of the XWiki REST API and the link resolver.

use std::fmt;

use super::models::Link;

/// Relation kinds this client follows.
///
/// XWiki identifies each relation by a URI under `http://www.xwiki.org/rel/`;
/// matching is an exact, case-sensitive comparison against that URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
  Wikis,
  Spaces,
  Pages,
  Page,
  Attachments,
  Objects,
  Object,
  Properties,
  Class,
  Parent,
}

impl Relation {
  /// Full relation URI as it appears in the `rel` field of a link.
  pub fn uri(self) -> &'static str {
    match self {
      Self::Wikis => "http://www.xwiki.org/rel/wikis",
      Self::Spaces => "http://www.xwiki.org/rel/spaces",
      Self::Pages => "http://www.xwiki.org/rel/pages",
      Self::Page => "http://www.xwiki.org/rel/page",
      Self::Attachments => "http://www.xwiki.org/rel/attachments",
      Self::Objects => "http://www.xwiki.org/rel/objects",
      Self::Object => "http://www.xwiki.org/rel/object",
      Self::Properties => "http://www.xwiki.org/rel/properties",
      Self::Class => "http://www.xwiki.org/rel/class",
      Self::Parent => "http://www.xwiki.org/rel/parent",
    }
  }
}

impl fmt::Display for Relation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.uri())
  }
}

/// Find the href a resource offers for `relation`.
///
/// When a link set repeats a relation the last occurrence wins. `None` means
/// the resource does not offer the relation, which is not an error.
pub fn resolve_href(relation: Relation, links: &[Link]) -> Option<&str> {
  links
    .iter()
    .rev()
    .find(|link| link.rel == relation.uri())
    .map(|link| link.href.as_str())
}
