//! The single place REST paths are assembled.

use super::config::XWikiConfig;

/// Space holding users, groups, and the group template.
pub const SYSTEM_SPACE: &str = "XWiki";

/// Name query matching every group page in [`SYSTEM_SPACE`].
const GROUPS_QUERY: &str = "q=Group&scope=name";

/// Rewrite a dotted space path (`A.B.C`) into nested REST segments
/// (`A/spaces/B/spaces/C`). An empty path stays empty.
pub fn space_segments(space_path: &str) -> String {
  space_path.replace('.', "/spaces/")
}

/// Builds endpoints below `{base_url}{api_entrypoint}/wikis/{wiki}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPaths {
  entrypoint: String,
  wiki_root: String,
}

impl ApiPaths {
  pub fn new(config: &XWikiConfig) -> Self {
    let entrypoint = format!(
      "{}{}",
      config.base_url.trim_end_matches('/'),
      config.api_entrypoint.trim_end_matches('/')
    );
    let wiki_root = format!("{entrypoint}/wikis/{}", config.wiki);
    Self { entrypoint, wiki_root }
  }

  /// Root resource of the REST API.
  pub fn entrypoint(&self) -> &str {
    &self.entrypoint
  }

  /// Page `page_name` in the space at `space_path`; an empty space path
  /// addresses the page at wiki level.
  pub fn page_endpoint(&self, space_path: &str, page_name: &str) -> String {
    format!("{}/pages/{page_name}", self.space_root(space_path))
  }

  /// Listing of the pages directly inside `space_path`.
  pub fn page_list_endpoint(&self, space_path: &str) -> String {
    format!("{}/pages", self.space_root(space_path))
  }

  /// Name search returning every group page (the template included).
  pub fn groups_endpoint(&self) -> String {
    format!("{}/spaces/{SYSTEM_SPACE}/search?{GROUPS_QUERY}", self.wiki_root)
  }

  /// Objects of a group page; one member object per user.
  pub fn group_members_endpoint(&self, group_name: &str) -> String {
    format!("{}/objects", self.page_endpoint(SYSTEM_SPACE, group_name))
  }

  fn space_root(&self, space_path: &str) -> String {
    if space_path.is_empty() {
      self.wiki_root.clone()
    } else {
      format!("{}/spaces/{}", self.wiki_root, space_segments(space_path))
    }
  }
}
