//! Group and user views derived from pages and objects.

use tracing::{debug, warn};

use super::error::ReadError;
use super::models::{ObjectSummary, Objects, Page, PropertyMap, SearchResults};
use super::reader::XWikiReader;
use super::relations::{Relation, resolve_href};

/// Page name of the template every group is created from.
pub const GROUP_TEMPLATE: &str = "XWikiGroupTemplate";

/// Prefix of a user reference in a group member headline (`XWiki.jdoe`).
const USER_REFERENCE_PREFIX: &str = "XWiki.";

/// Group page names from a group search, without the group template.
pub fn group_names(results: &SearchResults) -> Vec<String> {
  results
    .search_results
    .iter()
    .filter(|result| !result.page_name.contains(GROUP_TEMPLATE))
    .map(|result| result.page_name.clone())
    .collect()
}

/// Bare user names from group member objects; objects with an empty headline
/// are skipped.
pub fn member_names(objects: &[ObjectSummary]) -> Vec<String> {
  objects
    .iter()
    .filter(|object| !object.headline.is_empty())
    .map(|object| {
      object
        .headline
        .strip_prefix(USER_REFERENCE_PREFIX)
        .unwrap_or(&object.headline)
        .to_string()
    })
    .collect()
}

impl XWikiReader {
  /// Names of all groups of the wiki.
  ///
  /// # Errors
  /// Returns [`ReadError::Fetch`] when the group search fails.
  pub async fn list_group_names(&self) -> Result<Vec<String>, ReadError> {
    let results: SearchResults = self.fetcher.fetch(&self.paths.groups_endpoint()).await?;
    Ok(group_names(&results))
  }

  /// User names of the members of `group_name`.
  ///
  /// # Errors
  /// Returns [`ReadError::Fetch`] when the group's objects cannot be fetched.
  pub async fn list_group_members(&self, group_name: &str) -> Result<Vec<String>, ReadError> {
    let objects: Objects = self
      .fetcher
      .fetch(&self.paths.group_members_endpoint(group_name))
      .await?;
    Ok(member_names(&objects.object_summaries))
  }

  /// The profile page of `user_name`, addressed at wiki level.
  ///
  /// # Errors
  /// Returns [`ReadError::Fetch`] when the page cannot be retrieved.
  pub async fn get_user(&self, user_name: &str) -> Result<Page, ReadError> {
    self.get_page("", user_name).await
  }

  /// Properties of the user profile object on a user page.
  ///
  /// Looks for the object whose class is the configured users class. Every
  /// failure along the way is logged and yields an empty map.
  pub async fn get_user_properties(&self, user: &Page) -> PropertyMap {
    // Falls back to `objects` when the page offers no `object` link.
    let relation = if resolve_href(Relation::Object, &user.links).is_some() {
      Relation::Object
    } else {
      Relation::Objects
    };

    let objects = match self.objects_via(relation, &user.links).await {
      Ok(Some(objects)) => objects,
      Ok(None) => return PropertyMap::new(),
      Err(e) => {
        warn!("Unable to fetch objects of user '{}': {e}", user.name);
        return PropertyMap::new();
      }
    };

    let Some(profile) = objects.iter().find(|object| object.class_name == self.users_class) else {
      debug!("User '{}' has no {} object", user.name, self.users_class);
      return PropertyMap::new();
    };

    match self.object_properties(profile).await {
      Ok(properties) => properties.unwrap_or_default(),
      Err(e) => {
        warn!("Unable to fetch profile properties of user '{}': {e}", user.name);
        PropertyMap::new()
      }
    }
  }
}
