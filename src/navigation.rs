//! URL building and the top-level navigation summary.
//!
//! [`UrlBuilder`] turns data paths into CMS URLs and back. With the default
//! configuration (`base_path = "/"`, `base_collection_path = "/c"`):
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | `home_url` | | `/` |
//! | `build_url_collection_path` | `products/pid` | `/c/products/pid` |
//! | `build_cms_url_path` | `dashboard` | `/dashboard` |
//! | `build_url_edit_collection_path` | `products` | `s/edit/products` |
//! | `url_path_to_data_path` | `/c/products/pid` | `products/pid` |
//!
//! Every builder is a pure string transform: the same input always produces
//! the same URL.

use crate::collection::{CmsView, EntityCollection};
use crate::error::NavigationError;
use crate::paths::{decode_path, encode_path, remove_initial_and_trailing_slashes};

/// Default prefix of every CMS URL.
pub const DEFAULT_BASE_PATH: &str = "/";

/// Default prefix of collection URLs, below the base path.
pub const DEFAULT_COLLECTION_PATH: &str = "/c";

// ============================================================================
// UrlBuilder
// ============================================================================

/// Builds and parses CMS URLs for a base path configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_path: String,
    base_collection_path: String,
    clean_base_path: String,
    clean_base_collection_path: String,
}

impl UrlBuilder {
    /// Create a builder for the given base paths.
    pub fn new(base_path: impl Into<String>, base_collection_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let base_collection_path = base_collection_path.into();
        Self {
            clean_base_path: remove_initial_and_trailing_slashes(&base_path).to_string(),
            clean_base_collection_path: remove_initial_and_trailing_slashes(&base_collection_path)
                .to_string(),
            base_path,
            base_collection_path,
        }
    }

    /// Base path as configured
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Base collection path as configured
    pub fn base_collection_path(&self) -> &str {
        &self.base_collection_path
    }

    /// URL of the CMS home page.
    pub fn home_url(&self) -> String {
        if self.clean_base_path.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.clean_base_path)
        }
    }

    /// Absolute prefix shared by every collection URL.
    pub fn full_collection_path(&self) -> String {
        if self.clean_base_path.is_empty() {
            format!("/{}", self.clean_base_collection_path)
        } else {
            format!(
                "/{}/{}",
                self.clean_base_path, self.clean_base_collection_path
            )
        }
    }

    /// URL of an arbitrary CMS page (custom views, settings…).
    pub fn build_cms_url_path(&self, path: &str) -> String {
        if self.clean_base_path.is_empty() {
            format!("/{}", encode_path(path))
        } else {
            format!("/{}/{}", self.clean_base_path, encode_path(path))
        }
    }

    /// URL of a collection, document or subcollection.
    pub fn build_url_collection_path(&self, path: &str) -> String {
        format!("{}/{}", self.full_collection_path(), encode_path(path))
    }

    /// Relative URL of the collection editor.
    pub fn build_url_edit_collection_path(&self, path: &str) -> String {
        format!("s/edit/{}", encode_path(path))
    }

    /// Whether `url` points below the collection prefix.
    pub fn is_url_collection_path(&self, url: &str) -> bool {
        let prefix = format!(
            "{}/",
            remove_initial_and_trailing_slashes(&self.full_collection_path())
        );
        format!("{}/", remove_initial_and_trailing_slashes(url)).starts_with(&prefix)
    }

    /// Convert a collection URL back into the data path it was built from.
    ///
    /// Fails with [`NavigationError::UnexpectedUrl`] when `url` does not start
    /// with the collection prefix.
    pub fn url_path_to_data_path(&self, url: &str) -> Result<String, NavigationError> {
        let prefix = self.full_collection_path();
        let rest = url
            .strip_prefix(prefix.as_str())
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .ok_or_else(|| NavigationError::UnexpectedUrl {
                expected_prefix: prefix.clone(),
                path: url.to_string(),
            })?;
        Ok(decode_path(remove_initial_and_trailing_slashes(rest)).into_owned())
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH, DEFAULT_COLLECTION_PATH)
    }
}

// ============================================================================
// Top-level navigation
// ============================================================================

/// What a [`TopNavigationEntry`] points at.
#[derive(Debug, Clone, PartialEq)]
pub enum TopNavigationTarget {
    /// A top-level collection, addressed by its id
    Collection {
        /// Collection id (alias or path)
        path: String,
        /// The collection
        collection: EntityCollection,
    },
    /// A top-level view
    View(CmsView),
}

/// One entry of the top-level navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct TopNavigationEntry {
    /// URL the entry links to
    pub url: String,
    /// Trimmed display name
    pub name: String,
    /// Trimmed description
    pub description: Option<String>,
    /// Trimmed group name
    pub group: Option<String>,
    /// Target of the entry
    pub target: TopNavigationTarget,
}

impl TopNavigationEntry {
    /// Whether this entry links to a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self.target, TopNavigationTarget::Collection { .. })
    }
}

/// Entries shown in the top-level navigation plus their distinct groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TopNavigationResult {
    /// Visible collections first, then visible views, in declaration order
    pub navigation_entries: Vec<TopNavigationEntry>,
    /// Distinct group names in first-seen order
    pub groups: Vec<String>,
}

impl TopNavigationResult {
    /// Entries belonging to `group`.
    pub fn entries_in_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a TopNavigationEntry> + 'a {
        self.navigation_entries
            .iter()
            .filter(move |entry| entry.group.as_deref() == Some(group))
    }

    /// Entries without a group.
    pub fn ungrouped(&self) -> impl Iterator<Item = &TopNavigationEntry> {
        self.navigation_entries
            .iter()
            .filter(|entry| entry.group.is_none())
    }
}

fn trimmed(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Compute the top-level navigation for resolved collections and views.
///
/// Entries marked `hide_from_navigation` are left out. Collections link to
/// their collection URL, views to the CMS URL of their primary path.
pub fn compute_top_navigation(
    collections: &[EntityCollection],
    views: &[CmsView],
    urls: &UrlBuilder,
) -> TopNavigationResult {
    let collection_entries = collections
        .iter()
        .filter(|collection| !collection.hide_from_navigation)
        .map(|collection| TopNavigationEntry {
            url: urls.build_url_collection_path(collection.id()),
            name: collection.name.trim().to_string(),
            description: trimmed(collection.description.as_ref()),
            group: trimmed(collection.group.as_ref()),
            target: TopNavigationTarget::Collection {
                path: collection.id().to_string(),
                collection: collection.clone(),
            },
        });

    let view_entries = views
        .iter()
        .filter(|view| !view.hide_from_navigation)
        .map(|view| TopNavigationEntry {
            url: urls.build_cms_url_path(view.path.primary()),
            name: view.name.trim().to_string(),
            description: trimmed(view.description.as_ref()),
            group: trimmed(view.group.as_ref()),
            target: TopNavigationTarget::View(view.clone()),
        });

    let navigation_entries: Vec<_> = collection_entries.chain(view_entries).collect();

    let mut groups: Vec<String> = Vec::new();
    for group in navigation_entries
        .iter()
        .filter_map(|entry| entry.group.as_ref())
        .filter(|group| !group.is_empty())
    {
        if !groups.contains(group) {
            groups.push(group.clone());
        }
    }

    TopNavigationResult {
        navigation_entries,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let urls = UrlBuilder::default();
        assert_eq!(urls.home_url(), "/");
        assert_eq!(urls.full_collection_path(), "/c");
        assert_eq!(urls.build_url_collection_path("products/pid"), "/c/products/pid");
        assert_eq!(urls.build_cms_url_path("/dashboard/"), "/dashboard");
        assert_eq!(urls.build_url_edit_collection_path("products"), "s/edit/products");
    }

    #[test]
    fn test_custom_base_path() {
        let urls = UrlBuilder::new("/admin/", "collections");
        assert_eq!(urls.home_url(), "/admin");
        assert_eq!(urls.full_collection_path(), "/admin/collections");
        assert_eq!(
            urls.build_url_collection_path("products"),
            "/admin/collections/products"
        );
        assert_eq!(urls.build_cms_url_path("dashboard"), "/admin/dashboard");
    }

    #[test]
    fn test_url_round_trip() {
        let urls = UrlBuilder::new("admin", "/c");
        for path in ["products", "products/my id/locales", "notes/a#b"] {
            let url = urls.build_url_collection_path(path);
            assert_eq!(urls.url_path_to_data_path(&url).unwrap(), path);
        }
    }

    #[test]
    fn test_url_without_prefix_fails() {
        let urls = UrlBuilder::default();
        assert!(matches!(
            urls.url_path_to_data_path("/settings"),
            Err(NavigationError::UnexpectedUrl { .. })
        ));
        assert!(urls.url_path_to_data_path("/cars/x").is_err());
    }

    #[test]
    fn test_is_url_collection_path() {
        let urls = UrlBuilder::default();
        assert!(urls.is_url_collection_path("/c/products"));
        assert!(urls.is_url_collection_path("/c"));
        assert!(!urls.is_url_collection_path("/cars"));
        assert!(!urls.is_url_collection_path("/dashboard"));
    }

    #[test]
    fn test_top_navigation_skips_hidden_and_dedups_groups() {
        let collections = vec![
            EntityCollection::new("products", " Products ").group("Catalog"),
            EntityCollection::new("internal", "Internal").hidden(),
            EntityCollection::new("orders", "Orders").alias("sales").group("Catalog "),
        ];
        let views = vec![
            CmsView::with_aliases(["dashboard", "home"], "Dashboard").group("Tools"),
            CmsView::new("debug", "Debug").hidden(),
        ];

        let result = compute_top_navigation(&collections, &views, &UrlBuilder::default());
        let urls: Vec<_> = result
            .navigation_entries
            .iter()
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(urls, vec!["/c/products", "/c/sales", "/dashboard"]);
        assert_eq!(result.navigation_entries[0].name, "Products");
        assert_eq!(result.groups, vec!["Catalog", "Tools"]);
        assert_eq!(result.entries_in_group("Catalog").count(), 2);
        assert_eq!(result.ungrouped().count(), 0);
    }
}
