//! Path resolution against the collection tree.
//!
//! # Architecture
//!
//! A data path alternates collection segments and document ids. Resolving it
//! walks the tree one collection level at a time:
//!
//! 1. Generate the candidate collection prefixes of the remaining segments,
//!    longest first (see [`collection_path_combinations`]). A collection
//!    path may span several segments (`sites/es/products`), so the longest
//!    candidate has to be tried before the single-segment one.
//! 2. The first candidate equal to a collection's `path` or `id` wins.
//! 3. The document id after the prefix is consumed and the rest of the path
//!    is resolved against that collection's `subcollections`.
//!
//! Given:
//!
//! ```text
//! products                      (entity view: custom_view)
//!   locales
//! sites/es/products
//!   locales
//! ```
//!
//! the path `sites/es/products/pid/locales` yields this breadcrumb chain:
//!
//! ```text
//! [0] Collection  sites/es/products
//! [1] Entity      sites/es/products/pid
//! [2] Collection  sites/es/products/pid/locales
//! ```
//!
//! and `products/pid/custom_view` yields `Collection`, `Entity`,
//! `CustomView`. Breadcrumb paths are built from each collection's `id`, so
//! a collection with an alias appears under the alias, the same way it
//! does in URLs.
//!
//! # Duplicate siblings
//!
//! When two siblings share a `path` or `id`, the first one in declaration
//! order is returned. Configurations should not rely on this.

use crate::collection::{CmsView, EntityCollection, EntityCustomView};
use crate::error::NavigationError;
use crate::paths::{
    collection_path_combinations, ensure_collection_path, remove_initial_and_trailing_slashes,
    split_segments,
};
use crate::warn_log;
use std::fmt;

/// Maximum nesting depth to guard against pathological paths
const MAX_DEPTH: usize = 16;

// ============================================================================
// Result types
// ============================================================================

/// Reference to a single entity: its collection path plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityReference {
    /// Entity id
    pub id: String,
    /// Full data path of the collection holding the entity
    pub path: String,
}

impl EntityReference {
    /// Create a reference from a collection path and an entity id.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    /// Full data path of the entity (`products/pid`).
    pub fn path_with_id(&self) -> String {
        format!("{}/{}", self.path, self.id)
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.path, self.id)
    }
}

/// A collection matched by [`get_collection_view_from_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionViewMatch<'a> {
    /// Path of the matched collection relative to its parent document
    pub relative_path: String,
    /// Matched collection
    pub collection: &'a EntityCollection,
}

/// One level of a breadcrumb chain.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEntry<'a> {
    /// A collection level
    Collection {
        /// Lookup id of the collection (alias or path)
        id: String,
        /// Full path of the collection, using each level's id
        path: String,
        /// The collection
        collection: &'a EntityCollection,
    },
    /// A document inside the previous collection
    Entity {
        /// Document id
        entity_id: String,
        /// Full data path of the parent collection
        path: String,
        /// Full data path of the document
        full_path: String,
        /// Collection holding the document
        parent_collection: &'a EntityCollection,
    },
    /// A custom view rendered for the previous document
    CustomView {
        /// Document id
        entity_id: String,
        /// Full data path of the parent collection
        path: String,
        /// Full data path of the view
        full_path: String,
        /// The view
        view: &'a EntityCustomView,
    },
    /// A top-level view that is not a collection
    View {
        /// Path the view matched on
        path: String,
        /// The view
        view: &'a CmsView,
    },
}

impl NavigationEntry<'_> {
    /// Full data path this entry points at.
    pub fn full_path(&self) -> &str {
        match self {
            NavigationEntry::Collection { path, .. } | NavigationEntry::View { path, .. } => path,
            NavigationEntry::Entity { full_path, .. }
            | NavigationEntry::CustomView { full_path, .. } => full_path,
        }
    }

    /// Short label for debug output.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationEntry::Collection { .. } => "Collection",
            NavigationEntry::Entity { .. } => "Entity",
            NavigationEntry::CustomView { .. } => "CustomView",
            NavigationEntry::View { .. } => "View",
        }
    }
}

/// Ordered breadcrumb chain for a path, outermost level first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breadcrumbs<'a> {
    entries: Vec<NavigationEntry<'a>>,
}

impl<'a> Breadcrumbs<'a> {
    /// Get the entry at a specific depth
    pub fn at_depth(&self, depth: usize) -> Option<&NavigationEntry<'a>> {
        self.entries.get(depth)
    }

    /// Deepest entry
    pub fn leaf(&self) -> Option<&NavigationEntry<'a>> {
        self.entries.last()
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries as a slice
    pub fn entries(&self) -> &[NavigationEntry<'a>] {
        &self.entries
    }

    /// Take ownership of the entries
    pub fn into_vec(self) -> Vec<NavigationEntry<'a>> {
        self.entries
    }

    /// Document references along the chain, outermost first.
    pub fn entity_references(&self) -> Vec<EntityReference> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                NavigationEntry::Entity {
                    entity_id, path, ..
                } => Some(EntityReference::new(entity_id.clone(), path.clone())),
                _ => None,
            })
            .collect()
    }

    /// Pretty-print for debugging
    #[cfg(debug_assertions)]
    pub fn debug_string(&self) -> String {
        if self.entries.is_empty() {
            return "Breadcrumbs: (empty)".to_string();
        }

        let mut lines = vec!["Breadcrumbs:".to_string()];
        for (depth, entry) in self.entries.iter().enumerate() {
            lines.push(format!(
                "{}[{}] {}(\"{}\")",
                "  ".repeat(depth),
                depth,
                entry.kind(),
                entry.full_path()
            ));
        }
        lines.join("\n")
    }
}

impl<'a> IntoIterator for Breadcrumbs<'a> {
    type Item = NavigationEntry<'a>;
    type IntoIter = std::vec::IntoIter<NavigationEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ============================================================================
// Prefix matching
// ============================================================================

/// Find the collection owning the longest candidate prefix of `segments`.
///
/// Returns the collection and the number of segments its path consumed.
fn match_collection_prefix<'a>(
    segments: &[&str],
    collections: &'a [EntityCollection],
) -> Option<(&'a EntityCollection, usize)> {
    if collections.is_empty() {
        return None;
    }

    collection_path_combinations(segments)
        .into_iter()
        .find_map(|candidate| {
            collections
                .iter()
                .find(|collection| collection.matches(&candidate))
                .map(|collection| (collection, candidate.split('/').count()))
        })
}

// ============================================================================
// Collection lookup
// ============================================================================

/// Resolve a collection path to the collection it addresses.
///
/// `relative_path` is the matched collection's own path, not the full input:
/// `products/pid/locales` gives `locales`.
///
/// Returns `Ok(None)` when nothing matches (including an empty tree) and
/// [`NavigationError::OddSegments`] when `path` is not a collection path.
///
/// # Examples
///
/// ```
/// use cms_navigator::EntityCollection;
/// use cms_navigator::resolve::get_collection_view_from_path;
///
/// let tree = vec![EntityCollection::new("products", "Products")
///     .subcollection(EntityCollection::new("locales", "Locales"))];
///
/// let found = get_collection_view_from_path("products/pid/locales", &tree).unwrap().unwrap();
/// assert_eq!(found.relative_path, "locales");
/// assert!(get_collection_view_from_path("products/pid", &tree).is_err());
/// ```
pub fn get_collection_view_from_path<'a>(
    path: &str,
    collections: &'a [EntityCollection],
) -> Result<Option<CollectionViewMatch<'a>>, NavigationError> {
    if collections.is_empty() {
        return Ok(None);
    }
    let collection = get_collection_by_path_or_id(path, collections)?;
    Ok(collection.map(|collection| CollectionViewMatch {
        relative_path: collection.path.clone(),
        collection,
    }))
}

/// Resolve a collection path, where any level may use an `id` alias.
pub fn get_collection_by_path_or_id<'a>(
    path_or_id: &str,
    collections: &'a [EntityCollection],
) -> Result<Option<&'a EntityCollection>, NavigationError> {
    ensure_collection_path(path_or_id)?;
    let segments = split_segments(path_or_id);
    Ok(collection_from_segments(&segments, collections, 0))
}

fn collection_from_segments<'a>(
    segments: &[&str],
    collections: &'a [EntityCollection],
    depth: usize,
) -> Option<&'a EntityCollection> {
    if depth >= MAX_DEPTH {
        warn_log!(
            "Maximum collection nesting depth ({}) exceeded resolving '{}'",
            MAX_DEPTH,
            segments.join("/")
        );
        return None;
    }

    let (collection, consumed) = match_collection_prefix(segments, collections)?;
    if consumed == segments.len() {
        return Some(collection);
    }

    // Skip the document id; an odd-length path always leaves at least one
    // collection segment after it.
    let rest = segments.get(consumed + 1..).filter(|rest| !rest.is_empty())?;
    collection_from_segments(rest, &collection.subcollections, depth + 1)
}

/// Rewrite every `id` alias in a collection path to the collection's real
/// `path`. Document ids are left untouched.
///
/// # Examples
///
/// ```
/// use cms_navigator::EntityCollection;
/// use cms_navigator::resolve::resolve_collection_path_ids;
///
/// let tree = vec![EntityCollection::new("products", "Products")
///     .alias("items")
///     .subcollection(EntityCollection::new("product_locales", "Locales").alias("locales"))];
///
/// assert_eq!(
///     resolve_collection_path_ids("items/pid/locales", &tree).unwrap(),
///     "products/pid/product_locales"
/// );
/// ```
pub fn resolve_collection_path_ids(
    path: &str,
    collections: &[EntityCollection],
) -> Result<String, NavigationError> {
    ensure_collection_path(path)?;
    let segments = split_segments(path);
    Ok(resolve_ids_recursive(&segments, collections, 0))
}

fn resolve_ids_recursive(segments: &[&str], collections: &[EntityCollection], depth: usize) -> String {
    let Some((first, rest)) = segments.split_first() else {
        return String::new();
    };

    let collection = collections
        .iter()
        .find(|collection| collection.id.as_deref() == Some(*first))
        .or_else(|| collections.iter().find(|collection| collection.path == *first));
    let resolved_first = collection.map_or(*first, |collection| collection.path.as_str());

    match (collection, rest) {
        (_, []) => resolved_first.to_string(),
        (Some(collection), [entity_id, deeper @ ..])
            if !deeper.is_empty() && !collection.subcollections.is_empty() && depth < MAX_DEPTH =>
        {
            format!(
                "{}/{}/{}",
                resolved_first,
                entity_id,
                resolve_ids_recursive(deeper, &collection.subcollections, depth + 1)
            )
        }
        _ => std::iter::once(resolved_first)
            .chain(rest.iter().copied())
            .collect::<Vec<_>>()
            .join("/"),
    }
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// Build the breadcrumb chain for any data path.
///
/// Unlike [`get_collection_view_from_path`], `path` may end on a document or
/// on a custom entity view, and no parity check is made. A custom view
/// matches only when its key equals the whole rest of the path after the
/// document id. When no collection matches, top-level `views` are tried
/// instead.
///
/// This is a pure function of its inputs.
pub fn get_navigation_entries_from_path<'a>(
    path: &str,
    collections: &'a [EntityCollection],
    views: &'a [CmsView],
) -> Breadcrumbs<'a> {
    let segments = split_segments(path);
    let mut breadcrumbs = Breadcrumbs::default();
    entries_recursive(&segments, collections, None, &mut breadcrumbs.entries, 0);

    if breadcrumbs.is_empty() {
        if let Some(entry) = match_top_level_view(&segments, views) {
            breadcrumbs.entries.push(entry);
        }
    }

    #[cfg(debug_assertions)]
    {
        crate::debug_log!(
            "Resolved path '{}' → {} levels\n{}",
            path,
            breadcrumbs.len(),
            breadcrumbs.debug_string()
        );
    }

    breadcrumbs
}

fn entries_recursive<'a>(
    segments: &[&str],
    collections: &'a [EntityCollection],
    parent_full_path: Option<&str>,
    out: &mut Vec<NavigationEntry<'a>>,
    depth: usize,
) {
    if depth >= MAX_DEPTH {
        warn_log!(
            "Maximum collection nesting depth ({}) exceeded building breadcrumbs",
            MAX_DEPTH
        );
        return;
    }

    let Some((collection, consumed)) = match_collection_prefix(segments, collections) else {
        return;
    };

    let collection_path = match parent_full_path {
        Some(parent) => format!("{}/{}", parent, collection.id()),
        None => collection.id().to_string(),
    };
    out.push(NavigationEntry::Collection {
        id: collection.id().to_string(),
        path: collection_path.clone(),
        collection,
    });

    let Some((entity_id, after)) = segments[consumed..].split_first() else {
        return;
    };
    let full_path = format!("{}/{}", collection_path, entity_id);
    out.push(NavigationEntry::Entity {
        entity_id: (*entity_id).to_string(),
        path: collection_path.clone(),
        full_path: full_path.clone(),
        parent_collection: collection,
    });

    if after.is_empty() {
        return;
    }

    if let Some(view) = collection.entity_view_by_key(&after.join("/")) {
        out.push(NavigationEntry::CustomView {
            entity_id: (*entity_id).to_string(),
            path: collection_path,
            full_path: format!("{}/{}", full_path, view.key),
            view,
        });
        return;
    }

    entries_recursive(after, &collection.subcollections, Some(&full_path), out, depth + 1);
}

fn match_top_level_view<'a>(segments: &[&str], views: &'a [CmsView]) -> Option<NavigationEntry<'a>> {
    (1..=segments.len()).rev().find_map(|len| {
        let candidate = segments[..len].join("/");
        views
            .iter()
            .find(|view| view.matches(&candidate))
            .map(|view| NavigationEntry::View {
                path: candidate,
                view,
            })
    })
}

/// References to every document along `path`, outermost first.
///
/// `products/pid/locales/es` gives `products/pid` and
/// `products/pid/locales/es`.
pub fn get_parent_references_from_path(
    path: &str,
    collections: &[EntityCollection],
) -> Vec<EntityReference> {
    let cleaned = remove_initial_and_trailing_slashes(path);
    get_navigation_entries_from_path(cleaned, collections, &[]).entity_references()
}
