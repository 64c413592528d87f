//! Collection tree data model.
//!
//! An [`EntityCollection`] is one node of the navigation tree. Nodes own
//! their [`subcollections`](EntityCollection::subcollections) exclusively,
//! so the tree can never contain cycles. A [`CmsView`] is a navigable entry
//! that is not backed by a collection, and an [`EntityCustomView`] is a
//! view rendered under a single document of a collection.
//!
//! All types are built with chained builder methods:
//!
//! ```
//! use cms_navigator::{EntityCollection, EntityCustomView, Permissions};
//!
//! let products = EntityCollection::new("products", "Products")
//!     .group("Catalog")
//!     .permissions(Permissions::read_only())
//!     .entity_view(EntityCustomView::new("preview", "Preview"))
//!     .subcollection(EntityCollection::new("locales", "Locales"));
//!
//! assert_eq!(products.id(), "products");
//! assert_eq!(products.subcollections.len(), 1);
//! ```

use crate::permissions::{Permissions, PermissionsSpec};
use crate::resolve::EntityReference;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Callbacks
// ============================================================================

/// Lifecycle hooks attached to a collection.
///
/// The navigation engine never invokes these; it only carries them so the
/// entity layer finds them on the resolved collection. Every hook defaults
/// to a no-op.
pub trait EntityCallbacks: Send + Sync + 'static {
    /// Called before an entity is written. Returning `Err` aborts the save.
    fn on_pre_save(&self, _entity: &EntityReference) -> Result<(), String> {
        Ok(())
    }

    /// Called after an entity was written.
    fn on_saved(&self, _entity: &EntityReference) {}

    /// Called before an entity is deleted. Returning `Err` aborts the delete.
    fn on_pre_delete(&self, _entity: &EntityReference) -> Result<(), String> {
        Ok(())
    }

    /// Name used in debug output.
    fn name(&self) -> &str {
        "EntityCallbacks"
    }
}

/// Shared handle to a set of [`EntityCallbacks`].
///
/// Two handles are equal only when they point at the same callbacks object.
#[derive(Clone)]
pub struct CallbacksHandle(pub Arc<dyn EntityCallbacks>);

impl CallbacksHandle {
    /// Wrap a callbacks implementation.
    pub fn new(callbacks: impl EntityCallbacks) -> Self {
        Self(Arc::new(callbacks))
    }
}

impl PartialEq for CallbacksHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CallbacksHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallbacksHandle").field(&self.0.name()).finish()
    }
}

// ============================================================================
// EntityCustomView
// ============================================================================

/// A custom view shown for a single document, addressed by a trailing path
/// segment (`products/pid/<key>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCustomView {
    /// Path segment selecting this view
    pub key: String,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

impl EntityCustomView {
    /// Create a custom view with the given key and name.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ============================================================================
// EntityCollection
// ============================================================================

/// A node of the collection tree.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection {
    /// Path segment(s) of this collection relative to its parent document.
    /// May span several segments (`sites/es/products`) but always an odd count.
    pub path: String,
    /// Alias used instead of `path` for lookups and URLs
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Navigation group this collection is listed under
    pub group: Option<String>,
    /// Hide from the top-level navigation (still resolvable by path)
    pub hide_from_navigation: bool,
    /// Query every collection sharing this leaf name
    pub collection_group: bool,
    /// Child collections, owned by this node
    pub subcollections: Vec<EntityCollection>,
    /// Permission rules; `None` allows everything
    pub permissions: Option<PermissionsSpec>,
    /// Entity lifecycle hooks
    pub callbacks: Option<CallbacksHandle>,
    /// Views rendered under a single document
    pub entity_views: Vec<EntityCustomView>,
    /// Order in which properties are displayed
    pub properties_order: Vec<String>,
    /// Uid of the user owning this collection
    pub owner_id: Option<String>,
}

impl EntityCollection {
    /// Create a collection with a path and display name.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: None,
            name: name.into(),
            description: None,
            group: None,
            hide_from_navigation: false,
            collection_group: false,
            subcollections: Vec::new(),
            permissions: None,
            callbacks: None,
            entity_views: Vec::new(),
            properties_order: Vec::new(),
            owner_id: None,
        }
    }

    /// Identifier used for lookups and URLs: the alias if set, else the path.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.path)
    }

    /// Whether `segment` names this collection, either by path or by alias.
    pub fn matches(&self, segment: &str) -> bool {
        self.path == segment || self.id.as_deref() == Some(segment)
    }

    /// Find the custom entity view registered under `key`.
    pub fn entity_view_by_key(&self, key: &str) -> Option<&EntityCustomView> {
        self.entity_views.iter().find(|view| view.key == key)
    }

    /// Set the alias.
    pub fn alias(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the navigation group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Hide this collection from the top-level navigation.
    pub fn hidden(mut self) -> Self {
        self.hide_from_navigation = true;
        self
    }

    /// Mark this collection as a collection group.
    pub fn collection_group(mut self) -> Self {
        self.collection_group = true;
        self
    }

    /// Append a subcollection.
    pub fn subcollection(mut self, collection: EntityCollection) -> Self {
        self.subcollections.push(collection);
        self
    }

    /// Replace all subcollections.
    pub fn subcollections(mut self, collections: Vec<EntityCollection>) -> Self {
        self.subcollections = collections;
        self
    }

    /// Use static permissions.
    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = Some(PermissionsSpec::Static(permissions));
        self
    }

    /// Use any permission spec, including a builder.
    pub fn permissions_spec(mut self, spec: PermissionsSpec) -> Self {
        self.permissions = Some(spec);
        self
    }

    /// Attach lifecycle callbacks.
    pub fn callbacks(mut self, callbacks: CallbacksHandle) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    /// Register a custom entity view.
    pub fn entity_view(mut self, view: EntityCustomView) -> Self {
        self.entity_views.push(view);
        self
    }

    /// Set the property display order.
    pub fn properties_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Set the owner uid.
    pub fn owner(mut self, uid: impl Into<String>) -> Self {
        self.owner_id = Some(uid.into());
        self
    }
}

// ============================================================================
// CmsView
// ============================================================================

/// Path(s) a [`CmsView`] is reachable under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPath {
    /// A single path
    Single(String),
    /// Several equivalent paths; the first one is used to build URLs
    Aliases(Vec<String>),
}

impl ViewPath {
    /// Path used when building a URL for this view.
    pub fn primary(&self) -> &str {
        match self {
            ViewPath::Single(path) => path,
            ViewPath::Aliases(paths) => paths.first().map_or("", String::as_str),
        }
    }

    /// Iterate all paths of this view.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let paths: &[String] = match self {
            ViewPath::Single(path) => std::slice::from_ref(path),
            ViewPath::Aliases(paths) => paths,
        };
        paths.iter().map(String::as_str)
    }
}

/// A navigable entry that is not a collection (dashboards, settings…).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsView {
    /// Path(s) this view matches
    pub path: ViewPath,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Navigation group
    pub group: Option<String>,
    /// Hide from the top-level navigation
    pub hide_from_navigation: bool,
}

impl CmsView {
    /// Create a view reachable under a single path.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: ViewPath::Single(path.into()),
            name: name.into(),
            description: None,
            group: None,
            hide_from_navigation: false,
        }
    }

    /// Create a view reachable under several paths.
    pub fn with_aliases<I, S>(paths: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: ViewPath::Aliases(paths.into_iter().map(Into::into).collect()),
            name: name.into(),
            description: None,
            group: None,
            hide_from_navigation: false,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the navigation group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Hide this view from the top-level navigation.
    pub fn hidden(mut self) -> Self {
        self.hide_from_navigation = true;
        self
    }

    /// Whether `path` (cleaned) addresses this view.
    pub fn matches(&self, path: &str) -> bool {
        let path = crate::paths::remove_initial_and_trailing_slashes(path);
        self.path
            .iter()
            .any(|candidate| crate::paths::remove_initial_and_trailing_slashes(candidate) == path)
    }
}
