//! Collection permissions.
//!
//! Every collection may carry a [`PermissionsSpec`]: either a static
//! [`Permissions`] value or a builder closure evaluated against the current
//! user each time the tree is resolved. A collection without a spec allows
//! everything.
//!
//! The navigation engine itself only looks at [`Permissions::read`]:
//! [`filter_allowed_collections`] drops unreadable collections (and never
//! visits their children). The create/edit/delete flags are resolved here
//! for downstream consumers through [`can_create`], [`can_edit`] and
//! [`can_delete`].
//!
//! # Roles
//!
//! [`Role`] tables map stripped collection paths (`products::locales`) to
//! permissions. [`PermissionsSpec::from_roles`] returns a builder that
//! resolves them for the signed-in user with [`resolve_role_permissions`].
//!
//! | Situation | Result |
//! |-----------|--------|
//! | No user, or user without roles | everything denied |
//! | User owns the collection | everything allowed |
//! | Otherwise | OR of every role's permissions |
//!
//! Per role: admin ⇒ everything; an entry for the stripped path ⇒ that
//! entry; a default ⇒ the default; else nothing.
//!
//! # Example
//!
//! ```
//! use cms_navigator::{AuthState, EntityCollection, Permissions, PermissionsSpec, User};
//! use cms_navigator::permissions::resolve_permissions;
//!
//! let auth = AuthState::signed_in(User::new("u1"));
//! let drafts = EntityCollection::new("drafts", "Drafts").permissions_spec(
//!     PermissionsSpec::builder(|props| {
//!         if props.user.is_some() { Permissions::all() } else { Permissions::none() }
//!     }),
//! );
//!
//! let resolved = resolve_permissions(&drafts, &auth, &["drafts".to_string()], None);
//! assert!(resolved.read);
//! ```

use crate::auth::{AuthController, User};
use crate::collection::EntityCollection;
use crate::paths::{strip_collection_path, STRIPPED_PATH_SEPARATOR};
use crate::resolve::EntityReference;
use crate::trace_log;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Permissions
// ============================================================================

/// Operations a user may perform on a collection.
///
/// The default allows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permissions {
    /// May see the collection (and find it in navigation)
    pub read: bool,
    /// May add entities
    pub create: bool,
    /// May edit entities
    pub edit: bool,
    /// May delete entities
    pub delete: bool,
}

impl Permissions {
    /// Everything allowed.
    pub const fn all() -> Self {
        Self {
            read: true,
            create: true,
            edit: true,
            delete: true,
        }
    }

    /// Everything denied.
    pub const fn none() -> Self {
        Self {
            read: false,
            create: false,
            edit: false,
            delete: false,
        }
    }

    /// Read allowed, writes denied.
    pub const fn read_only() -> Self {
        Self {
            read: true,
            create: false,
            edit: false,
            delete: false,
        }
    }

    /// Combine two permission sets, allowing what either allows.
    pub const fn union(self, other: Self) -> Self {
        Self {
            read: self.read || other.read,
            create: self.create || other.create,
            edit: self.edit || other.edit,
            delete: self.delete || other.delete,
        }
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::all()
    }
}

// ============================================================================
// PermissionsSpec
// ============================================================================

/// Arguments handed to a permissions builder.
pub struct PermissionsBuilderProps<'a> {
    /// Collection segments leading to the collection, e.g. `["products", "locales"]`
    pub path_segments: &'a [String],
    /// Signed-in user
    pub user: Option<&'a User>,
    /// Collection being evaluated
    pub collection: &'a EntityCollection,
    /// Auth controller the user came from
    pub auth: &'a dyn AuthController,
    /// Entity the check is about, when there is one
    pub entity: Option<&'a EntityReference>,
}

/// Function computing permissions for the current user.
pub type PermissionsBuilder =
    Arc<dyn Fn(&PermissionsBuilderProps<'_>) -> Permissions + Send + Sync + 'static>;

/// How a collection declares its permissions.
#[derive(Clone)]
pub enum PermissionsSpec {
    /// Fixed permissions
    Static(Permissions),
    /// Permissions computed per user on every resolution pass
    Builder(PermissionsBuilder),
}

impl PermissionsSpec {
    /// Wrap a closure as a permissions builder.
    pub fn builder<F>(f: F) -> Self
    where
        F: Fn(&PermissionsBuilderProps<'_>) -> Permissions + Send + Sync + 'static,
    {
        PermissionsSpec::Builder(Arc::new(f))
    }

    /// Builder resolving the signed-in user's [`Role`]s.
    pub fn from_roles() -> Self {
        Self::builder(|props| {
            resolve_role_permissions(props.user, props.collection, props.path_segments)
        })
    }
}

impl PartialEq for PermissionsSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PermissionsSpec::Static(a), PermissionsSpec::Static(b)) => a == b,
            (PermissionsSpec::Builder(a), PermissionsSpec::Builder(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for PermissionsSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionsSpec::Static(permissions) => {
                f.debug_tuple("Static").field(permissions).finish()
            }
            PermissionsSpec::Builder(_) => f.write_str("Builder(<fn>)"),
        }
    }
}

impl From<Permissions> for PermissionsSpec {
    fn from(permissions: Permissions) -> Self {
        PermissionsSpec::Static(permissions)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the concrete permissions of `collection` for the current user.
///
/// Never fails: a collection without a spec allows everything.
pub fn resolve_permissions(
    collection: &EntityCollection,
    auth: &dyn AuthController,
    path_segments: &[String],
    entity: Option<&EntityReference>,
) -> Permissions {
    match &collection.permissions {
        None => Permissions::all(),
        Some(PermissionsSpec::Static(permissions)) => *permissions,
        Some(PermissionsSpec::Builder(builder)) => builder(&PermissionsBuilderProps {
            path_segments,
            user: auth.user(),
            collection,
            auth,
            entity,
        }),
    }
}

/// Whether the current user may see `collection`.
pub fn can_read(
    collection: &EntityCollection,
    auth: &dyn AuthController,
    path_segments: &[String],
) -> bool {
    resolve_permissions(collection, auth, path_segments, None).read
}

/// Whether the current user may add entities to `collection`.
pub fn can_create(
    collection: &EntityCollection,
    auth: &dyn AuthController,
    path_segments: &[String],
) -> bool {
    resolve_permissions(collection, auth, path_segments, None).create
}

/// Whether the current user may edit `entity` (or entities in general).
pub fn can_edit(
    collection: &EntityCollection,
    auth: &dyn AuthController,
    path_segments: &[String],
    entity: Option<&EntityReference>,
) -> bool {
    resolve_permissions(collection, auth, path_segments, entity).edit
}

/// Whether the current user may delete `entity` (or entities in general).
pub fn can_delete(
    collection: &EntityCollection,
    auth: &dyn AuthController,
    path_segments: &[String],
    entity: Option<&EntityReference>,
) -> bool {
    resolve_permissions(collection, auth, path_segments, entity).delete
}

/// Drop every collection the current user cannot read.
///
/// Filtering is recursive. A denied collection is removed together with its
/// whole subtree and its children are never evaluated; an allowed collection
/// keeps a filtered copy of its subcollections.
pub fn filter_allowed_collections(
    collections: Vec<EntityCollection>,
    auth: &dyn AuthController,
) -> Vec<EntityCollection> {
    filter_recursive(collections, auth, &mut Vec::new())
}

fn filter_recursive(
    collections: Vec<EntityCollection>,
    auth: &dyn AuthController,
    parent_segments: &mut Vec<String>,
) -> Vec<EntityCollection> {
    let mut allowed_collections = Vec::with_capacity(collections.len());

    for mut collection in collections {
        parent_segments.push(collection.path.clone());

        let allowed =
            collection.permissions.is_none() || can_read(&collection, auth, parent_segments);

        trace_log!(
            "Permission check '{}' → {}",
            parent_segments.join("/"),
            if allowed { "read" } else { "denied" }
        );

        if allowed {
            if !collection.subcollections.is_empty() {
                let children = std::mem::take(&mut collection.subcollections);
                collection.subcollections = filter_recursive(children, auth, parent_segments);
            }
            allowed_collections.push(collection);
        }

        parent_segments.pop();
    }

    allowed_collections
}

// ============================================================================
// Roles
// ============================================================================

/// A role granting permissions over collections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Role {
    /// Role identifier
    pub id: String,
    /// Admins may do anything
    pub is_admin: bool,
    /// Permissions used when no explicit entry matches
    pub default_permissions: Option<Permissions>,
    /// Permissions keyed by stripped collection path (`products::locales`)
    pub collection_permissions: BTreeMap<String, Permissions>,
}

impl Role {
    /// Create a role without any grants.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Create an admin role.
    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(id)
        }
    }

    /// Set the fallback permissions.
    pub fn default_permissions(mut self, permissions: Permissions) -> Self {
        self.default_permissions = Some(permissions);
        self
    }

    /// Grant permissions on a collection path. The path is stripped of
    /// document ids before it is stored.
    pub fn grant(mut self, collection_path: &str, permissions: Permissions) -> Self {
        self.collection_permissions
            .insert(strip_collection_path(collection_path), permissions);
        self
    }

    /// Permissions this role grants on the collection identified by `key`.
    pub fn permissions_for(&self, key: &str) -> Permissions {
        if self.is_admin {
            return Permissions::all();
        }
        self.collection_permissions
            .get(key)
            .copied()
            .or(self.default_permissions)
            .unwrap_or_else(Permissions::none)
    }
}

/// Resolve the permissions a user's roles grant on a collection.
pub fn resolve_role_permissions(
    user: Option<&User>,
    collection: &EntityCollection,
    path_segments: &[String],
) -> Permissions {
    let Some(user) = user else {
        return Permissions::none();
    };
    if collection.owner_id.as_deref() == Some(user.uid.as_str()) {
        return Permissions::all();
    }
    if user.roles.is_empty() {
        return Permissions::none();
    }

    let key = role_key(path_segments);
    user.roles
        .iter()
        .map(|role| role.permissions_for(&key))
        .fold(Permissions::none(), Permissions::union)
}

/// Role table key for a list of collection segments.
fn role_key(path_segments: &[String]) -> String {
    path_segments
        .iter()
        .map(|segment| strip_collection_path(segment))
        .collect::<Vec<_>>()
        .join(STRIPPED_PATH_SEPARATOR)
}
