//! Per-user collection overrides.
//!
//! Users can customise how a collection is presented (property order,
//! grouping, visibility…). Those customisations are persisted by a
//! [`UserConfigurationPersistence`] and merged over the resolved collection
//! by [`merge_collection`].
//!
//! Each field of a [`CollectionOverride`] is a [`FieldPatch`]: keep the base
//! value, set a new one, or clear it. What a patch may do depends on the
//! field's [`MergeRule`], listed in [`MERGE_POLICY`]:
//!
//! | Field | Rule |
//! |-------|------|
//! | `name`, `description`, `group`, `hide_from_navigation`, `collection_group`, `properties_order`, `entity_views` | override-first |
//! | `subcollections`, `callbacks`, `permissions` | base-preserving |
//!
//! Override-first fields take the override whenever it says anything,
//! including a clear. Base-preserving fields take the override only when it
//! sets a value; a clear is ignored, so a partial override can never wipe
//! the structure of a collection.

use crate::collection::{CallbacksHandle, EntityCollection, EntityCustomView};
use crate::permissions::PermissionsSpec;
use crate::warn_log;
use std::collections::HashMap;
use std::sync::RwLock;

// ============================================================================
// Merge policy
// ============================================================================

/// How an override field combines with the base collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// The override wins whenever it specifies the field, clears included
    OverrideFirst,
    /// The base is kept unless the override sets an explicit value
    BasePreserving,
}

/// Fields of an [`EntityCollection`] an override may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionField {
    Name,
    Description,
    Group,
    HideFromNavigation,
    CollectionGroup,
    PropertiesOrder,
    EntityViews,
    Subcollections,
    Callbacks,
    Permissions,
}

/// Merge rule of every overridable field.
pub const MERGE_POLICY: &[(CollectionField, MergeRule)] = &[
    (CollectionField::Name, MergeRule::OverrideFirst),
    (CollectionField::Description, MergeRule::OverrideFirst),
    (CollectionField::Group, MergeRule::OverrideFirst),
    (CollectionField::HideFromNavigation, MergeRule::OverrideFirst),
    (CollectionField::CollectionGroup, MergeRule::OverrideFirst),
    (CollectionField::PropertiesOrder, MergeRule::OverrideFirst),
    (CollectionField::EntityViews, MergeRule::OverrideFirst),
    (CollectionField::Subcollections, MergeRule::BasePreserving),
    (CollectionField::Callbacks, MergeRule::BasePreserving),
    (CollectionField::Permissions, MergeRule::BasePreserving),
];

/// Look up the merge rule of `field` in [`MERGE_POLICY`].
pub fn merge_rule(field: CollectionField) -> MergeRule {
    MERGE_POLICY
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map_or(MergeRule::BasePreserving, |(_, rule)| *rule)
}

// ============================================================================
// Override
// ============================================================================

/// Change requested for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch<T> {
    /// Leave the base value alone
    Keep,
    /// Remove the base value
    Clear,
    /// Replace the base value
    Set(T),
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        FieldPatch::Keep
    }
}

impl<T> FieldPatch<T> {
    /// Whether this patch leaves the field untouched.
    pub fn is_keep(&self) -> bool {
        matches!(self, FieldPatch::Keep)
    }
}

/// A partial collection stored per user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionOverride {
    pub name: FieldPatch<String>,
    pub description: FieldPatch<String>,
    pub group: FieldPatch<String>,
    pub hide_from_navigation: FieldPatch<bool>,
    pub collection_group: FieldPatch<bool>,
    pub properties_order: FieldPatch<Vec<String>>,
    pub entity_views: FieldPatch<Vec<EntityCustomView>>,
    pub subcollections: FieldPatch<Vec<EntityCollection>>,
    pub callbacks: FieldPatch<CallbacksHandle>,
    pub permissions: FieldPatch<PermissionsSpec>,
}

impl CollectionOverride {
    /// An override that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the collection.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldPatch::Set(name.into());
        self
    }

    /// Replace the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldPatch::Set(description.into());
        self
    }

    /// Move the collection to another navigation group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = FieldPatch::Set(group.into());
        self
    }

    /// Remove the collection from any navigation group.
    pub fn clear_group(mut self) -> Self {
        self.group = FieldPatch::Clear;
        self
    }

    /// Show or hide the collection in navigation.
    pub fn hide_from_navigation(mut self, hidden: bool) -> Self {
        self.hide_from_navigation = FieldPatch::Set(hidden);
        self
    }

    /// Reorder properties.
    pub fn properties_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties_order = FieldPatch::Set(order.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the subcollections.
    pub fn subcollections(mut self, subcollections: Vec<EntityCollection>) -> Self {
        self.subcollections = FieldPatch::Set(subcollections);
        self
    }

    /// Replace the permissions.
    pub fn permissions(mut self, permissions: PermissionsSpec) -> Self {
        self.permissions = FieldPatch::Set(permissions);
        self
    }
}

// ============================================================================
// Merge
// ============================================================================

/// Apply `patch` over `base` following [`MERGE_POLICY`].
///
/// # Examples
///
/// ```
/// use cms_navigator::{CollectionOverride, EntityCollection};
/// use cms_navigator::overrides::{merge_collection, FieldPatch};
///
/// let base = EntityCollection::new("products", "Products")
///     .group("Catalog")
///     .subcollection(EntityCollection::new("locales", "Locales"));
///
/// let mut patch = CollectionOverride::new().properties_order(["price", "name"]).clear_group();
/// patch.subcollections = FieldPatch::Clear;
///
/// let merged = merge_collection(&base, &patch);
/// assert_eq!(merged.properties_order, vec!["price", "name"]);
/// assert_eq!(merged.group, None);
/// assert_eq!(merged.subcollections.len(), 1);
/// ```
pub fn merge_collection(base: &EntityCollection, patch: &CollectionOverride) -> EntityCollection {
    EntityCollection {
        path: base.path.clone(),
        id: base.id.clone(),
        name: merge_value(CollectionField::Name, &base.name, &patch.name),
        description: merge_optional(
            CollectionField::Description,
            &base.description,
            &patch.description,
        ),
        group: merge_optional(CollectionField::Group, &base.group, &patch.group),
        hide_from_navigation: merge_value(
            CollectionField::HideFromNavigation,
            &base.hide_from_navigation,
            &patch.hide_from_navigation,
        ),
        collection_group: merge_value(
            CollectionField::CollectionGroup,
            &base.collection_group,
            &patch.collection_group,
        ),
        properties_order: merge_value(
            CollectionField::PropertiesOrder,
            &base.properties_order,
            &patch.properties_order,
        ),
        entity_views: merge_value(
            CollectionField::EntityViews,
            &base.entity_views,
            &patch.entity_views,
        ),
        subcollections: merge_value(
            CollectionField::Subcollections,
            &base.subcollections,
            &patch.subcollections,
        ),
        callbacks: merge_optional(CollectionField::Callbacks, &base.callbacks, &patch.callbacks),
        permissions: merge_optional(
            CollectionField::Permissions,
            &base.permissions,
            &patch.permissions,
        ),
        owner_id: base.owner_id.clone(),
    }
}

fn merge_optional<T: Clone>(
    field: CollectionField,
    base: &Option<T>,
    patch: &FieldPatch<T>,
) -> Option<T> {
    match (patch, merge_rule(field)) {
        (FieldPatch::Keep, _) => base.clone(),
        (FieldPatch::Set(value), _) => Some(value.clone()),
        (FieldPatch::Clear, MergeRule::OverrideFirst) => None,
        (FieldPatch::Clear, MergeRule::BasePreserving) => {
            warn_log!("Ignoring override clearing protected field {:?}", field);
            base.clone()
        }
    }
}

fn merge_value<T: Clone + Default>(field: CollectionField, base: &T, patch: &FieldPatch<T>) -> T {
    match (patch, merge_rule(field)) {
        (FieldPatch::Keep, _) => base.clone(),
        (FieldPatch::Set(value), _) => value.clone(),
        (FieldPatch::Clear, MergeRule::OverrideFirst) => T::default(),
        (FieldPatch::Clear, MergeRule::BasePreserving) => {
            warn_log!("Ignoring override clearing protected field {:?}", field);
            base.clone()
        }
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Store of per-user collection overrides.
pub trait UserConfigurationPersistence: Send + Sync + 'static {
    /// Override saved for the collection addressed by `id_or_path`, if any.
    fn get_collection_config(&self, id_or_path: &str) -> Option<CollectionOverride>;
}

/// Process-local override store.
#[derive(Debug, Default)]
pub struct InMemoryUserConfiguration {
    overrides: RwLock<HashMap<String, CollectionOverride>>,
}

impl InMemoryUserConfiguration {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save (or replace) the override for `id_or_path`.
    pub fn save_collection_config(&self, id_or_path: &str, config: CollectionOverride) {
        let key = crate::paths::remove_initial_and_trailing_slashes(id_or_path).to_string();
        match self.overrides.write() {
            Ok(mut overrides) => {
                overrides.insert(key, config);
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(key, config);
            }
        }
    }
}

impl UserConfigurationPersistence for InMemoryUserConfiguration {
    fn get_collection_config(&self, id_or_path: &str) -> Option<CollectionOverride> {
        let key = crate::paths::remove_initial_and_trailing_slashes(id_or_path);
        match self.overrides.read() {
            Ok(overrides) => overrides.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }
}
