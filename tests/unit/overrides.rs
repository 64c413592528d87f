//! User override merge tests

use cms_navigator::overrides::*;
use cms_navigator::{
    CallbacksHandle, EntityCallbacks, EntityCollection, EntityCustomView, FieldPatch, Permissions,
    PermissionsSpec,
};

struct Audit;

impl EntityCallbacks for Audit {
    fn name(&self) -> &str {
        "audit"
    }
}

fn base() -> EntityCollection {
    EntityCollection::new("products", "Products")
        .description("All products")
        .group("Catalog")
        .properties_order(["name", "price"])
        .entity_view(EntityCustomView::new("preview", "Preview"))
        .subcollection(EntityCollection::new("locales", "Locales"))
        .permissions(Permissions::read_only())
        .callbacks(CallbacksHandle::new(Audit))
}

#[test]
fn test_empty_override_changes_nothing() {
    let base = base();
    assert_eq!(merge_collection(&base, &CollectionOverride::new()), base);
}

#[test]
fn test_override_first_fields_take_override() {
    let merged = merge_collection(
        &base(),
        &CollectionOverride::new()
            .name("Mine")
            .description("Only mine")
            .hide_from_navigation(true)
            .properties_order(["price"]),
    );
    assert_eq!(merged.name, "Mine");
    assert_eq!(merged.description.as_deref(), Some("Only mine"));
    assert!(merged.hide_from_navigation);
    assert_eq!(merged.properties_order, vec!["price"]);
    assert_eq!(merged.path, "products");
}

#[test]
fn test_override_first_fields_can_be_cleared() {
    let patch = CollectionOverride {
        description: FieldPatch::Clear,
        entity_views: FieldPatch::Clear,
        ..CollectionOverride::new()
    }
    .clear_group();
    let merged = merge_collection(&base(), &patch);
    assert_eq!(merged.description, None);
    assert_eq!(merged.group, None);
    assert!(merged.entity_views.is_empty());
}

#[test]
fn test_base_preserving_fields_survive_clear() {
    let base = base();
    let patch = CollectionOverride {
        subcollections: FieldPatch::Clear,
        callbacks: FieldPatch::Clear,
        permissions: FieldPatch::Clear,
        ..CollectionOverride::new()
    };
    let merged = merge_collection(&base, &patch);
    assert_eq!(merged.subcollections, base.subcollections);
    assert_eq!(merged.callbacks, base.callbacks);
    assert_eq!(merged.permissions, base.permissions);
    assert_eq!(merged.callbacks.unwrap().0.name(), "audit");
}

#[test]
fn test_base_preserving_fields_take_explicit_values() {
    let merged = merge_collection(
        &base(),
        &CollectionOverride::new()
            .subcollections(vec![])
            .permissions(PermissionsSpec::Static(Permissions::none())),
    );
    assert!(merged.subcollections.is_empty());
    assert_eq!(
        merged.permissions,
        Some(PermissionsSpec::Static(Permissions::none()))
    );
}

#[test]
fn test_policy_table_is_explicit() {
    assert_eq!(merge_rule(CollectionField::Name), MergeRule::OverrideFirst);
    assert_eq!(merge_rule(CollectionField::Subcollections), MergeRule::BasePreserving);
    assert_eq!(merge_rule(CollectionField::Callbacks), MergeRule::BasePreserving);
    assert_eq!(merge_rule(CollectionField::Permissions), MergeRule::BasePreserving);
    assert_eq!(
        MERGE_POLICY
            .iter()
            .filter(|(_, rule)| *rule == MergeRule::BasePreserving)
            .count(),
        3
    );
}

#[test]
fn test_in_memory_store_normalises_keys() {
    let store = InMemoryUserConfiguration::new();
    store.save_collection_config("/products/", CollectionOverride::new().name("Mine"));

    assert!(store.get_collection_config("products").is_some());
    assert!(store.get_collection_config("orders").is_none());
}
