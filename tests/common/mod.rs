//! Test utilities for navigation tests
//!
//! Provides a small site configuration, auth helpers and logger setup shared
//! by the integration and unit test crates.

#![allow(dead_code)]

use cms_navigator::*;
use std::sync::Arc;

/// Initialise `env_logger` once per test binary.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Collection tree of a small shop:
///
/// ```text
/// products                  (alias "items", custom view "custom_view")
///   └─ locales
/// sites/es/products
///   └─ locales
/// products/id/subcollection_inline
/// users                     (read-only)
/// ```
pub fn site_collections() -> Vec<EntityCollection> {
    vec![
        EntityCollection::new("products", "Products")
            .alias("items")
            .group("Catalog")
            .entity_view(EntityCustomView::new("custom_view", "Custom view"))
            .subcollection(EntityCollection::new("locales", "Locales")),
        EntityCollection::new("sites/es/products", "Spanish products")
            .group("Catalog")
            .subcollection(EntityCollection::new("locales", "Spanish locales")),
        EntityCollection::new("products/id/subcollection_inline", "Inline subcollection")
            .hidden(),
        EntityCollection::new("users", "Users").permissions(Permissions::read_only()),
    ]
}

/// Views of the small shop.
pub fn site_views() -> Vec<CmsView> {
    vec![
        CmsView::with_aliases(["dashboard", "home"], "Dashboard").group("Tools"),
        CmsView::new("debug", "Debug").hidden(),
    ]
}

/// Auth state with `uid` signed in.
pub fn signed_in(uid: &str) -> AuthState {
    AuthState::signed_in(User::new(uid))
}

/// Controller over the shop, already configured but not resolved.
pub fn site_controller() -> NavigationController {
    NavigationController::new(
        NavigationConfig::new()
            .collections(site_collections())
            .views(site_views())
            .auth(signed_in("ana")),
    )
}

/// A collection whose permissions are computed by a closure.
pub fn collection_with_permissions(
    path: &str,
    build: impl Fn(&PermissionsBuilderProps<'_>) -> Permissions + Send + Sync + 'static,
) -> EntityCollection {
    EntityCollection::new(path, path).permissions_spec(PermissionsSpec::builder(build))
}

/// Paths of a list of collections, for compact assertions.
pub fn paths_of(collections: &[EntityCollection]) -> Vec<&str> {
    collections.iter().map(|c| c.path.as_str()).collect()
}

/// Shared auth controller handle.
pub fn shared_auth(auth: AuthState) -> Arc<dyn AuthController> {
    Arc::new(auth)
}
