//! # cms-navigator
//!
//! Navigation resolution for CMS collection trees.
//!
//! An admin panel declares its data as a tree of [`EntityCollection`]s
//! (each one may own subcollections living under its documents) plus a list
//! of free-standing [`CmsView`]s. This crate turns that declaration into
//! navigation:
//!
//! - **Path resolution**: map a data path such as `products/pid/locales` to
//!   the collection it addresses, and build the breadcrumb chain for any
//!   path ([`resolve`]).
//! - **Permissions**: drop the collections the signed-in user may not read,
//!   recursively ([`permissions`]).
//! - **Deferred sources**: collections and views may come from async
//!   builders that depend on the user ([`source`]).
//! - **Controller**: [`NavigationController`] resolves the tree, keeps the
//!   latest snapshot, merges per-user overrides and answers lookups.
//! - **URLs**: build CMS URLs from data paths and back ([`navigation`]).
//!
//! # Example
//!
//! ```
//! use cms_navigator::{AuthState, EntityCollection, NavigationConfig, NavigationController, User};
//!
//! let controller = NavigationController::new(
//!     NavigationConfig::new()
//!         .collections(vec![EntityCollection::new("products", "Products")
//!             .subcollection(EntityCollection::new("locales", "Locales"))])
//!         .auth(AuthState::signed_in(User::new("ana"))),
//! );
//! pollster::block_on(controller.refresh_navigation());
//!
//! let locales = controller.get_collection("products/pid/locales", None, false).unwrap();
//! assert_eq!(locales.unwrap().name, "Locales");
//! ```
//!
//! # Feature flags
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `log`     | yes     | Log through the `log` crate |
//! | `tracing` | no      | Log through the `tracing` crate |
//! | `cache`   | yes     | LRU cache for collection lookups |
//! | `timeout` | yes     | Optional timeout on a resolution pass (Tokio timer) |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod auth;
#[cfg(feature = "cache")]
pub mod cache;
pub mod collection;
pub mod controller;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod overrides;
pub mod paths;
pub mod permissions;
pub mod resolve;
pub mod source;
pub mod state;

pub use auth::{AuthController, AuthState, DataSourceDelegate, NoDataSource, User};
pub use collection::{
    CallbacksHandle, CmsView, EntityCallbacks, EntityCollection, EntityCustomView, ViewPath,
};
pub use controller::{
    InjectCollections, NavigationConfig, NavigationController, OwnedNavigationEntry,
    RefreshOutcome,
};
pub use error::{BuildError, NavigationError};
pub use navigation::{
    compute_top_navigation, TopNavigationEntry, TopNavigationResult, TopNavigationTarget,
    UrlBuilder, DEFAULT_BASE_PATH, DEFAULT_COLLECTION_PATH,
};
pub use overrides::{
    CollectionOverride, FieldPatch, InMemoryUserConfiguration, UserConfigurationPersistence,
};
pub use permissions::{Permissions, PermissionsBuilderProps, PermissionsSpec, Role};
pub use resolve::{
    get_collection_view_from_path, get_navigation_entries_from_path, Breadcrumbs,
    CollectionViewMatch, EntityReference, NavigationEntry,
};
pub use source::{BuilderProps, CollectionSource, CollectionsSource, ViewsSource};
pub use state::{CommitOutcome, LoadPhase};
