//! The navigation controller.
//!
//! [`NavigationController`] owns the inputs of the navigation tree (collection
//! and view sources, the auth controller, an optional injection transform)
//! and the resolved state derived from them. Consumers hold it behind an
//! `Arc` and call [`refresh_navigation`](NavigationController::refresh_navigation)
//! whenever they want the tree rebuilt, typically after one of the `set_*`
//! input changers.
//!
//! ```
//! use cms_navigator::{AuthState, EntityCollection, NavigationConfig, NavigationController, User};
//!
//! let controller = NavigationController::new(
//!     NavigationConfig::new()
//!         .collections(vec![EntityCollection::new("products", "Products")])
//!         .auth(AuthState::signed_in(User::new("ana"))),
//! );
//!
//! pollster::block_on(controller.refresh_navigation());
//!
//! let products = controller.get_collection("products", None, false).unwrap().unwrap();
//! assert_eq!(products.name, "Products");
//! assert_eq!(controller.urls().build_url_collection_path("products"), "/c/products");
//! ```
//!
//! # Resolution
//!
//! A refresh resolves the collection and view sources concurrently, drops the
//! collections the user cannot read, applies the injection transform and
//! commits the result. Every refresh takes a generation ticket and every
//! input change invalidates the tickets handed out so far, so a slow refresh
//! started before a change never overwrites a newer result.
//!
//! A failed refresh is logged and recorded in
//! [`navigation_loading_error`](NavigationController::navigation_loading_error);
//! the previously resolved tree stays visible.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, CollectionCache};
use crate::auth::{AuthController, AuthState, DataSourceDelegate, NoDataSource};
use crate::collection::{CmsView, EntityCollection};
use crate::error::NavigationError;
use crate::navigation::{
    compute_top_navigation, TopNavigationResult, UrlBuilder, DEFAULT_BASE_PATH,
    DEFAULT_COLLECTION_PATH,
};
use crate::overrides::{merge_collection, UserConfigurationPersistence};
use crate::paths::{remove_initial_and_trailing_slashes, side_panel_key, split_segments};
use crate::permissions::filter_allowed_collections;
use crate::resolve::{
    get_collection_by_path_or_id, get_navigation_entries_from_path,
    get_parent_references_from_path, resolve_collection_path_ids, EntityReference,
    NavigationEntry,
};
use crate::source::{BuilderProps, CollectionsSource, ViewsSource};
use crate::state::{CommitOutcome, Generation, LoadPhase, NavigationState};
use crate::{debug_log, error_log, info_log, trace_log};
use futures::future;
use std::fmt;
#[cfg(feature = "cache")]
use std::sync::Mutex;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
#[cfg(feature = "timeout")]
use std::time::Duration;

/// Transform applied to the permission-filtered collections of every
/// resolution, e.g. to add plugin collections.
pub type InjectCollections =
    Arc<dyn Fn(Vec<EntityCollection>) -> Vec<EntityCollection> + Send + Sync + 'static>;

// ============================================================================
// NavigationConfig
// ============================================================================

/// Configuration of a [`NavigationController`].
///
/// # Example
///
/// ```
/// use cms_navigator::{AuthState, CmsView, EntityCollection, NavigationConfig};
///
/// let config = NavigationConfig::new()
///     .base_path("/admin")
///     .base_collection_path("/data")
///     .collections(vec![EntityCollection::new("products", "Products")])
///     .views(vec![CmsView::new("dashboard", "Dashboard")])
///     .auth(AuthState::signed_out());
/// # let _ = config;
/// ```
#[derive(Clone)]
pub struct NavigationConfig {
    base_path: String,
    base_collection_path: String,
    collections: CollectionsSource,
    views: ViewsSource,
    auth: Arc<dyn AuthController>,
    data_source: Arc<dyn DataSourceDelegate>,
    user_config_persistence: Option<Arc<dyn UserConfigurationPersistence>>,
    inject_collections: Option<InjectCollections>,
    #[cfg(feature = "timeout")]
    resolution_timeout: Option<Duration>,
}

impl NavigationConfig {
    /// Default configuration: base path `/`, collections under `/c`, no
    /// collections or views, nobody signed in.
    pub fn new() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            base_collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            collections: CollectionsSource::default(),
            views: ViewsSource::default(),
            auth: Arc::new(AuthState::signed_out()),
            data_source: Arc::new(NoDataSource),
            user_config_persistence: None,
            inject_collections: None,
            #[cfg(feature = "timeout")]
            resolution_timeout: None,
        }
    }

    /// Prefix of every CMS URL.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Prefix of collection URLs, below the base path.
    pub fn base_collection_path(mut self, path: impl Into<String>) -> Self {
        self.base_collection_path = path.into();
        self
    }

    /// Top-level collections, as a list or a builder.
    pub fn collections(mut self, collections: impl Into<CollectionsSource>) -> Self {
        self.collections = collections.into();
        self
    }

    /// Top-level views, as a list or a builder.
    pub fn views(mut self, views: impl Into<ViewsSource>) -> Self {
        self.views = views.into();
        self
    }

    /// Authentication state.
    pub fn auth(mut self, auth: impl AuthController) -> Self {
        self.auth = Arc::new(auth);
        self
    }

    /// Authentication controller shared with the rest of the application.
    pub fn auth_controller(mut self, auth: Arc<dyn AuthController>) -> Self {
        self.auth = auth;
        self
    }

    /// Backend handle passed to builders.
    pub fn data_source(mut self, data_source: Arc<dyn DataSourceDelegate>) -> Self {
        self.data_source = data_source;
        self
    }

    /// Store of per-user collection overrides.
    pub fn user_config_persistence(
        mut self,
        persistence: Arc<dyn UserConfigurationPersistence>,
    ) -> Self {
        self.user_config_persistence = Some(persistence);
        self
    }

    /// Transform applied to the resolved collections.
    pub fn inject_collections<F>(mut self, inject: F) -> Self
    where
        F: Fn(Vec<EntityCollection>) -> Vec<EntityCollection> + Send + Sync + 'static,
    {
        self.inject_collections = Some(Arc::new(inject));
        self
    }

    /// Fail a resolution that takes longer than `after`.
    ///
    /// The timer needs a Tokio runtime with the time driver enabled.
    #[cfg(feature = "timeout")]
    pub fn resolution_timeout(mut self, after: Duration) -> Self {
        self.resolution_timeout = Some(after);
        self
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NavigationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationConfig")
            .field("base_path", &self.base_path)
            .field("base_collection_path", &self.base_collection_path)
            .field("collections", &self.collections)
            .field("views", &self.views)
            .field("user_override", &self.user_config_persistence.is_some())
            .field("inject_collections", &self.inject_collections.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// NavigationController
// ============================================================================

/// What a call to [`NavigationController::refresh_navigation`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Auth was still loading, nothing was resolved
    Skipped,
    /// A newer refresh or an input change superseded this one
    Superseded,
    /// The result was committed
    Committed(CommitOutcome),
    /// Resolution failed; the error is also stored in the state
    Failed(NavigationError),
}

struct Inputs {
    collections: CollectionsSource,
    views: ViewsSource,
    auth: Arc<dyn AuthController>,
    inject_collections: Option<InjectCollections>,
}

/// Resolves and holds the navigation tree.
pub struct NavigationController {
    urls: UrlBuilder,
    data_source: Arc<dyn DataSourceDelegate>,
    user_config_persistence: Option<Arc<dyn UserConfigurationPersistence>>,
    #[cfg(feature = "timeout")]
    resolution_timeout: Option<Duration>,
    inputs: RwLock<Inputs>,
    state: RwLock<NavigationState>,
    generation: Generation,
    #[cfg(feature = "cache")]
    cache: Mutex<CollectionCache>,
}

impl NavigationController {
    /// Create a controller. Nothing is resolved until the first
    /// [`refresh_navigation`](Self::refresh_navigation).
    pub fn new(config: NavigationConfig) -> Self {
        debug_log!(
            "Creating navigation controller (base path '{}', collections under '{}')",
            config.base_path,
            config.base_collection_path
        );
        Self {
            urls: UrlBuilder::new(config.base_path, config.base_collection_path),
            data_source: config.data_source,
            user_config_persistence: config.user_config_persistence,
            #[cfg(feature = "timeout")]
            resolution_timeout: config.resolution_timeout,
            inputs: RwLock::new(Inputs {
                collections: config.collections,
                views: config.views,
                auth: config.auth,
                inject_collections: config.inject_collections,
            }),
            state: RwLock::new(NavigationState::new()),
            generation: Generation::new(),
            #[cfg(feature = "cache")]
            cache: Mutex::new(CollectionCache::new()),
        }
    }

    fn read_inputs(&self) -> RwLockReadGuard<'_, Inputs> {
        self.inputs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, NavigationState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, NavigationState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(feature = "cache")]
    fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[cfg(not(feature = "cache"))]
    fn clear_cache(&self) {}

    // ------------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------------

    /// URL builder for the configured base paths.
    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// URL of the CMS home page.
    pub fn home_url(&self) -> String {
        self.urls.home_url()
    }

    /// Resolved collections, `None` before the first successful resolution.
    pub fn collections(&self) -> Option<Arc<Vec<EntityCollection>>> {
        self.read_state().collections()
    }

    /// Resolved views, `None` before the first successful resolution.
    pub fn views(&self) -> Option<Arc<Vec<CmsView>>> {
        self.read_state().views()
    }

    /// Top-level navigation of the resolved tree.
    pub fn top_level_navigation(&self) -> Option<Arc<TopNavigationResult>> {
        self.read_state().top_level_navigation()
    }

    /// `true` until a resolution for the current inputs has finished.
    pub fn loading(&self) -> bool {
        self.read_state().loading()
    }

    /// `true` once any resolution has finished.
    pub fn initialised(&self) -> bool {
        self.read_state().initialised()
    }

    /// Current resolution phase.
    pub fn phase(&self) -> LoadPhase {
        self.read_state().phase()
    }

    /// Error of the latest failed resolution.
    pub fn navigation_loading_error(&self) -> Option<NavigationError> {
        self.read_state().error().cloned()
    }

    /// Statistics of the collection lookup cache.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats()
            .clone()
    }

    // ------------------------------------------------------------------------
    // Input changers
    // ------------------------------------------------------------------------

    fn change_inputs(&self, what: &str, change: impl FnOnce(&mut Inputs)) {
        {
            let mut inputs = self.inputs.write().unwrap_or_else(PoisonError::into_inner);
            change(&mut inputs);
        }
        self.generation.bump();
        self.write_state().mark_loading();
        self.clear_cache();
        debug_log!(
            "Navigation input '{}' changed, generation now {}",
            what,
            self.generation.current()
        );
    }

    /// Replace the authentication controller, e.g. after sign-in.
    pub fn set_auth_controller(&self, auth: Arc<dyn AuthController>) {
        self.change_inputs("auth", |inputs| inputs.auth = auth);
    }

    /// Replace the collection source.
    pub fn set_collections(&self, collections: impl Into<CollectionsSource>) {
        let collections = collections.into();
        self.change_inputs("collections", |inputs| inputs.collections = collections);
    }

    /// Replace the view source.
    pub fn set_views(&self, views: impl Into<ViewsSource>) {
        let views = views.into();
        self.change_inputs("views", |inputs| inputs.views = views);
    }

    /// Replace (or remove) the injection transform.
    pub fn set_inject_collections(&self, inject: Option<InjectCollections>) {
        self.change_inputs("inject_collections", |inputs| {
            inputs.inject_collections = inject
        });
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    /// Resolve the navigation tree for the current inputs.
    ///
    /// Does nothing while the auth controller is still loading. The result
    /// is committed only if no input change or newer refresh happened in the
    /// meantime.
    pub async fn refresh_navigation(&self) -> RefreshOutcome {
        let (ticket, auth, collections, views, inject) = {
            let inputs = self.read_inputs();
            if inputs.auth.initial_loading() {
                debug_log!("Auth still loading, skipping navigation refresh");
                return RefreshOutcome::Skipped;
            }
            (
                self.generation.start(),
                Arc::clone(&inputs.auth),
                inputs.collections.clone(),
                inputs.views.clone(),
                inputs.inject_collections.clone(),
            )
        };
        if !self.begin_refresh(ticket) {
            debug_log!("Navigation refresh {} superseded before it started", ticket);
            return RefreshOutcome::Superseded;
        }
        trace_log!("Navigation refresh {} started", ticket);

        let props = BuilderProps {
            user: auth.user().cloned(),
            auth: Arc::clone(&auth),
            data_source: Arc::clone(&self.data_source),
        };
        let result = self
            .resolve(props, &collections, &views, inject.as_ref(), auth.as_ref())
            .await;

        let mut state = self.write_state();
        if !self.generation.is_current(ticket) {
            debug_log!(
                "Navigation refresh {} superseded by generation {}, dropping result",
                ticket,
                self.generation.current()
            );
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok((collections, views)) => {
                let top_level_navigation = compute_top_navigation(&collections, &views, &self.urls);
                let (collection_count, view_count) = (collections.len(), views.len());
                let outcome = state.commit(collections, views, top_level_navigation);
                drop(state);
                if outcome.collections {
                    self.clear_cache();
                }
                if outcome.changed() {
                    info_log!(
                        "Navigation resolved: {} collections, {} views",
                        collection_count,
                        view_count
                    );
                } else {
                    debug_log!("Navigation resolved, nothing changed");
                }
                RefreshOutcome::Committed(outcome)
            }
            Err(err) => {
                error_log!("Navigation resolution failed: {}", err);
                state.fail(err.clone());
                RefreshOutcome::Failed(err)
            }
        }
    }

    async fn resolve(
        &self,
        props: BuilderProps,
        collections: &CollectionsSource,
        views: &ViewsSource,
        inject: Option<&InjectCollections>,
        auth: &dyn AuthController,
    ) -> Result<(Vec<EntityCollection>, Vec<CmsView>), NavigationError> {
        let both = future::try_join(collections.resolve(props.clone()), views.resolve(props));

        #[cfg(feature = "timeout")]
        let resolved = match self.resolution_timeout {
            Some(after) => tokio::time::timeout(after, both)
                .await
                .map_err(|_| NavigationError::ResolutionTimeout { after })?,
            None => both.await,
        };
        #[cfg(not(feature = "timeout"))]
        let resolved = both.await;

        let (collections, views) = resolved?;
        let mut collections = filter_allowed_collections(collections, auth);
        if let Some(inject) = inject {
            collections = inject(collections);
        }
        Ok((collections, views))
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    /// Move to `Loading` for `ticket`, unless a newer refresh or input
    /// change already took over. Checked under the state lock, so a stale
    /// ticket can never reopen `Loading` after a newer commit.
    fn begin_refresh(&self, ticket: u64) -> bool {
        let mut state = self.write_state();
        if !self.generation.is_current(ticket) {
            return false;
        }
        state.mark_loading();
        true
    }

    fn require_collections(&self) -> Result<Arc<Vec<EntityCollection>>, NavigationError> {
        self.collections().ok_or(NavigationError::NotInitialised)
    }

    #[cfg(feature = "cache")]
    fn base_collection(&self, path: &str) -> Result<Option<EntityCollection>, NavigationError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = cache.get(path) {
            return Ok(hit);
        }
        let collections = self.require_collections()?;
        let found = get_collection_by_path_or_id(path, &collections)?.cloned();
        cache.insert(path, found.clone());
        Ok(found)
    }

    #[cfg(not(feature = "cache"))]
    fn base_collection(&self, path: &str) -> Result<Option<EntityCollection>, NavigationError> {
        let collections = self.require_collections()?;
        Ok(get_collection_by_path_or_id(path, &collections)?.cloned())
    }

    /// Find the collection at `id_or_path`, optionally merged with the
    /// user's saved override.
    ///
    /// `Err(NotInitialised)` before the first resolution, `Ok(None)` when
    /// nothing matches.
    pub fn get_collection(
        &self,
        id_or_path: &str,
        entity_id: Option<&str>,
        include_user_override: bool,
    ) -> Result<Option<EntityCollection>, NavigationError> {
        let path = remove_initial_and_trailing_slashes(id_or_path);
        trace_log!("Looking up collection for '{}'", side_panel_key(path, entity_id));

        let Some(base) = self.base_collection(path)? else {
            return Ok(None);
        };

        let user_override = if include_user_override {
            self.user_config_persistence
                .as_ref()
                .and_then(|persistence| persistence.get_collection_config(id_or_path))
        } else {
            None
        };

        Ok(Some(match user_override {
            Some(user_override) => merge_collection(&base, &user_override),
            None => base,
        }))
    }

    /// Walk the tree one collection segment per level, matching `id` or
    /// `path`.
    pub fn get_collection_from_paths<S: AsRef<str>>(
        &self,
        path_segments: &[S],
    ) -> Result<Option<EntityCollection>, NavigationError> {
        let collections = self.require_collections()?;
        Ok(walk_collections(&collections, path_segments, |collection, segment| {
            collection.matches(segment)
        }))
    }

    /// Walk the tree one collection id per level.
    pub fn get_collection_from_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Option<EntityCollection>, NavigationError> {
        let collections = self.require_collections()?;
        Ok(walk_collections(&collections, ids, |collection, id| {
            collection.id() == id
        }))
    }

    /// Rewrite `id` aliases in a collection path to real paths.
    pub fn resolve_aliases_from(&self, path: &str) -> Result<String, NavigationError> {
        let collections = self.require_collections()?;
        resolve_collection_path_ids(path, &collections)
    }

    /// References to every document along `path`.
    pub fn get_parent_references_from_path(
        &self,
        path: &str,
    ) -> Result<Vec<EntityReference>, NavigationError> {
        let collections = self.require_collections()?;
        Ok(get_parent_references_from_path(path, &collections))
    }

    /// Ids of the collections that own the documents along `path`.
    ///
    /// `products/pid/locales/es` gives `["products"]`: the last collection
    /// segment is the collection itself, not a parent.
    pub fn get_parent_collection_ids(&self, path: &str) -> Result<Vec<String>, NavigationError> {
        self.require_collections()?;
        let segments = split_segments(path);
        let mut collection_segments: Vec<&str> = segments.iter().copied().step_by(2).collect();
        collection_segments.pop();

        let mut ids = Vec::with_capacity(collection_segments.len());
        for depth in 1..=collection_segments.len() {
            if let Some(collection) = self.get_collection_from_paths(&collection_segments[..depth])? {
                ids.push(collection.id().to_string());
            }
        }
        Ok(ids)
    }

    /// Convert a chain of collection ids into their paths.
    ///
    /// Fails with [`NavigationError::CollectionIdNotFound`] on the first
    /// unknown id.
    pub fn convert_ids_to_paths<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<String>, NavigationError> {
        let collections = self.require_collections()?;
        let mut current: &[EntityCollection] = &collections;
        let mut paths = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            let collection = current
                .iter()
                .find(|collection| collection.id() == id)
                .ok_or_else(|| NavigationError::CollectionIdNotFound { id: id.to_string() })?;
            paths.push(collection.path.clone());
            current = &collection.subcollections;
        }
        Ok(paths)
    }

    /// Breadcrumbs for `path`, owned so they outlive the current snapshot.
    pub fn navigation_entries_for_path(
        &self,
        path: &str,
    ) -> Result<Vec<OwnedNavigationEntry>, NavigationError> {
        let collections = self.require_collections()?;
        let views = self.views().unwrap_or_default();
        Ok(get_navigation_entries_from_path(path, &collections, &views)
            .into_iter()
            .map(OwnedNavigationEntry::from)
            .collect())
    }

    // ------------------------------------------------------------------------
    // URLs
    // ------------------------------------------------------------------------

    /// See [`UrlBuilder::build_url_collection_path`].
    pub fn build_url_collection_path(&self, path: &str) -> String {
        self.urls.build_url_collection_path(path)
    }

    /// See [`UrlBuilder::build_cms_url_path`].
    pub fn build_cms_url_path(&self, path: &str) -> String {
        self.urls.build_cms_url_path(path)
    }

    /// See [`UrlBuilder::build_url_edit_collection_path`].
    pub fn build_url_edit_collection_path(&self, path: &str) -> String {
        self.urls.build_url_edit_collection_path(path)
    }

    /// See [`UrlBuilder::is_url_collection_path`].
    pub fn is_url_collection_path(&self, url: &str) -> bool {
        self.urls.is_url_collection_path(url)
    }

    /// See [`UrlBuilder::url_path_to_data_path`].
    pub fn url_path_to_data_path(&self, url: &str) -> Result<String, NavigationError> {
        self.urls.url_path_to_data_path(url)
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("urls", &self.urls)
            .field("generation", &self.generation.current())
            .field("state", &*self.read_state())
            .finish_non_exhaustive()
    }
}

fn walk_collections<S: AsRef<str>>(
    collections: &[EntityCollection],
    segments: &[S],
    matches: impl Fn(&EntityCollection, &str) -> bool,
) -> Option<EntityCollection> {
    let mut current = collections;
    let mut found = None;
    for segment in segments {
        let collection = current
            .iter()
            .find(|collection| matches(*collection, segment.as_ref()))?;
        current = &collection.subcollections;
        found = Some(collection);
    }
    found.cloned()
}

// ============================================================================
// OwnedNavigationEntry
// ============================================================================

/// A breadcrumb detached from the snapshot it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedNavigationEntry {
    /// A collection
    Collection {
        /// Collection id
        id: String,
        /// Full data path of the collection
        path: String,
        /// The collection
        collection: EntityCollection,
    },
    /// A document
    Entity {
        /// Document id
        entity_id: String,
        /// Path of the collection the document lives in
        path: String,
        /// Full data path of the document
        full_path: String,
        /// Collection owning the document
        parent_collection: EntityCollection,
    },
    /// A custom view of a document
    CustomView {
        /// Document id
        entity_id: String,
        /// Path of the collection the document lives in
        path: String,
        /// Full data path, view key included
        full_path: String,
        /// The view
        view: crate::collection::EntityCustomView,
    },
    /// A top-level view
    View {
        /// Path the view was matched on
        path: String,
        /// The view
        view: CmsView,
    },
}

impl From<NavigationEntry<'_>> for OwnedNavigationEntry {
    fn from(entry: NavigationEntry<'_>) -> Self {
        match entry {
            NavigationEntry::Collection {
                id,
                path,
                collection,
            } => OwnedNavigationEntry::Collection {
                id,
                path,
                collection: collection.clone(),
            },
            NavigationEntry::Entity {
                entity_id,
                path,
                full_path,
                parent_collection,
            } => OwnedNavigationEntry::Entity {
                entity_id,
                path,
                full_path,
                parent_collection: parent_collection.clone(),
            },
            NavigationEntry::CustomView {
                entity_id,
                path,
                full_path,
                view,
            } => OwnedNavigationEntry::CustomView {
                entity_id,
                path,
                full_path,
                view: view.clone(),
            },
            NavigationEntry::View { path, view } => OwnedNavigationEntry::View {
                path,
                view: view.clone(),
            },
        }
    }
}

impl OwnedNavigationEntry {
    /// Full data path of the entry.
    pub fn full_path(&self) -> &str {
        match self {
            OwnedNavigationEntry::Collection { path, .. }
            | OwnedNavigationEntry::View { path, .. } => path,
            OwnedNavigationEntry::Entity { full_path, .. }
            | OwnedNavigationEntry::CustomView { full_path, .. } => full_path,
        }
    }
}
