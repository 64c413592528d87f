//! Static or deferred sources of collections and views.
//!
//! Applications declare their collections (and views) either as a plain list
//! or as an async builder that receives the current user and the data source.
//! Both variants sit behind [`CollectionSource`] and resolve through one call,
//! [`CollectionSource::resolve`].
//!
//! ```
//! use cms_navigator::source::CollectionSource;
//! use cms_navigator::{EntityCollection, Permissions};
//!
//! let fixed = CollectionSource::from(vec![EntityCollection::new("products", "Products")]);
//!
//! let per_user: CollectionSource<EntityCollection> = CollectionSource::builder(|props| async move {
//!     let mut collections = vec![EntityCollection::new("products", "Products")];
//!     if props.user.is_some() {
//!         collections.push(EntityCollection::new("orders", "Orders").permissions(Permissions::read_only()));
//!     }
//!     Ok::<_, std::convert::Infallible>(collections)
//! });
//! # let _ = (fixed, per_user);
//! ```

use crate::auth::{AuthController, DataSourceDelegate, User};
use crate::collection::{CmsView, EntityCollection};
use crate::error::BuildError;
use futures::future::{self, BoxFuture, FutureExt, TryFutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Arguments handed to a collection or view builder.
#[derive(Clone)]
pub struct BuilderProps {
    /// Signed-in user at the time of resolution
    pub user: Option<User>,
    /// Auth controller the user came from
    pub auth: Arc<dyn AuthController>,
    /// Backend handle, passed through untouched
    pub data_source: Arc<dyn DataSourceDelegate>,
}

impl fmt::Debug for BuilderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderProps")
            .field("user", &self.user.as_ref().map(|u| &u.uid))
            .field("data_source", &self.data_source.key())
            .finish()
    }
}

/// Async function producing a list of `T` for the current user.
pub type SourceBuilder<T> =
    Arc<dyn Fn(BuilderProps) -> BoxFuture<'static, Result<Vec<T>, BuildError>> + Send + Sync>;

/// Where a list of collections or views comes from.
pub enum CollectionSource<T> {
    /// A fixed list
    Static(Vec<T>),
    /// A list built per resolution pass
    Builder(SourceBuilder<T>),
}

/// Source of top-level collections.
pub type CollectionsSource = CollectionSource<EntityCollection>;

/// Source of top-level views.
pub type ViewsSource = CollectionSource<CmsView>;

impl<T> CollectionSource<T>
where
    T: Clone + Send + 'static,
{
    /// Wrap an async closure as a builder source.
    ///
    /// Any error type convertible into [`BuildError`] may be returned.
    pub fn builder<F, Fut, E>(f: F) -> Self
    where
        F: Fn(BuilderProps) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, E>> + Send + 'static,
        E: Into<BuildError> + 'static,
    {
        let builder: SourceBuilder<T> = Arc::new(move |props: BuilderProps| {
            f(props).map_err(Into::<BuildError>::into).boxed()
        });
        CollectionSource::Builder(builder)
    }

    /// An empty static source.
    pub fn empty() -> Self {
        CollectionSource::Static(Vec::new())
    }

    /// Whether this source needs a builder call to resolve.
    pub fn is_deferred(&self) -> bool {
        matches!(self, CollectionSource::Builder(_))
    }

    /// Resolve the source into a list.
    ///
    /// The returned future owns everything it needs, so several sources can
    /// be resolved concurrently without holding a borrow on the source.
    pub fn resolve(&self, props: BuilderProps) -> BoxFuture<'static, Result<Vec<T>, BuildError>> {
        match self {
            CollectionSource::Static(items) => future::ready(Ok(items.clone())).boxed(),
            CollectionSource::Builder(builder) => builder(props),
        }
    }
}

impl<T> Clone for CollectionSource<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            CollectionSource::Static(items) => CollectionSource::Static(items.clone()),
            CollectionSource::Builder(builder) => CollectionSource::Builder(Arc::clone(builder)),
        }
    }
}

impl<T> Default for CollectionSource<T> {
    fn default() -> Self {
        CollectionSource::Static(Vec::new())
    }
}

impl<T> From<Vec<T>> for CollectionSource<T> {
    fn from(items: Vec<T>) -> Self {
        CollectionSource::Static(items)
    }
}

impl<T> fmt::Debug for CollectionSource<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionSource::Static(items) => f.debug_tuple("Static").field(items).finish(),
            CollectionSource::Builder(_) => f.write_str("Builder(<fn>)"),
        }
    }
}
