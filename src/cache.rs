//! Collection lookup caching.
//!
//! This module provides [`CollectionCache`], an LRU cache that avoids walking
//! the collection tree again for paths that were already resolved. It is
//! gated behind the `cache` feature flag and uses the [`lru`] crate
//! internally.
//!
//! Keys are cleaned paths (`"/products/pid/locales/"` and
//! `"products/pid/locales"` share an entry). Values are the base collection
//! found for that path, or `None` when nothing matched, so negative lookups
//! are memoised too. User overrides are never cached: they are merged on top
//! of the cached base on every lookup.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations so you can monitor
//! cache effectiveness at runtime.
//!
//! # Examples
//!
//! ```
//! use cms_navigator::cache::CollectionCache;
//! use cms_navigator::EntityCollection;
//!
//! let mut cache = CollectionCache::new();
//! cache.insert("products", Some(EntityCollection::new("products", "Products")));
//!
//! assert_eq!(cache.get("/products/").unwrap().unwrap().name, "Products");
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::collection::EntityCollection;
use crate::paths::remove_initial_and_trailing_slashes;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: usize,
    /// Number of lookups that had to walk the tree.
    pub misses: usize,
    /// Number of full cache invalidations (via [`CollectionCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of resolved base collections, keyed by cleaned path.
///
/// Default capacity is 256 entries. The controller clears it whenever the
/// resolved collections change or one of its inputs is replaced.
#[derive(Debug)]
pub struct CollectionCache {
    entries: LruCache<String, Option<EntityCollection>>,
    stats: CacheStats,
}

impl CollectionCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Drop every entry and increment the invalidation counter.
    pub fn clear(&mut self) {
        let len = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Collection cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Look up the cached result for `path`.
    ///
    /// The outer `None` is a cache miss; `Some(None)` is a memoised
    /// "no collection at this path". Updates hit/miss stats.
    pub fn get(&mut self, path: &str) -> Option<Option<EntityCollection>> {
        let key = remove_initial_and_trailing_slashes(path);
        if let Some(entry) = self.entries.get(key) {
            self.stats.hits += 1;
            trace_log!("Collection cache hit for '{}'", key);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Collection cache miss for '{}'", key);
            None
        }
    }

    /// Store the lookup result for `path`.
    pub fn insert(&mut self, path: &str, collection: Option<EntityCollection>) {
        let key = remove_initial_and_trailing_slashes(path).to_string();
        trace_log!(
            "Caching '{}' -> {:?}",
            key,
            collection.as_ref().map(|c| c.path.as_str())
        );
        self.entries.push(key, collection);
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CollectionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_creation() {
        let cache = CollectionCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cache_miss() {
        let mut cache = CollectionCache::new();
        assert!(cache.get("products").is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_negative_lookup_is_cached() {
        let mut cache = CollectionCache::new();
        cache.insert("nothing/here/at_all", None);
        assert_eq!(cache.get("nothing/here/at_all"), Some(None));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = CollectionCache::new();
        cache.insert("products", Some(EntityCollection::new("products", "Products")));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = CollectionCache::with_capacity(2);
        cache.insert("a", None);
        cache.insert("b", None);
        cache.get("a");
        cache.insert("c", None);

        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_none());
        assert!(cache.get("a").is_some());
    }

    #[test]
    fn test_hit_rate_calculation() {
        let mut cache = CollectionCache::new();
        cache.get("a");
        cache.get("b");
        cache.get("c");

        cache.insert("a", None);
        cache.insert("b", None);

        cache.get("a");
        cache.get("b");

        assert_eq!(cache.stats().hits, 2);
        assert_eq!(cache.stats().misses, 3);
        assert!((cache.stats().hit_rate() - 0.4).abs() < 0.001);
    }
}
