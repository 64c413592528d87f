//! Unit tests for the collection lookup cache
//!
//! Verifies insertion, eviction, hit/miss accounting and invalidation.

use cms_navigator::cache::CollectionCache;
use cms_navigator::EntityCollection;

#[test]
fn test_cache_insertion() {
    let mut cache = CollectionCache::with_capacity(4);
    cache.insert("products", Some(EntityCollection::new("products", "Products")));
    cache.insert("products/pid/locales", None);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("products").unwrap().unwrap().path, "products");
    assert_eq!(cache.get("products/pid/locales"), Some(None));
}

#[test]
fn test_cache_eviction() {
    let mut cache = CollectionCache::with_capacity(2);
    cache.insert("a", None);
    cache.insert("b", None);
    cache.insert("c", None);

    assert_eq!(cache.len(), 2);
    assert!(cache.get("a").is_none());
    assert!(cache.get("c").is_some());
}

#[test]
fn test_cache_keys_are_cleaned() {
    let mut cache = CollectionCache::new();
    cache.insert("/products/", None);
    assert!(cache.get("products").is_some());
    assert!(cache.get("products/").is_some());
}

#[test]
fn test_zero_capacity_is_usable() {
    let mut cache = CollectionCache::with_capacity(0);
    cache.insert("a", None);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_clear_and_reset_stats() {
    let mut cache = CollectionCache::new();
    cache.insert("a", None);
    cache.get("a");
    cache.get("b");
    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().invalidations, 1);

    cache.reset_stats();
    assert_eq!(cache.stats().invalidations, 0);
    assert!(cache.stats().hit_rate().abs() < f64::EPSILON);
}
