//! Tests for collection path resolution and breadcrumbs
//!
//! Standalone test crate exercising the pure resolver functions against the
//! shared shop configuration.

mod common;

use cms_navigator::paths::{decode_path, encode_path};
use cms_navigator::resolve::*;
use cms_navigator::NavigationError;
use common::{site_collections, site_views};

// ---- get_collection_view_from_path tests ----

#[test]
fn test_top_level_collection_matches() {
    let collections = site_collections();
    let found = get_collection_view_from_path("products", &collections)
        .unwrap()
        .unwrap();
    assert_eq!(found.relative_path, "products");
    assert_eq!(found.collection.name, "Products");
}

#[test]
fn test_subcollection_relative_path_is_suffix() {
    let collections = site_collections();
    let found = get_collection_view_from_path("products/pid/locales", &collections)
        .unwrap()
        .unwrap();
    assert_eq!(found.relative_path, "locales");
    assert_eq!(found.collection.name, "Locales");
}

#[test]
fn test_multi_segment_collection_path() {
    let collections = site_collections();

    let found = get_collection_view_from_path("sites/es/products", &collections)
        .unwrap()
        .unwrap();
    assert_eq!(found.relative_path, "sites/es/products");

    let nested = get_collection_view_from_path("sites/es/products/pid/locales", &collections)
        .unwrap()
        .unwrap();
    assert_eq!(nested.relative_path, "locales");
    assert_eq!(nested.collection.name, "Spanish locales");
}

#[test]
fn test_longest_prefix_wins() {
    let collections = site_collections();
    let found = get_collection_view_from_path("products/id/subcollection_inline", &collections)
        .unwrap()
        .unwrap();
    assert_eq!(found.relative_path, "products/id/subcollection_inline");
    assert_eq!(found.collection.name, "Inline subcollection");
}

#[test]
fn test_even_segments_fail_with_exact_path() {
    let collections = site_collections();
    for path in ["products/pid", "sites/es", "products/pid/locales/es"] {
        let err = get_collection_view_from_path(path, &collections).unwrap_err();
        assert_eq!(
            err,
            NavigationError::OddSegments {
                path: path.to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            format!("Collection paths must have an odd number of segments: {}", path)
        );
    }
}

#[test]
fn test_empty_tree_never_errors() {
    for path in ["products", "products/pid", "", "a/b/c/d"] {
        assert_eq!(get_collection_view_from_path(path, &[]).unwrap(), None);
    }
}

#[test]
fn test_unknown_collection_is_none() {
    let collections = site_collections();
    assert!(get_collection_view_from_path("orders", &collections)
        .unwrap()
        .is_none());
}

#[test]
fn test_alias_lookup() {
    let collections = site_collections();
    let found = get_collection_view_from_path("items/pid/locales", &collections)
        .unwrap()
        .unwrap();
    assert_eq!(found.relative_path, "locales");
}

// ---- get_navigation_entries_from_path tests ----

#[test]
fn test_custom_view_breadcrumbs() {
    let collections = site_collections();
    let crumbs = get_navigation_entries_from_path("products/pid/custom_view", &collections, &[]);

    assert_eq!(crumbs.len(), 3);
    assert!(matches!(crumbs.at_depth(0), Some(NavigationEntry::Collection { path, .. }) if path == "items"));
    assert!(matches!(crumbs.at_depth(1), Some(NavigationEntry::Entity { entity_id, .. }) if entity_id == "pid"));
    match crumbs.leaf() {
        Some(NavigationEntry::CustomView { view, full_path, .. }) => {
            assert_eq!(view.key, "custom_view");
            assert_eq!(full_path, "items/pid/custom_view");
        }
        other => panic!("expected custom view, got {:?}", other),
    }
}

#[test]
fn test_nested_document_breadcrumbs() {
    let collections = site_collections();
    let crumbs = get_navigation_entries_from_path("products/pid/locales/yep", &collections, &[]);

    assert_eq!(crumbs.len(), 4);
    let paths: Vec<_> = crumbs.entries().iter().map(|e| e.full_path()).collect();
    assert_eq!(
        paths,
        vec![
            "items",
            "items/pid",
            "items/pid/locales",
            "items/pid/locales/yep"
        ]
    );
}

#[test]
fn test_breadcrumbs_use_collection_alias() {
    let collections = site_collections();
    let by_alias = get_navigation_entries_from_path("items/pid", &collections, &[]);
    let by_path = get_navigation_entries_from_path("products/pid", &collections, &[]);

    let alias_paths: Vec<_> = by_alias.entries().iter().map(|e| e.full_path()).collect();
    let path_paths: Vec<_> = by_path.entries().iter().map(|e| e.full_path()).collect();
    assert_eq!(alias_paths, vec!["items", "items/pid"]);
    assert_eq!(path_paths, alias_paths);
}

#[test]
fn test_custom_view_must_match_whole_remainder() {
    let collections = site_collections();
    let crumbs = get_navigation_entries_from_path("products/pid/custom_view/extra/more", &collections, &[]);

    assert_eq!(crumbs.len(), 2);
    assert!(!crumbs
        .entries()
        .iter()
        .any(|e| matches!(e, NavigationEntry::CustomView { .. })));
}

#[test]
fn test_document_breadcrumbs() {
    let collections = site_collections();
    let crumbs = get_navigation_entries_from_path("sites/es/products/pid", &collections, &[]);

    assert_eq!(crumbs.len(), 2);
    assert!(matches!(crumbs.at_depth(0), Some(NavigationEntry::Collection { path, .. }) if path == "sites/es/products"));
    assert_eq!(
        crumbs.entity_references(),
        vec![EntityReference::new("pid", "sites/es/products")]
    );
}

#[test]
fn test_view_breadcrumbs_when_no_collection_matches() {
    let collections = site_collections();
    let views = site_views();
    let crumbs = get_navigation_entries_from_path("/home/", &collections, &views);

    assert_eq!(crumbs.len(), 1);
    match crumbs.leaf() {
        Some(NavigationEntry::View { view, .. }) => assert_eq!(view.name, "Dashboard"),
        other => panic!("expected view, got {:?}", other),
    }
}

#[test]
fn test_unknown_path_has_no_breadcrumbs() {
    let collections = site_collections();
    let views = site_views();
    assert!(get_navigation_entries_from_path("nowhere/x", &collections, &views).is_empty());
}

// ---- path encoding ----

#[test]
fn test_encode_keeps_slash_and_hash() {
    let encoded = encode_path("notes/a#b/c d?e");
    assert_eq!(encoded, "notes/a#b/c%20d%3Fe");
    assert_eq!(decode_path(&encoded), "notes/a#b/c d?e");
}

#[test]
fn test_encode_escapes_reserved_characters() {
    assert_eq!(encode_path("a&b=c+d"), "a%26b%3Dc%2Bd");
    assert_eq!(encode_path("keep-_.!~*'()"), "keep-_.!~*'()");
}
