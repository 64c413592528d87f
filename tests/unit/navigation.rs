//! URL building and top-level navigation tests

use crate::common::{site_collections, site_views};
use cms_navigator::navigation::*;
use cms_navigator::{CmsView, EntityCollection};

#[test]
fn test_builders_are_deterministic() {
    let urls = UrlBuilder::new("/cms", "/c");
    let first = urls.build_url_collection_path("products/pid");
    let second = urls.build_url_collection_path("/products/pid/");
    assert_eq!(first, second);
    assert_eq!(first, "/cms/c/products/pid");
}

#[test]
fn test_empty_base_path() {
    let urls = UrlBuilder::new("", "collections");
    assert_eq!(urls.home_url(), "/");
    assert_eq!(urls.full_collection_path(), "/collections");
    assert_eq!(
        urls.url_path_to_data_path("/collections/products").unwrap(),
        "products"
    );
}

#[test]
fn test_prefix_must_end_on_segment_boundary() {
    let urls = UrlBuilder::default();
    assert!(urls.url_path_to_data_path("/c/products").is_ok());
    assert!(urls.url_path_to_data_path("/catalog/products").is_err());
}

#[test]
fn test_top_navigation_of_site() {
    let result = compute_top_navigation(&site_collections(), &site_views(), &UrlBuilder::default());

    let names: Vec<_> = result
        .navigation_entries
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Products", "Spanish products", "Users", "Dashboard"]);
    assert_eq!(result.entries_in_group("Catalog").count(), 2);
    assert_eq!(result.ungrouped().count(), 1);

    match &result.navigation_entries[0].target {
        TopNavigationTarget::Collection { path, collection } => {
            assert_eq!(path, "items");
            assert_eq!(collection.path, "products");
        }
        other => panic!("expected collection, got {:?}", other),
    }
}

#[test]
fn test_whitespace_is_trimmed() {
    let collections = vec![EntityCollection::new("products", "  Products ")
        .description(" Everything we sell ")
        .group(" Catalog ")];
    let views = vec![CmsView::new("stats", "Stats").group("")];
    let result = compute_top_navigation(&collections, &views, &UrlBuilder::default());

    let entry = &result.navigation_entries[0];
    assert_eq!(entry.name, "Products");
    assert_eq!(entry.description.as_deref(), Some("Everything we sell"));
    assert_eq!(entry.group.as_deref(), Some("Catalog"));
    assert_eq!(result.groups, vec!["Catalog"]);
}
