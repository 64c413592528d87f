//! Path utility tests
//!
//! Covers cleaning, segment parity, candidate prefixes and encoding.

use cms_navigator::paths::*;
use cms_navigator::NavigationError;

#[test]
fn test_remove_initial_and_trailing_slashes() {
    assert_eq!(remove_initial_and_trailing_slashes("/products/"), "products");
    assert_eq!(remove_initial_and_trailing_slashes("//a/b//"), "a/b");
    assert_eq!(remove_initial_and_trailing_slashes("/"), "");
    assert_eq!(remove_initial_and_trailing_slashes(""), "");
}

#[test]
fn test_split_segments() {
    assert_eq!(split_segments("/products/pid/"), vec!["products", "pid"]);
    assert!(split_segments("///").is_empty());
}

#[test]
fn test_ensure_collection_path() {
    assert!(ensure_collection_path("products").is_ok());
    assert!(ensure_collection_path("/sites/es/products/").is_ok());
    assert_eq!(
        ensure_collection_path("/products/pid"),
        Err(NavigationError::OddSegments {
            path: "/products/pid".to_string()
        })
    );
}

#[test]
fn test_collection_path_combinations() {
    assert_eq!(
        collection_path_combinations(&["products", "pid", "locales"]),
        vec!["products/pid/locales", "products"]
    );
    assert_eq!(
        collection_path_combinations(&["products", "pid", "locales", "es"]),
        vec!["products/pid/locales", "products"]
    );
    assert!(collection_path_combinations(&[]).is_empty());
}

#[test]
fn test_encode_decode() {
    for path in ["products/my item", "notes/a#b", "é/ü", "q/a?b=c&d"] {
        let encoded = encode_path(path);
        assert!(!encoded.contains(' '));
        assert_eq!(decode_path(&encoded), path);
    }
}

#[test]
fn test_strip_collection_path() {
    assert_eq!(
        strip_collection_path("sites/es/products/pid/locales"),
        "sites::products::locales"
    );
    assert_eq!(strip_collection_path("/products/"), "products");
}

#[test]
fn test_side_panel_key() {
    assert_eq!(side_panel_key("/products/", None), "products");
    assert_eq!(side_panel_key("products", Some("/pid/")), "products/pid");
}
