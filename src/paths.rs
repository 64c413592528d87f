//! Path utilities for collection paths and URLs.
//!
//! Collection paths alternate collection segments and document ids:
//!
//! ```text
//! products                     collection
//! products/pid                 document      (even: not a collection path)
//! products/pid/locales         subcollection
//! products/pid/locales/es      document
//! ```
//!
//! Every function here is pure. Cleaning only ever strips leading and
//! trailing slashes; interior slashes are preserved as-is.

use crate::error::NavigationError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Characters escaped by [`encode_path`].
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped. `/` and `#`
/// are kept literal as well: both are structural in CMS URLs.
const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'/')
    .remove(b'#');

/// Separator used by [`strip_collection_path`].
pub const STRIPPED_PATH_SEPARATOR: &str = "::";

/// Strip leading and trailing slashes from a path.
///
/// Interior slashes are untouched and the operation is idempotent.
///
/// # Examples
///
/// ```
/// use cms_navigator::paths::remove_initial_and_trailing_slashes;
///
/// assert_eq!(remove_initial_and_trailing_slashes("/products/"), "products");
/// assert_eq!(remove_initial_and_trailing_slashes("//a//b//"), "a//b");
/// assert_eq!(remove_initial_and_trailing_slashes(""), "");
/// ```
#[inline]
pub fn remove_initial_and_trailing_slashes(path: &str) -> &str {
    path.trim_start_matches('/').trim_end_matches('/')
}

/// Split a cleaned path into its segments.
///
/// An empty (or all-slash) path has no segments.
pub fn split_segments(path: &str) -> Vec<&str> {
    let cleaned = remove_initial_and_trailing_slashes(path);
    if cleaned.is_empty() {
        Vec::new()
    } else {
        cleaned.split('/').collect()
    }
}

/// Fail unless `path` has an odd number of segments.
///
/// The error carries `path` exactly as given so callers can see what they
/// passed in.
pub fn ensure_collection_path(path: &str) -> Result<(), NavigationError> {
    if split_segments(path).len() % 2 == 0 {
        return Err(NavigationError::OddSegments {
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Candidate collection prefixes of a segment list, longest first.
///
/// A collection prefix never ends on a document id, so candidates shrink by
/// two segments at a time. With an even number of segments the trailing
/// document id is dropped before generating candidates.
///
/// # Examples
///
/// ```
/// use cms_navigator::paths::collection_path_combinations;
///
/// assert_eq!(
///     collection_path_combinations(&["sites", "es", "products", "pid", "locales"]),
///     vec!["sites/es/products/pid/locales", "sites/es/products", "sites"]
/// );
/// assert_eq!(collection_path_combinations(&["locales", "yep"]), vec!["locales"]);
/// ```
pub fn collection_path_combinations(segments: &[&str]) -> Vec<String> {
    let top = if segments.len() % 2 == 0 {
        segments.len().saturating_sub(1)
    } else {
        segments.len()
    };

    (1..=top)
        .rev()
        .step_by(2)
        .map(|len| segments[..len].join("/"))
        .collect()
}

/// Percent-encode a path for use in a URL.
///
/// The path is cleaned first, then every character outside
/// `PATH_ENCODE_SET`'s unreserved list is percent-escaped. `/` and `#` stay
/// literal.
///
/// # Examples
///
/// ```
/// use cms_navigator::paths::encode_path;
///
/// assert_eq!(encode_path("/products/my item/"), "products/my%20item");
/// assert_eq!(encode_path("notes/a#b"), "notes/a#b");
/// assert_eq!(encode_path("q/a?b=c&d"), "q/a%3Fb%3Dc%26d");
/// ```
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(remove_initial_and_trailing_slashes(path), PATH_ENCODE_SET).to_string()
}

/// Reverse [`encode_path`].
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// Keep only the collection segments of a path, joined with `::`.
///
/// Role permission tables are keyed by this form so they apply to every
/// document of a collection.
///
/// # Examples
///
/// ```
/// use cms_navigator::paths::strip_collection_path;
///
/// assert_eq!(strip_collection_path("products/B44RG6APH/locales"), "products::locales");
/// assert_eq!(strip_collection_path("products"), "products");
/// ```
pub fn strip_collection_path(path: &str) -> String {
    split_segments(path)
        .into_iter()
        .step_by(2)
        .collect::<Vec<_>>()
        .join(STRIPPED_PATH_SEPARATOR)
}

/// Key identifying a side panel for a collection or one of its entities.
pub fn side_panel_key(path: &str, entity_id: Option<&str>) -> String {
    let path = remove_initial_and_trailing_slashes(path);
    match entity_id {
        Some(id) => format!("{}/{}", path, remove_initial_and_trailing_slashes(id)),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_slashes_is_idempotent() {
        let once = remove_initial_and_trailing_slashes("///products/pid///");
        assert_eq!(once, "products/pid");
        assert_eq!(remove_initial_and_trailing_slashes(once), once);
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("/products/pid/"), vec!["products", "pid"]);
        assert_eq!(split_segments("/"), Vec::<&str>::new());
        assert_eq!(split_segments(""), Vec::<&str>::new());
    }

    #[test]
    fn test_ensure_collection_path() {
        assert!(ensure_collection_path("products").is_ok());
        assert!(ensure_collection_path("products/pid/locales").is_ok());
        assert_eq!(
            ensure_collection_path("products/pid"),
            Err(NavigationError::OddSegments {
                path: "products/pid".to_string()
            })
        );
        assert!(ensure_collection_path("").is_err());
    }

    #[test]
    fn test_combinations_single_segment() {
        assert_eq!(collection_path_combinations(&["products"]), vec!["products"]);
        assert!(collection_path_combinations(&[]).is_empty());
    }

    #[test]
    fn test_encode_keeps_unreserved_marks() {
        assert_eq!(encode_path("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_path("ñandú"), "%C3%B1and%C3%BA");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let encoded = encode_path("products/my item?x");
        assert_eq!(decode_path(&encoded), "products/my item?x");
    }

    #[test]
    fn test_side_panel_key() {
        assert_eq!(side_panel_key("/products/", None), "products");
        assert_eq!(side_panel_key("products", Some("/pid")), "products/pid");
    }
}
