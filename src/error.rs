//! Error types for navigation resolution.
//!
//! The engine separates three kinds of failure:
//!
//! - **Configuration errors** such as a collection path with an even number
//!   of segments. These are returned synchronously to the direct caller.
//! - **Ordering errors**: asking the controller for a collection before the
//!   first resolution finished ([`NavigationError::NotInitialised`]).
//! - **Resolution failures**: a collection or view builder failed or timed
//!   out. The controller never returns these from a lookup; it stores them
//!   in its state so a UI can render a degraded view.
//!
//! "Not found" is not an error anywhere in this crate. Lookups return
//! `Ok(None)` when the tree is resolved but nothing matches.
//!
//! # Examples
//!
//! ```
//! use cms_navigator::error::NavigationError;
//!
//! let err = NavigationError::OddSegments { path: "products/pid".into() };
//! assert_eq!(
//!     err.to_string(),
//!     "Collection paths must have an odd number of segments: products/pid"
//! );
//! assert!(err.is_configuration_error());
//! ```

use std::time::Duration;
use thiserror::Error;

/// Error returned by builders supplied to a
/// [`CollectionSource`](crate::source::CollectionSource).
pub type BuildError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Detailed error variants raised by the navigation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A collection path had an even number of segments
    #[error("Collection paths must have an odd number of segments: {path}")]
    OddSegments { path: String },

    /// A lookup ran before the collection tree was resolved once
    #[error("Collections have not been initialised yet")]
    NotInitialised,

    /// A collection or view builder failed
    #[error("Navigation resolution failed: {message}")]
    ResolutionFailed { message: String },

    /// A resolution pass exceeded the configured timeout
    #[error("Navigation resolution timed out after {after:?}")]
    ResolutionTimeout { after: Duration },

    /// A URL did not start with the collection prefix
    #[error("Expected path starting with {expected_prefix}, got {path}")]
    UnexpectedUrl {
        expected_prefix: String,
        path: String,
    },

    /// An id chain referenced a collection that does not exist
    #[error("Collection with id {id} not found")]
    CollectionIdNotFound { id: String },
}

impl NavigationError {
    /// Build a [`NavigationError::ResolutionFailed`] from a builder error.
    pub fn resolution_failed(err: &(dyn std::error::Error + Send + Sync)) -> Self {
        NavigationError::ResolutionFailed {
            message: err.to_string(),
        }
    }

    /// Whether this error stems from malformed input rather than runtime state.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            NavigationError::OddSegments { .. } | NavigationError::UnexpectedUrl { .. }
        )
    }

    /// Whether this error was produced by an async resolution pass.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            NavigationError::ResolutionFailed { .. } | NavigationError::ResolutionTimeout { .. }
        )
    }
}

impl From<BuildError> for NavigationError {
    fn from(err: BuildError) -> Self {
        NavigationError::resolution_failed(err.as_ref())
    }
}

// ============================================================================
// Tests
// ============================================================================
