//! Unit tests module
//!
//! Contains unit tests for individual functions and components.

#[cfg(feature = "cache")]
mod cache;
mod navigation;
mod overrides;
mod paths;
mod permissions;
// resolve tests are in tests/resolve_tests.rs (separate compilation unit)
