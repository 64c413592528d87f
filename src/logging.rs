//! Logging abstraction layer.
//!
//! The navigation engine never talks to a logging crate directly. Every log
//! line goes through one of the macros below, which expand to either the
//! [`log`](https://docs.rs/log) or [`tracing`](https://docs.rs/tracing)
//! macro depending on the enabled feature. Enable at most one of the two.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature enabled the macros expand to nothing, so a consumer
//! that wants a silent engine can build with `default-features = false`.
//!
//! # Levels used by the crate
//!
//! - `trace_log!`: per-node permission decisions, cache hits and misses.
//! - `debug_log!`: skipped or superseded refreshes, unchanged snapshots.
//! - `info_log!`: committed resolutions.
//! - `warn_log!`: recoverable oddities in the collection tree.
//! - `error_log!`: failed builders and resolution timeouts.
//!
//! ```ignore
//! use cms_navigator::{debug_log, error_log};
//!
//! debug_log!("Refresh {} superseded, dropping result", generation);
//! error_log!("Navigation resolution failed: {}", err);
//! ```

/// Target every log line of the crate is emitted under.
///
/// Filter on it with `RUST_LOG=cms_navigator=debug` (or the `tracing`
/// equivalent).
pub const LOG_TARGET: &str = "cms_navigator";

#[doc(hidden)]
#[macro_export]
macro_rules! __navigator_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!(target: $crate::logging::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Emit a **trace**-level log message.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__navigator_log!(trace, $($arg)*) };
}

/// Emit a **debug**-level log message.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__navigator_log!(debug, $($arg)*) };
}

/// Emit an **info**-level log message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__navigator_log!(info, $($arg)*) };
}

/// Emit a **warn**-level log message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__navigator_log!(warn, $($arg)*) };
}

/// Emit an **error**-level log message.
///
/// Used at the controller boundary where a failed resolution is turned into
/// observable state instead of being propagated.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => { $crate::__navigator_log!(error, $($arg)*) };
}
