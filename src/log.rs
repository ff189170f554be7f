// src/log.rs
//! Logging shorthands.
//!
//! The library never installs a subscriber; it only emits `tracing` events under the
//! `laundry_scrape` target. Whoever embeds the crate decides where they go.

/// Target used for every event the crate emits.
pub const TARGET: &str = "laundry_scrape";

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!(target: $crate::log::TARGET, $($arg)*)
    };
}
