//! Unified logging macro for the planner.
//!
//! Provides one logging interface that routes to `log::` or `defmt::` based
//! on the active feature flags, and compiles to nothing when neither backend
//! is enabled.
//!
//! # Usage
//!
//! ```rust,ignore
//! use knx_planner::plan_log;
//!
//! plan_log!(debug, "pattern analyzed: main={}", main);
//! plan_log!(warn, "capacity exceeded: {}/{}", used, total);
//! ```
//!
//! # Feature Flags
//!
//! - `log` - Uses the `log::` crate (std hosts)
//! - `defmt` - Uses `defmt::` (embedded targets)
//! - neither - No-op

/// Unified logging macro - selects log::, defmt:: or nothing based on features
#[macro_export]
#[cfg(feature = "log")]
macro_rules! plan_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(not(feature = "log"), feature = "defmt"))]
macro_rules! plan_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(not(feature = "log"), not(feature = "defmt")))]
macro_rules! plan_log {
    ($level:ident, $($arg:tt)*) => {{
        let _ = || ($($arg)*);
    }};
}
