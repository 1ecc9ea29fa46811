#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled the macros below are the `tracing`
//! macros. Without it they expand to nothing, so call sites inside the crate
//! can always write `crate::debug!(...)`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
