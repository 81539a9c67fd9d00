//! Debug-build diagnostics.
//!
//! Failures are reported through `tracing`, whose event metadata already
//! carries file, line and module path. Release builds stay silent.

macro_rules! diag {
    ($($arg:tt)+) => {
        if cfg!(debug_assertions) {
            ::tracing::warn!($($arg)+);
        }
    };
}
