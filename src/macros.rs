//! Internal macro definitions.

/// Emit a `trace`-level event describing an engine state transition.
///
/// Compiles to nothing unless the `tracing` feature is enabled, so the
/// arguments must not have side effects.
macro_rules! trace_step {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)+);
        }
    };
}
