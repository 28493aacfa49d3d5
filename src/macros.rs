//! Logging shims that compile away without the `tracing` feature.

/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// The first token names the level (`trace`, `debug`, `info`, ...), the rest
/// is forwarded to the matching `tracing` macro.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}

/// Enters a `debug` span for the rest of the enclosing block when the
/// `tracing` feature is enabled.
macro_rules! log_span {
    ($name:expr, $($field:tt)*) => {
        #[cfg(feature = "tracing")]
        let _span_guard = ::tracing::debug_span!($name, $($field)*).entered();
    };
}
