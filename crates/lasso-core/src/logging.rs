#![forbid(unsafe_code)]

//! Structured logging glue.
//!
//! With the `tracing` feature the tracker emits `debug` events for gesture
//! transitions and `trace` events for ignored or per-move input. Without it,
//! nothing is compiled in.
//!
//! The `tracing-json` feature adds [`init_json_subscriber`] for hosts that
//! want newline-delimited JSON logs filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber honoring `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
