//! Telemetry helpers for hosts embedding `plot-viewport`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! `init_default_tracing` or install their own `tracing` subscriber
//! and filters before feeding input events.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Without a `RUST_LOG` override, only this crate's gesture diagnostics are
/// emitted, at `debug` level. Timestamps are omitted since gesture traces are
/// read inline against the host's own event log.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plot_viewport=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
