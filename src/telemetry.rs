//! Opt-in `tracing` subscriber setup.
//!
//! Library code only emits events: `debug` when input is read with a
//! fallback (an untyped series, a container-less chart call) and `trace`
//! while emitting literals. Hosts that already own a subscriber never need
//! this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "highcharts_options=warn";

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `highcharts_options=debug`.
#[must_use]
pub fn init_tracing_with(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
