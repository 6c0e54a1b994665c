//! Opt-in tracing setup for hosts embedding `arva-charts`.
//!
//! Builders, the chart boundary and the schedulers emit `tracing` events
//! regardless of this module; it only installs a subscriber for hosts that
//! have none.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "arva_charts=info";

/// Installs a compact subscriber filtered by `RUST_LOG`, or [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"arva_charts=debug"` to see every built frame.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
