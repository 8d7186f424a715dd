//! Telemetry helpers for applications embedding `graph-range-slider`.
//!
//! The slider only emits `tracing` events; installing a subscriber is left
//! to the host. `init_default_tracing` is a convenience for demos and tests.

/// Filter used when `RUST_LOG` is unset: slider events at `info`, everything
/// else at `warn`.
pub const DEFAULT_TRACING_FILTER: &str = "warn,graph_range_slider=info";

/// Installs a compact subscriber scoped to this crate's events.
///
/// The filter is read from `RUST_LOG` and falls back to
/// [`DEFAULT_TRACING_FILTER`]. Returns `false` when the `telemetry` feature
/// is disabled or a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter.
#[must_use]
pub fn init_tracing_with_fallback(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{init_default_tracing, init_tracing_with_fallback};

    #[test]
    fn second_install_reports_existing_subscriber() {
        let first = init_default_tracing();
        assert_eq!(first, cfg!(feature = "telemetry"));
        assert!(!init_tracing_with_fallback("debug"));
    }
}
