//! Telemetry helpers for the report binary and embedding applications.
//!
//! Library code only emits `tracing` events. Hosts either call
//! `init_default_tracing` or install their own subscriber.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `default_directive` is used when `RUST_LOG` is unset or invalid.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed.
#[must_use]
pub fn init_default_tracing(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}
