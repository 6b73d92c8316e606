use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` applies. A directive
/// that fails to parse falls back to `upkeep=info`, and an already installed
/// subscriber is left in place.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("upkeep=info"));

    let _ = fmt().with_env_filter(filter).try_init();
}
