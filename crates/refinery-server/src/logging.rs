use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default
/// `info` filter, e.g. `RUST_LOG=api=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}
