use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the stderr subscriber. `RUST_LOG`, when set and valid, takes
/// precedence over `level`.
pub fn init(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level).unwrap_or_else(|e| {
            eprintln!("Invalid log level '{}': {}. Falling back to 'info'", level, e);
            EnvFilter::new("info")
        })
    })
}
