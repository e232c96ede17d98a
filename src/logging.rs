use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter (e.g. `AAC_LOG=debug`)
pub const LOG_ENV: &str = "AAC_LOG";

/// Pick the log filter: `--verbose` wins, then `AAC_LOG`, then the
/// configured default level.
pub fn filter_for(default_level: &str, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber, writing human-readable events to stderr.
/// Calling it twice is harmless; the first subscriber stays.
pub fn init(default_level: &str, verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = tracing_subscriber::registry()
        .with(filter_for(default_level, verbose))
        .with(fmt_layer)
        .try_init();
}
