//! Logging initialization for the CLI.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Installs the global subscriber. Verbose mode enables debug output for
/// this crate's target; otherwise logging stays off unless RUST_LOG says
/// different.
pub fn init_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    let app_filter = Targets::new().with_target("atelier", level_filter);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_filter.to_string()));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(app_filter)
        .with(env_filter)
        .init();
}
