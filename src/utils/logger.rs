use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "hello=warn";
pub const VERBOSE_FILTER: &str = "hello=debug";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Picks the filter directives for a run. An explicit filter wins over `verbose`.
pub fn filter_directives(verbose: bool, explicit: Option<&str>) -> &str {
    match explicit {
        Some(directives) => directives,
        None if verbose => VERBOSE_FILTER,
        None => DEFAULT_FILTER,
    }
}

// Logs go to stderr so stdout carries nothing but the greeting.
// Filter and styling come from flags only; RUST_LOG and NO_COLOR are not consulted.
pub fn init_cli_logger(directives: &str, format: LogFormat) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}
