use clap::ValueEnum;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// How diagnostics are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per event, fields flattened.
    Json,
}

/// Initialize the logging system with environment-based filtering
///
/// - `RUST_LOG` controls the filter (defaults to "info" if not set)
/// - Logs go to stderr so stdout stays clean for report output
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
    }
}
