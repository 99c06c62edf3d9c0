//! Diagnostics initialization
//!
//! Sets up `tracing` output for the crate's own messages (file opened,
//! write failures, config loading). The engine log itself never goes
//! through here.

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::DiagnosticsConfig;
use crate::errors::{LoggerError, Result};
use crate::logger::LineFormat;

/// Install the global tracing subscriber, writing to stderr.
///
/// **Note**: call once, at startup, after the configuration is loaded.
///
/// # Returns
/// * `WorkerGuard` - keep it alive until exit so buffered diagnostics are
///   flushed
///
/// # Errors
/// * If the filter directive is invalid
/// * If a global subscriber was already installed
pub fn init_diagnostics(config: &DiagnosticsConfig) -> Result<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).map_err(|e| {
        LoggerError::config(format!(
            "Invalid diagnostics level '{}': {}",
            config.level, e
        ))
    })?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false);

    let installed = match config.format {
        LineFormat::Json => subscriber_builder.json().try_init(),
        LineFormat::Text => subscriber_builder.with_ansi(true).try_init(),
    };
    installed.map_err(|e| {
        LoggerError::config(format!("Failed to install diagnostics subscriber: {}", e))
    })?;

    Ok(guard)
}
