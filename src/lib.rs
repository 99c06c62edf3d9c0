//! Source3 Logger - severity-filtered file logging for the Source3 engine
//!
//! A [`Logger`] writes one line per accepted entry to a single log file.
//! Entries whose priority is below the configured threshold are dropped.
//!
//! # Features
//! - **cli**: the `s3log` command-line tool (default)
//!
//! # Architecture
//! - `logger`: priorities, entry rendering, the file logger and sinks
//! - `config`: TOML + environment configuration
//! - `errors`: error type shared by everything above
//! - `interfaces`, `system`: CLI commands and process setup (feature `cli`)
//!
//! ```no_run
//! use source3_logger::{Logger, Priority};
//!
//! let mut logger = Logger::new();
//! logger.set_log_file("logs/engine.log")?;
//! logger.set_priority(Priority::Warn);
//! logger.log(Priority::Err, "failed to load level");
//! # Ok::<(), source3_logger::errors::LoggerError>(())
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod logger;
pub mod system;

pub use logger::{LineFormat, LogEntry, LogSink, Logger, OpenMode, Priority, SharedLogger};
