//! Severity-filtered file logger
//!
//! A [`Logger`] owns at most one open log file. Entries below the configured
//! threshold are dropped, everything else is appended as a single line with
//! one unbuffered write, so a failed line is never sent again later. The
//! handle is closed when the logger is re-pointed at another file, closed
//! explicitly, or dropped.

mod entry;
mod priority;
mod sink;

pub use entry::{LineFormat, LogEntry};
pub use priority::Priority;
pub use sink::{LogSink, SharedLogger};

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LoggerConfig;
use crate::errors::{LoggerError, Result};

/// What happens to existing content when a log file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenMode {
    #[default]
    Append,
    Truncate,
}

impl std::fmt::Display for OpenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

impl std::str::FromStr for OpenMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "truncate" => Ok(Self::Truncate),
            _ => Err(LoggerError::validation(format!(
                "Invalid open mode: '{}'. Valid: append, truncate",
                s
            ))),
        }
    }
}

#[derive(Debug)]
pub struct Logger {
    path: Option<PathBuf>,
    file: Option<File>,
    priority: Priority,
    format: LineFormat,
    open_mode: OpenMode,
    timestamps: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            path: None,
            file: None,
            priority: Priority::default(),
            format: LineFormat::default(),
            open_mode: OpenMode::default(),
            timestamps: true,
        }
    }

    /// Build a logger from the `[logger]` section of the configuration,
    /// opening the configured file if there is one.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let mut logger = Self::new();
        logger.set_priority(config.priority);
        logger.set_format(config.format);
        logger.set_open_mode(config.open_mode);
        logger.set_timestamps(config.timestamps);

        if let Some(ref file) = config.file {
            if !file.is_empty() {
                logger.set_log_file(file)?;
            }
        }

        Ok(logger)
    }

    /// Point the logger at a new file.
    ///
    /// Any previously open file is flushed and closed first. Missing parent
    /// directories are created. If opening fails the logger is left without
    /// an open file and later writes fail until another path is set.
    pub fn set_log_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Err(e) = self.close() {
            warn!("Failed to flush previous log file: {}", e);
        }
        self.path = Some(path.to_path_buf());

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::file_operation(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        match self.open_mode {
            OpenMode::Append => options.append(true),
            OpenMode::Truncate => options.write(true).truncate(true),
        };

        let file = options.open(path).map_err(|e| {
            LoggerError::file_operation(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "Opened log file {} (mode: {})",
            path.display(),
            self.open_mode
        );
        self.file = Some(file);
        Ok(())
    }

    /// Set the minimum priority that gets written. Earlier entries are not
    /// affected.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_format(&mut self, format: LineFormat) {
        self.format = format;
    }

    /// Mode used the next time a file is opened.
    pub fn set_open_mode(&mut self, open_mode: OpenMode) {
        self.open_mode = open_mode;
    }

    pub fn set_timestamps(&mut self, enabled: bool) {
        self.timestamps = enabled;
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn format(&self) -> LineFormat {
        self.format
    }

    pub fn open_mode(&self) -> OpenMode {
        self.open_mode
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn is_enabled(&self, priority: Priority) -> bool {
        priority.passes(self.priority)
    }

    /// Write a message with the given priority.
    ///
    /// Returns `true` if the line reached the file, `false` if it was
    /// filtered out or the write failed. No retries.
    pub fn log(&mut self, priority: Priority, message: &str) -> bool {
        match self.try_log(priority, message) {
            Ok(written) => written,
            Err(e) => {
                debug!("Log entry dropped: {}", e);
                false
            }
        }
    }

    /// Like [`Logger::log`], but reports why a write did not happen.
    ///
    /// `Ok(false)` means the entry was below the threshold. Filtering is
    /// checked before the file, so a filtered entry on a closed logger is
    /// not an error.
    pub fn try_log(&mut self, priority: Priority, message: &str) -> Result<bool> {
        if !self.is_enabled(priority) {
            return Ok(false);
        }

        let entry = if self.timestamps {
            LogEntry::new(priority, message)
        } else {
            LogEntry::without_timestamp(priority, message)
        };
        let line = entry.render(self.format)?;

        let Some(file) = self.file.as_mut() else {
            return Err(LoggerError::file_not_open(match &self.path {
                Some(path) => format!("Log file {} is not open", path.display()),
                None => "No log file has been set".to_string(),
            }));
        };

        file.write_all(format!("{}\n", line).as_bytes()).map_err(|e| {
            warn!("Failed to write log entry: {}", e);
            LoggerError::file_operation(format!("Failed to write log entry: {}", e))
        })?;

        Ok(true)
    }

    pub fn info(&mut self, message: &str) -> bool {
        self.log(Priority::Info, message)
    }

    pub fn trace(&mut self, message: &str) -> bool {
        self.log(Priority::Trace, message)
    }

    pub fn debug(&mut self, message: &str) -> bool {
        self.log(Priority::Debug, message)
    }

    pub fn warn(&mut self, message: &str) -> bool {
        self.log(Priority::Warn, message)
    }

    pub fn err(&mut self, message: &str) -> bool {
        self.log(Priority::Err, message)
    }

    /// Flush and release the open file, keeping the path. Calling this on a
    /// closed logger does nothing.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            if let Some(ref path) = self.path {
                debug!("Closed log file {}", path.display());
            }
        }
        Ok(())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to flush log file on drop: {}", e);
        }
    }
}
