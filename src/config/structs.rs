use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LoggerError, Result};
use crate::logger::{LineFormat, OpenMode, Priority};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "s3log.toml";

/// Prefix of environment overrides, e.g. `S3LOG__LOGGER__PRIORITY=warn`.
pub const ENV_PREFIX: &str = "S3LOG";

/// Full configuration.
///
/// - logger: where the engine log goes and what gets written
/// - diagnostics: the crate's own tracing output (CLI only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl AppConfig {
    /// Load from an explicit file (which must exist), or from `s3log.toml`
    /// in the working directory if present, then apply environment
    /// overrides.
    ///
    /// Precedence: ENV > config file > defaults
    pub fn load_with(path: Option<&Path>) -> Result<Self> {
        use config::{Config, Environment, File};

        let builder = match path {
            Some(path) => Config::builder().add_source(File::from(path).required(true)),
            None => Config::builder()
                .add_source(File::with_name(DEFAULT_CONFIG_PATH).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings
            .try_deserialize::<AppConfig>()
            .map_err(|e| LoggerError::config(format!("Failed to deserialize config: {}", e)))?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub format: LineFormat,
    #[serde(default)]
    pub open_mode: OpenMode,
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// `tracing_subscriber::EnvFilter` directive
    #[serde(default = "default_diagnostics_level")]
    pub level: String,
    #[serde(default)]
    pub format: LineFormat,
}

fn default_log_file() -> Option<String> {
    Some("logs/engine.log".to_string())
}

fn default_timestamps() -> bool {
    true
}

fn default_diagnostics_level() -> String {
    "warn".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            priority: Priority::default(),
            format: LineFormat::default(),
            open_mode: OpenMode::default(),
            timestamps: default_timestamps(),
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            level: default_diagnostics_level(),
            format: LineFormat::default(),
        }
    }
}
