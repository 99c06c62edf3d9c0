//! Configuration loading tests

use source3_logger::config::{AppConfig, LoggerConfig};
use source3_logger::errors::LoggerError;
use source3_logger::{LineFormat, Logger, OpenMode, Priority};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Environment is process-wide; every loader in this file goes through here
static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

fn load_locked(path: &Path) -> source3_logger::errors::Result<AppConfig> {
    let _lock = ENV_LOCK.lock();
    AppConfig::load_with(Some(path))
}

#[cfg(test)]
mod config_file_tests {
    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("s3log.toml");
        fs::write(
            &path,
            r#"
[logger]
file = "logs/game.log"
priority = "warn"
format = "json"
open_mode = "truncate"
timestamps = false

[diagnostics]
level = "debug"
"#,
        )
        .unwrap();

        let config = load_locked(&path).unwrap();
        assert_eq!(config.logger.file.as_deref(), Some("logs/game.log"));
        assert_eq!(config.logger.priority, Priority::Warn);
        assert_eq!(config.logger.format, LineFormat::Json);
        assert_eq!(config.logger.open_mode, OpenMode::Truncate);
        assert!(!config.logger.timestamps);
        assert_eq!(config.diagnostics.level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_locked(&temp_dir.path().join("absent.toml"));

        assert!(matches!(result, Err(LoggerError::Config(_))));
    }

    #[test]
    fn test_invalid_priority_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[logger]\npriority = \"loud\"\n").unwrap();

        let result = load_locked(&path);
        assert!(matches!(result, Err(LoggerError::Config(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("s3log.toml");

        let mut config = AppConfig::default();
        config.logger.priority = Priority::Debug;
        config.logger.file = Some("out/debug.log".to_string());
        config.save_to_file(&path).unwrap();

        let reloaded = load_locked(&path).unwrap();
        assert_eq!(reloaded.logger, config.logger);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("env_override.toml");
        fs::write(
            &path,
            "[logger]\nfile = \"logs/from_file.log\"\npriority = \"info\"\nopen_mode = \"append\"\n",
        )
        .unwrap();

        let _lock = ENV_LOCK.lock();
        unsafe {
            std::env::set_var("S3LOG__LOGGER__PRIORITY", "warn");
            std::env::set_var("S3LOG__LOGGER__OPEN_MODE", "truncate");
        }
        let result = AppConfig::load_with(Some(path.as_path()));

        // Numeric levels come through `try_parsing` as integers
        unsafe { std::env::set_var("S3LOG__LOGGER__PRIORITY", "5") };
        let numeric = AppConfig::load_with(Some(path.as_path()));

        unsafe {
            std::env::remove_var("S3LOG__LOGGER__PRIORITY");
            std::env::remove_var("S3LOG__LOGGER__OPEN_MODE");
        }

        let config = result.unwrap();
        assert_eq!(config.logger.priority, Priority::Warn);
        assert_eq!(config.logger.open_mode, OpenMode::Truncate);
        assert_eq!(config.logger.file.as_deref(), Some("logs/from_file.log"));
        assert_eq!(numeric.unwrap().logger.priority, Priority::Err);
    }
}

#[cfg(test)]
mod config_logger_tests {
    use super::*;

    #[test]
    fn test_logger_follows_loaded_config() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("engine.log");
        let config = LoggerConfig {
            file: Some(log_path.display().to_string()),
            priority: Priority::Trace,
            timestamps: false,
            ..LoggerConfig::default()
        };

        let mut logger = Logger::from_config(&config).unwrap();
        assert!(!logger.info("below"));
        assert!(logger.trace("at"));
        drop(logger);

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "[TRACE] at\n");
    }
}
