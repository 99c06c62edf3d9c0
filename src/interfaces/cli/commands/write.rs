//! Write command

use colored::Colorize;
use tracing::debug;

use crate::config::LoggerConfig;
use crate::interfaces::cli::CliError;
use crate::logger::{Logger, Priority};

/// Append one entry using a logger built from `settings`.
///
/// An entry below the threshold is not an error; a missing log file or a
/// failed write is.
pub fn write_entry(
    settings: &LoggerConfig,
    priority: Priority,
    message: &str,
) -> Result<(), CliError> {
    if settings.file.as_deref().is_none_or(str::is_empty) {
        return Err(CliError::CommandError(
            "No log file configured (use --file or set logger.file)".to_string(),
        ));
    }

    let mut logger = Logger::from_config(settings)?;
    debug!(
        "Writing {} entry to {:?} (threshold {})",
        priority,
        logger.path(),
        logger.priority()
    );

    if logger.try_log(priority, message)? {
        if let Some(path) = logger.path() {
            println!(
                "{} {}",
                "Logged to".green(),
                path.display().to_string().blue()
            );
        }
    } else if priority == Priority::None {
        println!("{}", "Skipped: NONE entries are never written".yellow());
    } else {
        println!(
            "{} {} {} {}",
            "Skipped:".yellow(),
            priority.to_string().bold(),
            "is below the threshold".yellow(),
            logger.priority().to_string().bold()
        );
    }

    logger.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_entry_appends_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cli.log");
        let settings = LoggerConfig {
            file: Some(path.display().to_string()),
            timestamps: false,
            ..LoggerConfig::default()
        };

        write_entry(&settings, Priority::Warn, "from the command line").unwrap();
        write_entry(&settings, Priority::None, "never").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[WARN ] from the command line\n"
        );
    }

    #[test]
    fn test_write_entry_requires_file() {
        let settings = LoggerConfig {
            file: None,
            ..LoggerConfig::default()
        };

        let result = write_entry(&settings, Priority::Err, "lost");
        assert!(matches!(result, Err(CliError::CommandError(_))));
    }
}
