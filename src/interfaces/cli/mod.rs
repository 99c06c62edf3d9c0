//! CLI interface module
//!
//! This module runs the `s3log` subcommands parsed by [`crate::cli`].

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::AppConfig;
use crate::errors::LoggerError;
use commands::{config_generate, config_show, list_levels, write_entry};

#[derive(Debug)]
pub enum CliError {
    LoggerError(String),
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::LoggerError(msg) => format!("Logger error: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::LoggerError(msg) => {
                format!("{} {}", "Logger error:".red().bold(), msg.white())
            }
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LoggerError> for CliError {
    fn from(err: LoggerError) -> Self {
        match err {
            LoggerError::Config(_) => CliError::ConfigError(err.to_string()),
            _ => CliError::LoggerError(err.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &AppConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Write {
            message,
            priority,
            file,
            threshold,
            format,
            truncate,
        } => {
            let mut settings = config.logger.clone();
            if file.is_some() {
                settings.file = file;
            }
            if let Some(threshold) = threshold {
                settings.priority = threshold;
            }
            if let Some(format) = format {
                settings.format = format;
            }
            if truncate {
                settings.open_mode = crate::logger::OpenMode::Truncate;
            }
            write_entry(&settings, priority, &message.join(" "))
        }

        Commands::Levels => {
            list_levels();
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force)
            }
            ConfigCommands::Show => config_show(config),
        },
    }
}
