//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for s3log using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::logger::{LineFormat, Priority};

/// s3log - write and inspect Source3 engine logs
#[derive(Parser)]
#[command(name = "s3log")]
#[command(version)]
#[command(about = "Severity-filtered file logging for the Source3 engine", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./s3log.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Append one entry to the log file
    Write {
        /// Message text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Entry priority
        #[arg(long, short = 'p', default_value = "info", value_parser = parse_priority)]
        priority: Priority,

        /// Log file (overrides the configured one)
        #[arg(long, short = 'f')]
        file: Option<String>,

        /// Minimum priority that gets written (overrides the configured one)
        #[arg(long, short = 't', value_parser = parse_priority)]
        threshold: Option<Priority>,

        /// Line format: text or json
        #[arg(long, value_parser = parse_format)]
        format: Option<LineFormat>,

        /// Discard existing file content instead of appending
        #[arg(long)]
        truncate: bool,
    },

    /// List priority levels in order
    Levels,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: s3log.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse::<Priority>().map_err(|e| e.message().to_string())
}

fn parse_format(s: &str) -> Result<LineFormat, String> {
    s.parse::<LineFormat>().map_err(|e| e.message().to_string())
}
