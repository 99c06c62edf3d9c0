use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use source3_logger::cli::Cli;
use source3_logger::config::{AppConfig, DEFAULT_CONFIG_PATH};
use source3_logger::interfaces::cli::run_cli_command;
use source3_logger::system::diagnostics::init_diagnostics;

/// Returns the process exit code.
fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = AppConfig::load_with(cli.config.as_deref().map(Path::new))
        .context("Failed to load configuration")?;

    // Dropped before exit so buffered diagnostics are flushed
    let _guard = init_diagnostics(&config.diagnostics)
        .context("Failed to initialize diagnostics")?;
    match cli.config.as_deref() {
        Some(path) => debug!("Configuration loaded from: {}", path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            debug!("Configuration loaded from: {}", DEFAULT_CONFIG_PATH)
        }
        None => debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH),
    }

    match run_cli_command(cli.command, &config) {
        Ok(()) => Ok(0),
        Err(e) => {
            eprintln!("{}", e.format_colored());
            Ok(1)
        }
    }
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    };
    process::exit(code);
}
