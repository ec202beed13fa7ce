//! CLI module for devsim.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use devsim::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let options = run_cli_command(command);
//! // Only `Run` gets here; version and help exit
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, version_line, USAGE, VERSION};

use crate::error::DevsimResult;
use crate::startup::{DashboardConfig, Endpoints};

/// Run a CLI command if applicable.
///
/// Returns the run options for `Run`. `Version` and `Help` print and exit
/// the process.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(options) => options,
    }
}

/// Layer `options` over the environment and resolve the endpoints.
pub fn resolve_run(options: &RunOptions) -> DevsimResult<(DashboardConfig, Endpoints)> {
    let config = options.apply(DashboardConfig::from_env());
    let endpoints = config.resolve()?;
    Ok((config, endpoints))
}
