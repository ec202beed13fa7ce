//! Command-line argument parsing for devsim.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use crate::error::ConfigError;
use crate::scenario::parse_scenario_list;
use crate::startup::DashboardConfig;

/// Options for a dashboard run, layered over the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// `--url <base-url>`
    pub base_url: Option<String>,
    /// Every `--scenario <name>`, in order
    pub scenarios: Vec<String>,
}

impl RunOptions {
    /// Apply the flags on top of `config`. Flags win over the environment.
    pub fn apply(&self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if !self.scenarios.is_empty() {
            let list = self.scenarios.join(",");
            config = config.with_scenarios(parse_scenario_list(&list));
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    Run(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use devsim::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["devsim".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" | "-u" => {
                options.base_url = Some(flag_value(&flag, inline, &mut args)?);
            }
            "--scenario" | "-s" => {
                options.scenarios.push(flag_value(&flag, inline, &mut args)?);
            }
            _ => return Err(ConfigError::UnknownArgument { arg }),
        }
    }

    Ok(CliCommand::Run(options))
}

fn flag_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}
