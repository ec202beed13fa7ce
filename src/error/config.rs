//! Configuration error types.

use thiserror::Error;

/// Errors raised while resolving the dashboard configuration at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// The base URL uses a scheme other than http or https.
    #[error("Unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// The base URL has no host component.
    #[error("Base URL '{url}' has no host")]
    MissingHost { url: String },

    /// No scenarios remain after parsing the scenario list.
    #[error("Scenario list is empty")]
    EmptyScenarioList,

    /// A command-line flag was missing its value.
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    /// An unrecognised command-line argument.
    #[error("Unknown argument '{arg}'")]
    UnknownArgument { arg: String },
}
