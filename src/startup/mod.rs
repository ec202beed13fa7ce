//! Startup: configuration resolution and logging setup.
//!
//! # Components
//!
//! - [`config`] - dashboard configuration and derived endpoints
//! - [`logging`] - tracing subscriber writing to the cache directory
//!
//! # Usage
//!
//! ```ignore
//! use devsim::startup::{init_logging, DashboardConfig};
//!
//! init_logging();
//! let config = DashboardConfig::from_env();
//! let endpoints = config.resolve()?;
//! ```

pub mod config;
pub mod logging;

pub use config::{DashboardConfig, Endpoints, DEFAULT_BASE_URL, ENV_SCENARIOS, ENV_URL};
pub use logging::{init_logging, log_file_path, ENV_LOG};
