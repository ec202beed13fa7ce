//! Error handling for devsim.
//!
//! - **Domain errors**: [`NetworkError`] (HTTP transport), [`ConfigError`]
//!   (startup), and the stream's [`WsError`](crate::websocket::WsError)
//! - **Unified error**: [`DevsimError`] with `From` conversions
//! - **Result alias**: [`DevsimResult<T>`]
//!
//! Nothing here reaches the user directly. Every failure the dashboard
//! observes at runtime ends as a rendered log line; these types carry the
//! detail to the tracing log and to startup diagnostics.

mod config;
mod devsim_error;
mod network;

pub use config::ConfigError;
pub use devsim_error::DevsimError;
pub use network::{classify_reqwest_error, NetworkError};

/// Type alias for Results using DevsimError.
pub type DevsimResult<T> = Result<T, DevsimError>;
