//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TungsteniteConnector`] - WebSocket using tokio-tungstenite
//! - [`SystemBrowser`] - default browser via the `open` crate
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockWsConnector`] - Scripted socket sessions
//! - [`mock::RecordingBrowser`] - Records opened URLs

pub mod mock;
pub mod reqwest_http;
pub mod system_browser;
pub mod tungstenite_ws;

pub use mock::{MockHttpClient, MockWsConnector, RecordingBrowser};
pub use reqwest_http::ReqwestHttpClient;
pub use system_browser::SystemBrowser;
pub use tungstenite_ws::{TungsteniteConnector, TungsteniteSession};
