//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP POST for scenario start requests
//! - [`WsConnector`] / [`WsSession`] - incident stream sockets
//! - [`BrowserOpener`] - opening dashboards in the system browser

pub mod browser;
pub mod http;
pub mod websocket;

pub use browser::BrowserOpener;
pub use http::{HttpClient, Response};
pub use websocket::{WsConnector, WsSession};
