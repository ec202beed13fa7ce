//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockWsConnector`] - socket connector with scripted sessions
//! - [`RecordingBrowser`] - records opened URLs

pub mod browser;
pub mod http;
pub mod websocket;

pub use browser::RecordingBrowser;
pub use http::{MockHttpClient, MockResponse};
pub use websocket::{MockWsConnector, SessionScript};

use std::sync::{Mutex, MutexGuard};

/// Lock shared mock state, recovering it if a test thread panicked while
/// holding the lock.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
