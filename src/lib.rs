//! devsim - a terminal dashboard for the DevOps simulator
//!
//! Triggers backend scenarios over HTTP, follows the live incident stream
//! over a WebSocket, and opens the Grafana and Prometheus dashboards.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod log_panel;
pub mod payload;
pub mod scenario;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod websocket;
