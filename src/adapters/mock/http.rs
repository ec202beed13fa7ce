//! Scripted scenario runner.
//!
//! Responses are keyed by the exact start URL, with an optional fallback.
//! Every POST is recorded so tests can assert which scenarios were started
//! and in what order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::NetworkError;
use crate::traits::{HttpClient, Response};

/// What a scripted URL answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A received response, any status.
    Reply(Response),
    /// No response at all.
    Unreachable(NetworkError),
}

impl MockResponse {
    /// A reply carrying `body` as JSON.
    pub fn json(status: u16, body: &str) -> Self {
        MockResponse::Reply(
            Response::new(status, body.to_string()).with_content_type("application/json"),
        )
    }

    /// A reply with an arbitrary text body.
    pub fn text(status: u16, body: &str) -> Self {
        MockResponse::Reply(Response::new(status, body.to_string()))
    }

    /// A refused connection.
    pub fn refused(url: &str) -> Self {
        MockResponse::Unreachable(NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    posted: Vec<String>,
}

/// [`HttpClient`] answering from a script.
///
/// Clones share the script, so a test can keep one handle while the app
/// owns another.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response(url, MockResponse::json(200, r#"{"run_id":"r1"}"#));
/// assert_eq!(start_scenario(&http, url).await, TriggerOutcome::Started { run_id: "r1".into() });
/// assert_eq!(http.posted_urls(), vec![url.to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer POSTs to exactly `url` with `response`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.lock().routes.insert(url.to_string(), response);
    }

    /// Answer POSTs to any unscripted URL with `response`.
    pub fn set_default_response(&self, response: MockResponse) {
        self.lock().fallback = Some(response);
    }

    /// URLs posted to so far, oldest first.
    pub fn posted_urls(&self) -> Vec<String> {
        self.lock().posted.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        super::lock(&self.script)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_empty(&self, url: &str) -> Result<Response, NetworkError> {
        let answer = {
            let mut script = self.lock();
            script.posted.push(url.to_string());
            script
                .routes
                .get(url)
                .or(script.fallback.as_ref())
                .cloned()
        };

        match answer {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Unreachable(err)) => Err(err),
            None => Err(NetworkError::Other {
                message: format!("no scripted response for {}", url),
            }),
        }
    }
}
