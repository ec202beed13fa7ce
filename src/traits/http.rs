//! HTTP seam for scenario start requests.
//!
//! devsim only ever sends one kind of request: an empty-body POST to a
//! scenario's start route. The trait is narrowed to exactly that so tests can
//! script responses per URL without modelling a general client.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::NetworkError;

/// A response that was actually received, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends scenario start requests.
///
/// An `Err` means no response was obtained. Error statuses come back as an
/// `Ok` [`Response`] and are interpreted by the caller.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST an empty body to `url`.
    async fn post_empty(&self, url: &str) -> Result<Response, NetworkError>;
}
