//! Browser launcher abstraction.

use std::io;

/// Opens URLs in a new browsing context outside the dashboard.
pub trait BrowserOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}
