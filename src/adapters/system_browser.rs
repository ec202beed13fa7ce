//! Opens URLs with the platform's default browser.

use std::io;

use crate::traits::BrowserOpener;

/// [`BrowserOpener`] backed by the `open` crate.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}
