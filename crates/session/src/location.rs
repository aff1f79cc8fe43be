//! Current-location capability
//!
//! The session reads the token bootstrap parameter from the visible
//! address and scrubs it after consumption. Implementations must
//! rewrite the address in place, never navigating or reload.

use crate::error::SessionResult;
use std::sync::Mutex;
use url::Url;

/// Read access to the current address plus the ability to rewrite it
pub trait LocationBackend: Send + Sync {
    /// Value of a query parameter in the current address, if present
    fn query_param(&self, name: &str) -> Option<String>;

    /// Rewrite the visible address with the whole query string
    /// removed, preserving path and fragment. Must not navigate.
    fn strip_query(&self) -> SessionResult<()>;
}

/// Location backend over an in-process [`Url`], for tests and native
/// embeddings
pub struct UrlLocation {
    url: Mutex<Url>,
}

impl UrlLocation {
    /// Wrap an already-parsed URL
    pub fn new(url: Url) -> Self {
        Self {
            url: Mutex::new(url),
        }
    }

    /// Parse an address string
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(input)?))
    }

    /// Snapshot of the current address
    pub fn current(&self) -> Url {
        self.url.lock().expect("Failed to acquire location lock").clone()
    }
}

impl LocationBackend for UrlLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        let url = self.url.lock().expect("Failed to acquire location lock");
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn strip_query(&self) -> SessionResult<()> {
        let mut url = self.url.lock().expect("Failed to acquire location lock");
        url.set_query(None);
        Ok(())
    }
}
