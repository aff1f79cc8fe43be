//! Client configuration and initialization

use crate::host::Bx24Host;
use crate::location::BrowserLocation;
use crate::storage::BrowserStorage;
use faqdesk_http::{ClientError, FaqdeskClient};
use faqdesk_session::AuthSession;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
use web_sys::window;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<FaqdeskClient>>> = Lazy::new(|| Mutex::new(None));

/// Global session over the browser backends
static SESSION: Lazy<AuthSession> = Lazy::new(|| {
    let session = AuthSession::new(Arc::new(BrowserStorage), Arc::new(BrowserLocation));
    match Bx24Host::detect() {
        Some(host) => session.with_host(Arc::new(host)),
        None => session,
    }
});

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// The process-wide session
pub fn session() -> AuthSession {
    SESSION.clone()
}

/// Get the client instance, creating it on first use
pub fn create_client() -> Result<FaqdeskClient, ClientError> {
    let mut client_lock = CLIENT.lock().expect("Failed to acquire client lock");

    if client_lock.is_none() {
        let client = FaqdeskClient::builder()
            .base_url(get_base_url())
            .session(session())
            .build()?;
        *client_lock = Some(client.clone());
        Ok(client)
    } else {
        Ok(client_lock
            .as_ref()
            .expect("Client should be initialized")
            .clone())
    }
}
