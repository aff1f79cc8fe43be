//! Authentication session
//!
//! The session token is issued by the server and handed to the panel
//! exactly once through the address-bar query string; from then on it
//! lives in persistent storage until logout. [`AuthSession`] owns that
//! lifecycle over injected capability backends.

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::host::HostBridge;
use crate::location::LocationBackend;
use crate::storage::StorageBackend;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// The panel's authentication session
#[derive(Clone)]
pub struct AuthSession {
    storage: Arc<dyn StorageBackend>,
    location: Arc<dyn LocationBackend>,
    host: Option<Arc<dyn HostBridge>>,
}

impl AuthSession {
    /// Create a session over the given storage and location backends
    pub fn new(storage: Arc<dyn StorageBackend>, location: Arc<dyn LocationBackend>) -> Self {
        Self {
            storage,
            location,
            host: None,
        }
    }

    /// Attach an embedding-host bridge
    pub fn with_host(mut self, host: Arc<dyn HostBridge>) -> Self {
        self.host = Some(host);
        self
    }

    /// Resolve the current access token.
    ///
    /// A non-empty `token` query parameter in the current address is
    /// consumed first: the value is persisted, the query string is
    /// scrubbed from the visible address, and the value is returned.
    /// Otherwise the stored token is returned. Empty values are
    /// treated as absent. Idempotent once the bootstrap parameter has
    /// been consumed.
    pub fn token(&self) -> SessionResult<Option<String>> {
        if let Some(bootstrap) = self.location.query_param(SessionConfig::TOKEN_QUERY_PARAM) {
            if !bootstrap.is_empty() {
                self.storage
                    .set(SessionConfig::ACCESS_TOKEN_KEY, &bootstrap)?;
                // Scrub the credential from the visible address
                self.location.strip_query()?;
                return Ok(Some(bootstrap));
            }
        }

        Ok(self
            .storage
            .get(SessionConfig::ACCESS_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    /// Persist a token delivered out-of-band (e.g. in a sign-in
    /// response body)
    pub fn store_token(&self, token: &str) -> SessionResult<()> {
        self.storage.set(SessionConfig::ACCESS_TOKEN_KEY, token)
    }

    /// Read the cached user record.
    ///
    /// Returns `Ok(None)` when no record is stored. A record that is
    /// present but not valid JSON surfaces as
    /// [`SessionError::MalformedUser`](crate::SessionError::MalformedUser);
    /// callers preferring the lenient reading can `.ok().flatten()`.
    pub fn current_user<T: DeserializeOwned>(&self) -> SessionResult<Option<T>> {
        match self.storage.get(SessionConfig::USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Cache the user record alongside the token.
    ///
    /// Best-effort cache only; nothing ties its content to the
    /// token's validity.
    pub fn set_current_user<T: Serialize>(&self, user: &T) -> SessionResult<()> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(SessionConfig::USER_KEY, &raw)
    }

    /// Whether a token is currently available.
    ///
    /// Inherits the bootstrap-consumption side effect of [`token`].
    /// Storage failures are logged and counted as unauthenticated.
    ///
    /// [`token`]: AuthSession::token
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(err) => {
                tracing::warn!("Token lookup failed: {err}");
                false
            }
        }
    }

    /// End the session: delete the token and the cached user record,
    /// then ask the embedding host (if any) to close the panel.
    pub fn logout(&self) -> SessionResult<()> {
        self.storage.remove(SessionConfig::ACCESS_TOKEN_KEY)?;
        self.storage.remove(SessionConfig::USER_KEY)?;

        if let Some(host) = &self.host {
            host.close_application();
        }

        Ok(())
    }

    /// One-time page-readiness check: consume the bootstrap parameter
    /// if present and report whether a token was found. Observability
    /// only; a missing token never blocks the panel.
    pub fn startup_check(&self) -> bool {
        match self.token() {
            Ok(Some(_)) => {
                tracing::info!("Access token loaded");
                true
            }
            Ok(None) => {
                tracing::warn!("No access token found, parts of the panel will be unavailable");
                false
            }
            Err(err) => {
                tracing::warn!("Token lookup failed during startup: {err}");
                false
            }
        }
    }
}
