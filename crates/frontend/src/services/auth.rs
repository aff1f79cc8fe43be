//! Authentication API service

use crate::client::{create_client, session};
use faqdesk_http::types::{AuthRequest, UserProfile};

/// Authentication API service
#[derive(Clone)]
pub struct AuthService;

impl AuthService {
    /// Create a new auth service
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    /// Sign in with the Bitrix24 user identity, persisting the issued
    /// token and the user record into the session
    pub async fn sign_in(&self, request: AuthRequest) -> Result<UserProfile, String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;

        let response = client
            .authenticate(request)
            .await
            .map_err(|e| e.to_string())?;

        let session = session();
        session
            .store_token(&response.access_token)
            .map_err(|e| e.to_string())?;
        session
            .set_current_user(&response.user)
            .map_err(|e| e.to_string())?;

        Ok(response.user)
    }

    /// The cached user record, if any
    pub fn current_user(&self) -> Result<Option<UserProfile>, String> {
        session().current_user().map_err(|e| e.to_string())
    }

    /// Clear the session and ask the embedding host to close the panel
    pub fn sign_out(&self) -> Result<(), String> {
        session().logout().map_err(|e| e.to_string())
    }
}
