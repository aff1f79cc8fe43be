//! Faqdesk API client

pub mod admin;
pub mod error;
pub mod request;

use error::ClientError;
use faqdesk_session::AuthSession;
use request::{RequestBody, RequestOptions};
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, Response, StatusCode};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Faqdesk panel API client
///
/// The attached [`AuthSession`] is consulted on every call, so a token
/// that appears (bootstrap consumption) or disappears (logout) between
/// requests is always picked up.
#[derive(Clone)]
pub struct FaqdeskClient {
    client: Client,
    base_url: String,
    session: Option<AuthSession>,
}

impl FaqdeskClient {
    /// Create a new unauthenticated client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> FaqdeskClientBuilder {
        FaqdeskClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session this client resolves credentials through, if any
    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// Issue a request described by `options` against `path`.
    ///
    /// The contract, in order:
    /// - the session token (when present) is attached as
    ///   `Authorization: Bearer <token>`, replacing any caller value;
    /// - a [`RequestBody::Json`] body is serialized and gets
    ///   `Content-Type: application/json` unless the caller already
    ///   set a Content-Type; raw and multipart bodies pass through
    ///   untouched;
    /// - a 401 response is logged once as a warning but still
    ///   returned; the client never retries, clears the token, or
    ///   redirects;
    /// - every response is returned raw, whatever the status, so the
    ///   caller can inspect it;
    /// - transport failures are logged and propagated, never
    ///   swallowed.
    pub async fn fetch(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let RequestOptions {
            method,
            mut headers,
            body,
        } = options;

        if let Some(value) = self.bearer()? {
            headers.insert(header::AUTHORIZATION, value);
        }

        let mut request = self.client.request(method, &url);

        match body {
            Some(RequestBody::Json(value)) => {
                if !headers.contains_key(header::CONTENT_TYPE) {
                    headers.insert(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/json"),
                    );
                }
                request = request.body(serde_json::to_string(&value)?);
            }
            Some(RequestBody::Raw(text)) => request = request.body(text),
            Some(RequestBody::Multipart(form)) => request = request.multipart(form),
            None => {}
        }

        let response = match request.headers(headers).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Request to {url} failed: {err}");
                return Err(err.into());
            }
        };

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("Access token expired or invalid");
        }

        Ok(response)
    }

    /// Execute a request and decode a successful JSON response
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let response = self.fetch(path, options).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Create a raw request builder for callers needing streaming or
    /// bespoke composition. The bearer header is attached on a
    /// best-effort basis; a failing storage backend downgrades to an
    /// unauthenticated request with a warning.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        match self.bearer() {
            Ok(Some(value)) => request = request.header(header::AUTHORIZATION, value),
            Ok(None) => {}
            Err(err) => tracing::warn!("Skipping Authorization header: {err}"),
        }

        request
    }

    /// Resolve the bearer header value for this call, if any
    fn bearer(&self) -> Result<Option<HeaderValue>, ClientError> {
        let Some(session) = &self.session else {
            return Ok(None);
        };

        match session.token()? {
            Some(token) => Ok(Some(HeaderValue::from_str(&format!("Bearer {token}"))?)),
            None => Ok(None),
        }
    }
}

/// Builder for [`FaqdeskClient`]
#[derive(Default)]
pub struct FaqdeskClientBuilder {
    base_url: Option<String>,
    session: Option<AuthSession>,
    user_agent: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
}

impl FaqdeskClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Attach the session used to resolve credentials
    pub fn session(mut self, session: AuthSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<FaqdeskClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("faqdesk-panel/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(FaqdeskClient {
            client,
            base_url,
            session: self.session,
        })
    }
}
