//! Faqdesk HTTP module: the admin panel's API client
//!
//! Wraps `reqwest` with the panel's session handling: every call
//! resolves the access token through [`faqdesk_session::AuthSession`]
//! and attaches it as a bearer credential, structured payloads are
//! serialized to JSON bodies, and responses are handed back raw so
//! callers keep full control over error presentation.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::request::{RequestBody, RequestOptions};
pub use client::{FaqdeskClient, FaqdeskClientBuilder};
