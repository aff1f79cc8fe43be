//! Per-call request descriptor

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;

/// Transient description of one outgoing request: method, headers and
/// an optional body. Consumed by [`FaqdeskClient::fetch`].
///
/// [`FaqdeskClient::fetch`]: super::FaqdeskClient::fetch
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

/// Request body variants
pub enum RequestBody {
    /// Pre-encoded body, sent as-is with no Content-Type interference
    Raw(String),
    /// Structured payload, serialized to a JSON body; Content-Type
    /// defaults to `application/json` unless the caller set one
    Json(serde_json::Value),
    /// Binary form-data; Content-Type and boundary belong to the
    /// transport and are never touched by the client
    Multipart(Form),
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// Create an empty descriptor for the given method
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// GET descriptor
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// POST descriptor
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// Set a header, replacing any previous value for that name
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a structured JSON payload
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attach a pre-encoded body
    pub fn raw(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw(body.into()));
        self
    }

    /// Attach a multipart form body
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }
}
