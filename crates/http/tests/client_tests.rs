//! Integration tests for the Faqdesk HTTP client

use faqdesk_http::client::error::ClientError;
use faqdesk_http::{FaqdeskClient, RequestOptions};
use faqdesk_session::{AuthSession, MemoryStorage, StorageBackend, UrlLocation};
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_at(address: &str) -> (AuthSession, Arc<MemoryStorage>, Arc<UrlLocation>) {
    let storage = Arc::new(MemoryStorage::new());
    let location = Arc::new(UrlLocation::parse(address).unwrap());
    let session = AuthSession::new(storage.clone(), location.clone());
    (session, storage, location)
}

fn session_with_token(token: &str) -> AuthSession {
    let (session, storage, _) = session_at("https://panel.example/admin");
    storage.set("accessToken", token).unwrap();
    session
}

fn client_for(server: &MockServer, session: AuthSession) -> FaqdeskClient {
    FaqdeskClient::builder()
        .base_url(server.uri())
        .session(session)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_client_builder() {
    let client = FaqdeskClient::builder()
        .base_url("http://localhost:8080/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = FaqdeskClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_bearer_header_from_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/settings"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session_with_token("stored-token"));
    let response = client
        .fetch("/admin/api/settings", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_bootstrap_token_consumed_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer fresh-from-url"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let (session, storage, location) =
        session_at("https://panel.example/admin?token=fresh-from-url");
    let client = client_for(&mock_server, session);

    let response = client.fetch("/health", RequestOptions::get()).await.unwrap();

    assert_eq!(response.status(), 200);
    // Consumed: persisted and scrubbed from the address
    assert_eq!(
        storage.get("accessToken").unwrap(),
        Some("fresh-from-url".to_string())
    );
    assert_eq!(location.current().as_str(), "https://panel.example/admin");
}

#[tokio::test]
async fn test_json_body_serialization_and_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .and(header("authorization", "Bearer T"))
        .and(header("content-type", "application/json"))
        .and(body_string("{\"a\":1}"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session_with_token("T"));
    let response = client
        .fetch("/api/search", RequestOptions::post().json(json!({"a": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_caller_content_type_wins_for_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("content-type", "application/vnd.faqdesk+json"))
        .and(body_string("{\"a\":1}"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session_with_token("T"));
    let options = RequestOptions::post()
        .header(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/vnd.faqdesk+json"),
        )
        .json(json!({"a": 1}));

    let response = client.fetch("/api/search", options).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_multipart_body_keeps_transport_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session_with_token("T"));
    let form = reqwest::multipart::Form::new().text("faq", "What are the opening hours?");
    let response = client
        .fetch("/admin/api/import", RequestOptions::post().multipart(form))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap();
    // Boundary-carrying type from the transport, not ours
    assert!(content_type.starts_with("multipart/form-data"));
    assert_eq!(
        requests[0]
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok()),
        Some("Bearer T")
    );
}

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let (session, _, _) = session_at("https://panel.example/admin");
    let client = client_for(&mock_server, session);
    client.fetch("/health", RequestOptions::get()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_unauthorized_response_returned_with_single_warning() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("x-reason", "expired")
                .set_body_string("Unauthorized"),
        )
        .mount(&mock_server)
        .await;

    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = client_for(&mock_server, session_with_token("stale"));
    let response = client
        .fetch("/admin/api/settings", RequestOptions::get())
        .await
        .unwrap();

    // The raw response comes back untouched
    assert_eq!(response.status(), 401);
    assert_eq!(
        response
            .headers()
            .get("x-reason")
            .and_then(|value| value.to_str().ok()),
        Some("expired")
    );
    assert_eq!(response.text().await.unwrap(), "Unauthorized");

    let logged = capture.contents();
    assert_eq!(logged.matches("Access token expired or invalid").count(), 1);
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    // Nothing listens here; connection is refused before any HTTP exchange
    let client = FaqdeskClient::builder()
        .base_url("http://127.0.0.1:9")
        .session(session_with_token("T"))
        .build()
        .unwrap();

    let result = client.fetch("/health", RequestOptions::get()).await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}

#[tokio::test]
async fn test_execute_maps_error_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("no admin role"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session_with_token("T"));
    let result: Result<serde_json::Value, _> =
        client.execute("/admin/api/settings", RequestOptions::get()).await;

    assert!(matches!(result, Err(ClientError::Forbidden(_))));
}

#[tokio::test]
async fn test_authenticate_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bitrix24/permissions/auth"))
        .and(body_json(json!({
            "domain": "company.bitrix24.ru",
            "user_id": "7",
            "user_name": "Ivanov Ivan"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "issued-token",
            "user": {"id": "7", "username": "Ivanov Ivan", "role": "admin"}
        })))
        .mount(&mock_server)
        .await;

    let client = FaqdeskClient::new(mock_server.uri()).unwrap();
    let response = client
        .authenticate(faqdesk_http::types::AuthRequest {
            domain: "company.bitrix24.ru".into(),
            user_id: "7".into(),
            user_name: "Ivanov Ivan".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.access_token, "issued-token");
    assert_eq!(response.user.role, "admin");
}

#[tokio::test]
async fn test_logs_endpoint_builds_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/logs/list"))
        .and(wiremock::matchers::query_param("page", "2"))
        .and(wiremock::matchers::query_param("platform", "bitrix24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "logs": [],
            "pagination": {"page": 2, "per_page": 50, "total": 0, "total_pages": 0}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session_with_token("T"));
    let query = faqdesk_http::types::LogListQuery {
        page: 2,
        platform: Some("bitrix24".into()),
        ..Default::default()
    };
    let response = client.logs(&query).await.unwrap();

    assert!(response.success);
    assert_eq!(response.pagination.page, 2);
}

/// Captures formatted tracing output for assertions
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
