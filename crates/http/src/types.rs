//! Request and response types for the panel API

use serde::{Deserialize, Serialize};

/// Sign-in request carrying the Bitrix24 user identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub domain: String,
    pub user_id: String,
    pub user_name: String,
}

/// User record delivered at sign-in and cached alongside the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Sign-in response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: UserProfile,
}

/// Success/message envelope returned by mutating endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Current bot settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub success: bool,
    pub settings: serde_json::Value,
}

/// Settings update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSettingsRequest {
    pub settings: serde_json::Value,
}

/// Semantic search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub user_id: i64,
}

/// One FAQ entry matched by a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: Option<String>,
    /// Identifier for feeding back a rating on this answer
    pub answer_log_id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub category: String,
    /// Similarity to the query, percent
    pub similarity: f64,
}

/// Semantic search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

/// Answer rating sent with feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Helpful,
    NotHelpful,
}

/// Feedback on a shown answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub answer_log_id: i64,
    pub rating: Rating,
    #[serde(default)]
    pub user_id: i64,
}

/// Filters and pagination for the query-log listing
#[derive(Debug, Clone)]
pub struct LogListQuery {
    pub page: u32,
    pub per_page: u32,
    pub user_id: Option<i64>,
    /// `helpful`, `not_helpful` or `no_rating`
    pub rating: Option<String>,
    pub search: Option<String>,
    /// `telegram` or `bitrix24`
    pub platform: Option<String>,
    /// Only queries that produced no answer
    pub no_answer: bool,
}

impl Default for LogListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 50,
            user_id: None,
            rating: None,
            search: None,
            platform: None,
            no_answer: false,
        }
    }
}

impl LogListQuery {
    pub(crate) fn to_query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &self.page.to_string());
        query.append_pair("per_page", &self.per_page.to_string());
        if let Some(user_id) = self.user_id {
            query.append_pair("user_id", &user_id.to_string());
        }
        if let Some(rating) = &self.rating {
            query.append_pair("rating", rating);
        }
        if let Some(search) = &self.search {
            query.append_pair("search", search);
        }
        if let Some(platform) = &self.platform {
            query.append_pair("platform", platform);
        }
        if self.no_answer {
            query.append_pair("no_answer", "true");
        }
        query.finish()
    }
}

/// Pagination metadata for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

/// Query-log listing response. Log rows are kept loose: their shape
/// follows the server's export schema, which the panel renders as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogListResponse {
    pub success: bool,
    pub logs: Vec<serde_json::Value>,
    pub pagination: Pagination,
}

/// Aggregated log statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogStatisticsResponse {
    pub success: bool,
    pub statistics: serde_json::Value,
}
