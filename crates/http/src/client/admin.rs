//! Typed panel API endpoints

use super::FaqdeskClient;
use super::error::ClientError;
use super::request::RequestOptions;
use crate::types::{
    ApiStatus, AuthRequest, AuthResponse, FeedbackRequest, LogListQuery, LogListResponse,
    LogStatisticsResponse, SaveSettingsRequest, SearchRequest, SearchResponse, SettingsResponse,
};

impl FaqdeskClient {
    /// Exchange a Bitrix24 user identity for an access token.
    ///
    /// Works on an unauthenticated client; the returned token is what
    /// the caller subsequently persists into the session.
    pub async fn authenticate(&self, request: AuthRequest) -> Result<AuthResponse, ClientError> {
        self.execute(
            "/api/bitrix24/permissions/auth",
            RequestOptions::post().json(serde_json::to_value(&request)?),
        )
        .await
    }

    /// Current bot settings
    pub async fn settings(&self) -> Result<SettingsResponse, ClientError> {
        self.execute("/admin/api/settings", RequestOptions::get())
            .await
    }

    /// Save bot settings
    pub async fn save_settings(
        &self,
        request: SaveSettingsRequest,
    ) -> Result<ApiStatus, ClientError> {
        self.execute(
            "/admin/api/settings",
            RequestOptions::post().json(serde_json::to_value(&request)?),
        )
        .await
    }

    /// Reset bot settings to their defaults
    pub async fn reset_settings(&self) -> Result<ApiStatus, ClientError> {
        self.execute("/admin/api/settings/reset", RequestOptions::post())
            .await
    }

    /// List query logs with filters and pagination
    pub async fn logs(&self, query: &LogListQuery) -> Result<LogListResponse, ClientError> {
        let path = format!("/admin/api/logs/list?{}", query.to_query_string());
        self.execute(&path, RequestOptions::get()).await
    }

    /// Aggregated log statistics
    pub async fn log_statistics(&self) -> Result<LogStatisticsResponse, ClientError> {
        self.execute("/admin/api/logs/statistics", RequestOptions::get())
            .await
    }

    /// Semantic search over the FAQ knowledge base
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ClientError> {
        self.execute(
            "/api/search",
            RequestOptions::post().json(serde_json::to_value(&request)?),
        )
        .await
    }

    /// Rate a previously shown answer
    pub async fn send_feedback(&self, request: FeedbackRequest) -> Result<ApiStatus, ClientError> {
        self.execute(
            "/api/feedback",
            RequestOptions::post().json(serde_json::to_value(&request)?),
        )
        .await
    }
}
