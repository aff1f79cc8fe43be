//! Session configuration

/// Session configuration
///
/// The key and parameter names are shared with the token-issuing
/// server and the panel pages; changing them breaks existing sessions.
pub struct SessionConfig;

impl SessionConfig {
    /// Persistent storage key holding the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "accessToken";

    /// Persistent storage key holding the cached user record
    pub const USER_KEY: &'static str = "user";

    /// Query parameter used as the one-time token bootstrap channel
    pub const TOKEN_QUERY_PARAM: &'static str = "token";
}
