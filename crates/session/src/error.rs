//! Session error types

/// Standard result type for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Session error types
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The storage backend failed
    #[error("Storage backend failed: {message}")]
    Storage { message: String },

    /// The location backend failed
    #[error("Location backend failed: {message}")]
    Location { message: String },

    /// The cached user record is present but not valid JSON
    #[error("Stored user record is not valid JSON: {0}")]
    MalformedUser(#[from] serde_json::Error),
}

impl SessionError {
    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a location error
    pub fn location(message: impl Into<String>) -> Self {
        Self::Location {
            message: message.into(),
        }
    }
}
