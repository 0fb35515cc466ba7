use thiserror::Error;

/// Core error types for directory model operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid app status: {0}")]
    InvalidStatus(String),

    #[error("Invalid update type: {0}")]
    InvalidUpdateType(String),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a new InvalidStatus error
    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidStatus(status.into())
    }

    /// Create a new InvalidUpdateType error
    pub fn invalid_update_type(update_type: impl Into<String>) -> Self {
        Self::InvalidUpdateType(update_type.into())
    }

    /// Create a new InvalidDate error
    pub fn invalid_date(date: impl Into<String>) -> Self {
        Self::InvalidDate(date.into())
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
