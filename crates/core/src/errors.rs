use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl PortalError {
    /// True for failures whose details must stay in the server log.
    pub fn is_internal(&self) -> bool {
        matches!(self, PortalError::Database(_) | PortalError::Internal(_))
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
