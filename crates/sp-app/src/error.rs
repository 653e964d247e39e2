//! Error types for the sp-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Map error: {0}")]
    Map(String),

    #[error("Map compilation failed: {0}")]
    Compile(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unknown station: {0}")]
    UnknownStation(String),

    #[error("Invalid query: one or both of '{from}' and '{to}' are unknown")]
    InvalidQuery { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sp-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sp_map::MapError> for AppError {
    fn from(err: sp_map::MapError) -> Self {
        AppError::Map(err.to_string())
    }
}

impl From<sp_core::SpError> for AppError {
    fn from(err: sp_core::SpError) -> Self {
        AppError::Network(err.to_string())
    }
}
