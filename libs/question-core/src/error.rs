//! Error types for question-core.

use thiserror::Error;

/// Result type alias using PayloadError.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Errors raised while interpreting an API payload envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The server answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("response reported success but carried no question data")]
    MissingData,
}
