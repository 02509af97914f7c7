//! Error types for positional projection and chart parsing.

use thiserror::Error;

/// Errors raised while building charts from external input.
///
/// Projection itself is infallible; these only surface at the boundary where
/// chart JSON is turned into typed positions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Body code is not one of the supported two-letter codes.
    #[error("unknown body code: {0}")]
    UnknownBody(String),

    /// Gender tag is neither `f` nor `m`.
    #[error("invalid gender tag: {0}")]
    InvalidGender(String),

    /// Chart JSON could not be parsed.
    #[error("chart parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chart parsing.
pub type Result<T> = std::result::Result<T, BaseError>;
