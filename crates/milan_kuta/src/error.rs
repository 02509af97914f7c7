//! Error types for configuration loading.

use thiserror::Error;

/// Errors raised while loading protocol configuration or naming key-sets.
///
/// Scoring never returns these; a bad protocol entry degrades to an
/// unconfigured protocol instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Configuration JSON could not be parsed.
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Top-level configuration value is not a JSON object.
    #[error("configuration root must be an object keyed by protocol name")]
    NotAnObject,

    /// Key-set name is not in the catalog.
    #[error("unknown kuta type: {0}")]
    UnknownKutaType(String),
}
