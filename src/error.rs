//! Error types for the library mirror.

use thiserror::Error;

/// Main error type for all mirror operations.
///
/// Every variant is fatal to a run: the pipeline stops at the first error
/// and leaves whatever it already wrote on disk.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Invalid or missing configuration, detected before the run starts.
    #[error("Config error: {0}")]
    Config(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The listing endpoint answered with an error object.
    #[error("API error: {0}")]
    ApiError(String),

    /// JSON parsing or serialization failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A page entry is missing a field the pipeline relies on.
    #[error("Malformed entity: {0}")]
    MalformedEntity(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for mirror operations.
pub type Result<T> = std::result::Result<T, MirrorError>;
