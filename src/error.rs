//! Error types for the proof-of-invention commitment engine.

use thiserror::Error;

/// Errors raised by the digest and commitment components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    #[error("No files supplied: at least one file is required to build a commitment")]
    EmptyInput,

    /// Only raised where a hash must be decoded, e.g. by the raw-bytes combiner.
    #[error("Malformed hash: {0} (expected 0x followed by 64 hex characters)")]
    MalformedHash(String),
}

/// Errors surfaced by the calling layer (CLI, config, uploads).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Commitment failed: {0}")]
    Commitment(#[from] CommitmentError),

    #[error("Upload too large: {total} bytes exceeds the {limit} byte limit")]
    UploadTooLarge { total: u64, limit: u64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
