//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, CommitmentError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Commitment(CommitmentError::EmptyInput) => {
            "error: no files supplied; pass at least one file".to_string()
        }
        ApiError::UploadTooLarge { total, limit } => format!(
            "error: upload of {} bytes exceeds the {} byte limit",
            total, limit
        ),
        other => format!("error: {}", other),
    }
}
