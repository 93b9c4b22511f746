//! File digests: one content hash plus descriptive metadata per uploaded file.

use crate::digest::hasher::ContentHasher;
use crate::error::CommitmentError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Mime type used when the caller does not declare one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// An uploaded file, fully materialized in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl FileInput {
    pub fn new(
        bytes: impl Into<Vec<u8>>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Byte length of the buffer.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Content hash and metadata for one file.
///
/// `content_hash` depends on the bytes alone: filename and mime type are
/// carried through untouched and never hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDigest {
    pub filename: String,
    pub content_hash: String,
    pub size: u64,
    pub mime_type: String,
}

/// Digest a single file.
pub fn digest_file(hasher: &dyn ContentHasher, file: &FileInput) -> FileDigest {
    let content_hash = hasher.hash_hex(&file.bytes);
    trace!(filename = %file.filename, size = file.bytes.len(), content_hash = %content_hash, "Hashed file");
    FileDigest {
        filename: file.filename.clone(),
        content_hash,
        size: file.size(),
        mime_type: file.mime_type.clone(),
    }
}

/// Digest every file, preserving input order.
///
/// Fails with [`CommitmentError::EmptyInput`] when `files` is empty; no other
/// validation is performed.
#[instrument(skip_all, fields(file_count = files.len(), algorithm = hasher.name()))]
pub fn digest_files(
    hasher: &dyn ContentHasher,
    files: &[FileInput],
) -> Result<Vec<FileDigest>, CommitmentError> {
    if files.is_empty() {
        return Err(CommitmentError::EmptyInput);
    }

    let digests: Vec<FileDigest> = files.iter().map(|f| digest_file(hasher, f)).collect();
    debug!(digest_count = digests.len(), "Digested files");
    Ok(digests)
}
