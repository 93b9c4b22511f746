//! Upload batches
//!
//! Caller-side guard in front of the core: collects file buffers and enforces
//! the aggregate size ceiling before anything is hashed.

use crate::digest::{FileInput, DEFAULT_MIME_TYPE};
use crate::error::ApiError;
use std::path::Path;
use tracing::{debug, warn};

/// Files accepted for one commitment request.
#[derive(Debug, Clone)]
pub struct UploadBatch {
    files: Vec<FileInput>,
    total_bytes: u64,
    limit: u64,
}

impl UploadBatch {
    /// Empty batch with an aggregate ceiling of `limit` bytes.
    pub fn new(limit: u64) -> Self {
        Self {
            files: Vec::new(),
            total_bytes: 0,
            limit,
        }
    }

    /// Add a file, rejecting it if the running total would pass the ceiling.
    pub fn push(&mut self, file: FileInput) -> Result<(), ApiError> {
        let total = self.checked_total(file.size())?;
        debug!(filename = %file.filename, size = file.size(), total, "Accepted upload");
        self.total_bytes = total;
        self.files.push(file);
        Ok(())
    }

    /// Read `path` from disk and add it.
    ///
    /// The size is checked against the ceiling before the file is read.
    pub fn push_path(&mut self, path: &Path, mime_type: Option<&str>) -> Result<(), ApiError> {
        let declared = std::fs::metadata(path)?.len();
        self.checked_total(declared)?;

        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_type.unwrap_or(DEFAULT_MIME_TYPE);
        self.push(FileInput::new(bytes, filename, mime_type))
    }

    fn checked_total(&self, size: u64) -> Result<u64, ApiError> {
        let total = self.total_bytes.saturating_add(size);
        if total > self.limit {
            warn!(total, limit = self.limit, "Upload exceeds aggregate size limit");
            return Err(ApiError::UploadTooLarge {
                total,
                limit: self.limit,
            });
        }
        Ok(total)
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[FileInput] {
        &self.files
    }

    pub fn into_files(self) -> Vec<FileInput> {
        self.files
    }
}
