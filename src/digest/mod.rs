//! File Digest
//!
//! Converts uploaded file buffers into content-addressed leaves: a 32-byte
//! hash of the raw bytes bundled with name, size and declared mime type.

pub mod file;
pub mod hasher;

pub use file::{digest_file, digest_files, FileDigest, FileInput, DEFAULT_MIME_TYPE};
pub use hasher::{Blake3Hasher, ContentHasher, HashAlgorithm, Sha256Hasher};
