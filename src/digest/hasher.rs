//! Content hashing strategies
//!
//! Every strategy produces a 32-byte digest over raw bytes with no framing,
//! padding, or domain separation. SHA-256 is the default; BLAKE3 is kept as an
//! interchangeable alternative.

use crate::types::{to_prefixed_hex, Hash};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A 32-byte digest function over raw bytes.
pub trait ContentHasher: Send + Sync {
    /// Short algorithm identifier (e.g. `sha256`).
    fn name(&self) -> &'static str;

    /// Hash `data` into a raw 32-byte digest.
    fn hash(&self, data: &[u8]) -> Hash;

    /// Hash `data` and encode the digest with the `0x` prefix.
    fn hash_hex(&self, data: &[u8]) -> String {
        to_prefixed_hex(&self.hash(data))
    }
}

/// SHA-256 digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn hash(&self, data: &[u8]) -> Hash {
        Sha256::digest(data).into()
    }
}

/// BLAKE3 digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn name(&self) -> &'static str {
        "blake3"
    }

    fn hash(&self, data: &[u8]) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }
}

/// Configurable selection of a [`ContentHasher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    /// Instantiate the hasher for this algorithm.
    pub fn hasher(self) -> Arc<dyn ContentHasher> {
        match self {
            HashAlgorithm::Sha256 => Arc::new(Sha256Hasher),
            HashAlgorithm::Blake3 => Arc::new(Blake3Hasher),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(format!(
                "Unknown hash algorithm: {} (must be 'sha256' or 'blake3')",
                other
            )),
        }
    }
}
