//! Configuration System
//!
//! Layered deployment configuration: recipient identifier, digest algorithm,
//! upload ceiling and logging. Sources are merged by the `config` crate with
//! environment variable overrides and validated after loading.

use crate::digest::HashAlgorithm;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Recipient used when a deployment does not configure one.
pub const DEFAULT_RECIPIENT: &str = "0x0000000000000000000000000000000000000000";

/// Aggregate upload ceiling: 100 MiB.
pub const DEFAULT_MAX_TOTAL_BYTES: u64 = 100 * 1024 * 1024;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoiConfig {
    /// Commitment settings
    #[serde(default)]
    pub commitment: CommitmentConfig,

    /// Upload limits enforced before the core runs
    #[serde(default)]
    pub upload: UploadConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Commitment settings fixed per deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentConfig {
    /// Identifier the transaction payload is addressed to (e.g. a contract address)
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Digest used for leaves and parent nodes
    #[serde(default)]
    pub hash_algorithm: HashAlgorithm,
}

fn default_recipient() -> String {
    DEFAULT_RECIPIENT.to_string()
}

impl Default for CommitmentConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            hash_algorithm: HashAlgorithm::default(),
        }
    }
}

/// Upload limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum summed size of all files in one batch (bytes)
    #[serde(default = "default_max_total_bytes")]
    pub max_total_bytes: u64,
}

fn default_max_total_bytes() -> u64 {
    DEFAULT_MAX_TOTAL_BYTES
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_total_bytes: default_max_total_bytes(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Commitment(String),
    Upload(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Commitment(msg) => write!(f, "Commitment: {}", msg),
            ValidationError::Upload(msg) => write!(f, "Upload: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PoiConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.commitment.recipient.trim().is_empty() {
            errors.push(ValidationError::Commitment(
                "Recipient cannot be empty".to_string(),
            ));
        }

        if self.upload.max_total_bytes == 0 {
            errors.push(ValidationError::Upload(
                "max_total_bytes must be greater than zero".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
