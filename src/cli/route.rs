//! CLI route: single route table and run context. Dispatches to the commitment core and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_commit_text, format_digests_text};
use crate::config::{ConfigLoader, PoiConfig};
use crate::digest::{digest_files, HashAlgorithm};
use crate::error::ApiError;
use crate::invention::ProofOfInvention;
use crate::upload::UploadBatch;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: the loaded and validated configuration.
pub struct RunContext {
    config: PoiConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::from_config(config)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(config: PoiConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self { config })
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Commit {
                files,
                mime,
                recipient,
                algorithm,
                format,
            } => self.handle_commit(
                files,
                mime.as_deref(),
                recipient.as_deref(),
                *algorithm,
                format,
            ),
            Commands::Hash {
                files,
                mime,
                algorithm,
                format,
            } => self.handle_hash(files, mime.as_deref(), *algorithm, format),
            Commands::Config => Ok(serde_json::to_string_pretty(&self.config)?),
        }
    }

    fn load_batch(&self, files: &[PathBuf], mime: Option<&str>) -> Result<UploadBatch, ApiError> {
        let mut batch = UploadBatch::new(self.config.upload.max_total_bytes);
        for path in files {
            batch.push_path(path, mime)?;
        }
        debug!(
            file_count = batch.len(),
            total_bytes = batch.total_bytes(),
            "Upload batch loaded"
        );
        Ok(batch)
    }

    fn handle_commit(
        &self,
        files: &[PathBuf],
        mime: Option<&str>,
        recipient: Option<&str>,
        algorithm: Option<HashAlgorithm>,
        format: &str,
    ) -> Result<String, ApiError> {
        let mut commitment = self.config.commitment.clone();
        if let Some(recipient) = recipient {
            commitment.recipient = recipient.to_string();
        }
        if let Some(algorithm) = algorithm {
            commitment.hash_algorithm = algorithm;
        }

        let batch = self.load_batch(files, mime)?;
        let service = ProofOfInvention::from_config(&commitment);
        let result = service.commit(batch.files())?;
        info!(root = %result.root, file_count = result.files.len(), "Commit completed");

        match format {
            "text" => Ok(format_commit_text(&result, self.config.logging.color)),
            "json" => Ok(serde_json::to_string_pretty(&result)?),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }

    fn handle_hash(
        &self,
        files: &[PathBuf],
        mime: Option<&str>,
        algorithm: Option<HashAlgorithm>,
        format: &str,
    ) -> Result<String, ApiError> {
        let algorithm = algorithm.unwrap_or(self.config.commitment.hash_algorithm);
        let batch = self.load_batch(files, mime)?;
        let hasher = algorithm.hasher();
        let digests = digest_files(hasher.as_ref(), batch.files())?;

        match format {
            "text" => Ok(format_digests_text(&digests)),
            "json" => Ok(serde_json::to_string_pretty(&digests)?),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }
}
