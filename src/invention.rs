//! Proof-of-invention result assembly
//!
//! Runs the digest and commitment steps for one batch of files and bundles the
//! outcome with the deployment's recipient identifier. The result is a plain
//! value: nothing here is persisted or submitted anywhere.

use crate::commitment::{CommitmentBuilder, LeafValue, MerkleCommitment};
use crate::config::CommitmentConfig;
use crate::digest::{digest_files, FileDigest, FileInput};
use crate::error::CommitmentError;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Tree encoding tag carried in every result.
pub const TREE_FORMAT: &str = "standard-v1";

/// Commitment response for one batch of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofOfInventionResult {
    pub root: String,
    pub merkle_tree: MerkleTreeView,
    pub transaction: TransactionPayload,
    pub files: Vec<FileDigest>,
}

/// Format-tagged view of a [`MerkleCommitment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleTreeView {
    pub format: String,
    pub tree: Vec<String>,
    pub values: Vec<LeafValue>,
}

impl From<MerkleCommitment> for MerkleTreeView {
    fn from(commitment: MerkleCommitment) -> Self {
        Self {
            format: TREE_FORMAT.to_string(),
            tree: commitment.tree,
            values: commitment.values,
        }
    }
}

/// Data an external submitter needs to anchor the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub payload: String,
    pub recipient: String,
}

/// Commitment service bound to one deployment's recipient and strategies.
#[derive(Debug, Clone)]
pub struct ProofOfInvention {
    builder: CommitmentBuilder,
    recipient: String,
}

impl ProofOfInvention {
    /// Default strategies (SHA-256, prefixed concatenation).
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            builder: CommitmentBuilder::new(),
            recipient: recipient.into(),
        }
    }

    /// Recipient and digest algorithm taken from configuration.
    pub fn from_config(config: &CommitmentConfig) -> Self {
        Self {
            builder: CommitmentBuilder::new().with_hasher(config.hash_algorithm.hasher()),
            recipient: config.recipient.clone(),
        }
    }

    /// Replace the commitment builder, and with it the digest and combiner.
    pub fn with_builder(mut self, builder: CommitmentBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Digest `files` and commit to them in the given order.
    ///
    /// Either every file is included or the call fails; an empty batch fails
    /// with [`CommitmentError::EmptyInput`].
    #[instrument(skip_all, fields(file_count = files.len()))]
    pub fn commit(&self, files: &[FileInput]) -> Result<ProofOfInventionResult, CommitmentError> {
        let digests = digest_files(self.builder.hasher(), files)?;
        let leaves: Vec<&str> = digests.iter().map(|d| d.content_hash.as_str()).collect();
        let commitment = self.builder.build(&leaves)?;

        let root = commitment.root.clone();
        info!(root = %root, recipient = %self.recipient, "Proof of invention assembled");

        Ok(ProofOfInventionResult {
            root: root.clone(),
            merkle_tree: MerkleTreeView::from(commitment),
            transaction: TransactionPayload {
                payload: root,
                recipient: self.recipient.clone(),
            },
            files: digests,
        })
    }
}
