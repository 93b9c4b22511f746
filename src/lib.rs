//! poi-merkle: Proof-of-Invention Commitments
//!
//! Content-addresses a batch of uploaded files and commits to the whole,
//! ordered set with a single Merkle root. The output carries the root, the
//! generated tree nodes, per-file digests and a transaction payload for an
//! external submitter.

pub mod cli;
pub mod commitment;
pub mod config;
pub mod digest;
pub mod error;
pub mod invention;
pub mod logging;
pub mod types;
pub mod upload;

pub use commitment::{CommitmentBuilder, MerkleCommitment};
pub use digest::{FileDigest, FileInput};
pub use error::{ApiError, CommitmentError};
pub use invention::{ProofOfInvention, ProofOfInventionResult, TREE_FORMAT};
