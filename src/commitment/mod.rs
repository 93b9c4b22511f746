//! Merkle Commitment
//!
//! Builds a binary hash tree bottom-up over ordered leaf hashes and presents
//! the root, the generated nodes, and the leaf index assignments.

pub mod builder;
pub mod combiner;

pub use builder::{CommitmentBuilder, LeafValue, MerkleCommitment};
pub use combiner::{NodeCombiner, PrefixedConcatCombiner, RawBytesCombiner};
