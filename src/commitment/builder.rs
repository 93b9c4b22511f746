//! Commitment builder for constructing Merkle commitments over leaf hashes

use crate::commitment::combiner::{NodeCombiner, PrefixedConcatCombiner};
use crate::digest::hasher::{ContentHasher, Sha256Hasher};
use crate::error::CommitmentError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};

/// One leaf as presented in the commitment, with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafValue {
    pub value: String,
    pub tree_index: usize,
}

/// Result of building a Merkle tree over an ordered set of leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleCommitment {
    /// Top-level hash committing to every leaf and its position
    pub root: String,
    /// Root first, then the earlier generated parents in reverse generation order.
    /// Leaves are omitted unless the single leaf is itself the root.
    pub tree: Vec<String>,
    /// Leaves in submission order
    pub values: Vec<LeafValue>,
}

impl MerkleCommitment {
    /// Number of leaves committed to.
    pub fn leaf_count(&self) -> usize {
        self.values.len()
    }

    /// Leaf hashes in submission order.
    pub fn leaves(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.value.as_str())
    }
}

/// Builds [`MerkleCommitment`]s with a pluggable digest and combination rule.
#[derive(Clone)]
pub struct CommitmentBuilder {
    hasher: Arc<dyn ContentHasher>,
    combiner: Arc<dyn NodeCombiner>,
}

impl Default for CommitmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommitmentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitmentBuilder")
            .field("hasher", &self.hasher.name())
            .field("combiner", &self.combiner.name())
            .finish()
    }
}

impl CommitmentBuilder {
    /// SHA-256 with the prefixed-concatenation rule.
    pub fn new() -> Self {
        Self {
            hasher: Arc::new(Sha256Hasher),
            combiner: Arc::new(PrefixedConcatCombiner),
        }
    }

    /// Replace the digest used for parent nodes.
    pub fn with_hasher(mut self, hasher: Arc<dyn ContentHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Replace the parent combination rule.
    pub fn with_combiner(mut self, combiner: Arc<dyn NodeCombiner>) -> Self {
        self.combiner = combiner;
        self
    }

    /// Digest shared with the leaf hashing step.
    pub fn hasher(&self) -> &dyn ContentHasher {
        self.hasher.as_ref()
    }

    /// Build the commitment for `leaves`, in the given order.
    ///
    /// Levels are reduced pairwise left to right. A trailing unpaired node is
    /// combined with itself rather than promoted. A single leaf is its own root.
    /// Leaves are taken as given; only a combiner that decodes its operands
    /// (such as [`RawBytesCombiner`](crate::commitment::RawBytesCombiner)) can
    /// reject one as malformed.
    #[instrument(skip_all, fields(leaf_count = leaves.len(), hasher = self.hasher.name(), combiner = self.combiner.name()))]
    pub fn build<S: AsRef<str>>(&self, leaves: &[S]) -> Result<MerkleCommitment, CommitmentError> {
        let start = Instant::now();

        if leaves.is_empty() {
            warn!("Refusing to build commitment over zero leaves");
            return Err(CommitmentError::EmptyInput);
        }

        let mut level: Vec<String> = leaves.iter().map(|l| l.as_ref().to_string()).collect();

        let values = level
            .iter()
            .enumerate()
            .map(|(index, value)| LeafValue {
                value: value.clone(),
                tree_index: index + 1,
            })
            .collect();

        let mut generated: Vec<String> = Vec::new();
        let mut depth = 0usize;
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for pair in level.chunks(2) {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                if pair.len() == 1 {
                    trace!(depth, "Duplicating unpaired node");
                }
                let parent = self.combiner.combine(self.hasher.as_ref(), left, right)?;
                generated.push(parent.clone());
                next.push(parent);
            }
            depth += 1;
            debug!(depth, width = next.len(), "Reduced level");
            level = next;
        }

        let root = match generated.pop() {
            Some(root) => root,
            // N = 1: no combination ran, the leaf is the root
            None => level.remove(0),
        };
        let mut tree = Vec::with_capacity(generated.len() + 1);
        tree.push(root.clone());
        tree.extend(generated.into_iter().rev());

        info!(
            root = %root,
            tree_len = tree.len(),
            duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "Commitment built"
        );

        Ok(MerkleCommitment { root, tree, values })
    }

    /// Rebuild `commitment` from its leaves and check root and tree match.
    pub fn verify(&self, commitment: &MerkleCommitment) -> bool {
        let indices_in_order = commitment
            .values
            .iter()
            .enumerate()
            .all(|(index, v)| v.tree_index == index + 1);
        if !indices_in_order {
            return false;
        }

        let leaves: Vec<&str> = commitment.leaves().collect();
        match self.build(&leaves) {
            Ok(rebuilt) => rebuilt.root == commitment.root && rebuilt.tree == commitment.tree,
            Err(e) => {
                debug!("Commitment verification failed to rebuild: {}", e);
                false
            }
        }
    }
}
