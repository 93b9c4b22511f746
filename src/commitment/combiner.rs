//! Parent-node combination rules
//!
//! A combiner turns two `0x`-prefixed child hashes into their parent hash.
//! The default [`PrefixedConcatCombiner`] is the wire contract every issued
//! root depends on: the left operand keeps its `0x`, the right operand loses
//! it, and the joined text is hashed as UTF-8 bytes. Changing either side of
//! that rule changes every root.

use crate::digest::hasher::ContentHasher;
use crate::error::CommitmentError;
use crate::types::{parse_prefixed_hex, strip_prefix, to_prefixed_hex};

/// Combination of two child hashes into a parent hash.
pub trait NodeCombiner: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Compute the `0x`-prefixed parent of `left` and `right`.
    fn combine(
        &self,
        hasher: &dyn ContentHasher,
        left: &str,
        right: &str,
    ) -> Result<String, CommitmentError>;
}

/// `hash("0x" + left_hex + right_hex)` over the text bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedConcatCombiner;

impl PrefixedConcatCombiner {
    /// The exact text that gets hashed for a pair.
    pub fn preimage(left: &str, right: &str) -> String {
        let right = strip_prefix(right);
        let mut joined = String::with_capacity(left.len() + right.len());
        joined.push_str(left);
        joined.push_str(right);
        joined
    }
}

impl NodeCombiner for PrefixedConcatCombiner {
    fn name(&self) -> &'static str {
        "prefixed-concat"
    }

    fn combine(
        &self,
        hasher: &dyn ContentHasher,
        left: &str,
        right: &str,
    ) -> Result<String, CommitmentError> {
        Ok(hasher.hash_hex(Self::preimage(left, right).as_bytes()))
    }
}

/// `hash(left_bytes || right_bytes)` over the decoded 32-byte children.
///
/// Not compatible with [`PrefixedConcatCombiner`] roots. Useful for checking
/// trees against verifiers that combine raw digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBytesCombiner;

impl NodeCombiner for RawBytesCombiner {
    fn name(&self) -> &'static str {
        "raw-bytes"
    }

    fn combine(
        &self,
        hasher: &dyn ContentHasher,
        left: &str,
        right: &str,
    ) -> Result<String, CommitmentError> {
        let left = parse_prefixed_hex(left)?;
        let right = parse_prefixed_hex(right)?;
        let mut preimage = [0u8; 64];
        preimage[..32].copy_from_slice(&left);
        preimage[32..].copy_from_slice(&right);
        Ok(to_prefixed_hex(&hasher.hash(&preimage)))
    }
}
