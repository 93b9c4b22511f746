//! Shared hash types and the `0x` hex convention used for every hash on the wire.

use crate::error::CommitmentError;

/// Raw 32-byte digest.
pub type Hash = [u8; 32];

/// Prefix carried by every hex-encoded hash.
pub const HEX_PREFIX: &str = "0x";

/// Length of a prefixed hash string: `0x` plus 64 hex characters.
pub const PREFIXED_HASH_LEN: usize = 66;

/// Encode a digest as lowercase hex with the `0x` prefix.
pub fn to_prefixed_hex(hash: &Hash) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(hash))
}

/// Strip the `0x` prefix, if present.
pub fn strip_prefix(value: &str) -> &str {
    value.strip_prefix(HEX_PREFIX).unwrap_or(value)
}

/// Parse a `0x`-prefixed 32-byte hash.
pub fn parse_prefixed_hex(value: &str) -> Result<Hash, CommitmentError> {
    let digits = value
        .strip_prefix(HEX_PREFIX)
        .ok_or_else(|| CommitmentError::MalformedHash(value.to_string()))?;
    if digits.len() != PREFIXED_HASH_LEN - HEX_PREFIX.len() {
        return Err(CommitmentError::MalformedHash(value.to_string()));
    }
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|_| CommitmentError::MalformedHash(value.to_string()))?;
    Ok(out)
}
