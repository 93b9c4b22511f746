//! Digest Verification Tests
//!
//! Checks that file digests are plain SHA-256 over the raw bytes and that
//! metadata never leaks into the content hash.

use super::test_utils::file;
use poi_merkle::digest::{digest_files, Blake3Hasher, ContentHasher, FileInput, Sha256Hasher};
use poi_merkle::CommitmentError;
use sha2::{Digest, Sha256};

/// Content hash matches SHA-256 computed directly
#[test]
fn test_content_hash_matches_sha256() {
    let content = b"invention disclosure v1";
    let digests = digest_files(&Sha256Hasher, &[file(content, "disclosure.pdf")]).unwrap();

    let direct = format!("0x{}", hex::encode(Sha256::digest(content)));
    assert_eq!(digests[0].content_hash, direct);
}

/// Identical bytes hash identically across names and mime types
#[test]
fn test_identical_bytes_identical_hash() {
    let files = vec![
        FileInput::new(b"same bytes".to_vec(), "a.pdf", "application/pdf"),
        FileInput::new(b"same bytes".to_vec(), "copy of a.pdf", "text/plain"),
    ];
    let digests = digest_files(&Sha256Hasher, &files).unwrap();
    assert_eq!(digests[0].content_hash, digests[1].content_hash);
}

/// Repeated runs give the same hashes
#[test]
fn test_digest_determinism() {
    let files = vec![file(b"one", "1"), file(b"two", "2"), file(&[0u8; 4096], "3")];
    let first = digest_files(&Sha256Hasher, &files).unwrap();
    let second = digest_files(&Sha256Hasher, &files).unwrap();
    assert_eq!(first, second);
}

/// Hash encoding is 0x plus 64 lowercase hex characters
#[test]
fn test_hash_encoding() {
    let hashers: [&dyn ContentHasher; 2] = [&Sha256Hasher, &Blake3Hasher];
    for hasher in hashers {
        let digests = digest_files(hasher, &[file(b"\xff\x00binary", "bin")]).unwrap();
        let hash = &digests[0].content_hash;
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

/// Empty batches are rejected
#[test]
fn test_empty_batch_rejected() {
    assert_eq!(
        digest_files(&Sha256Hasher, &[]),
        Err(CommitmentError::EmptyInput)
    );
}

/// Empty files are valid input
#[test]
fn test_zero_length_file() {
    let digests = digest_files(&Sha256Hasher, &[file(b"", "empty")]).unwrap();
    assert_eq!(digests[0].size, 0);
    assert_eq!(
        digests[0].content_hash,
        "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}
