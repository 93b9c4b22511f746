//! Property-based tests for determinism and ordering guarantees

use poi_merkle::commitment::CommitmentBuilder;
use poi_merkle::digest::{digest_files, FileInput, Sha256Hasher};
use poi_merkle::ProofOfInvention;
use proptest::prelude::*;

fn files_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..256), 1..12)
}

fn to_inputs(contents: &[Vec<u8>]) -> Vec<FileInput> {
    contents
        .iter()
        .enumerate()
        .map(|(i, bytes)| FileInput::new(bytes.clone(), format!("file-{}", i), "application/octet-stream"))
        .collect()
}

proptest! {
    /// Digesting the same bytes twice yields the same hashes
    #[test]
    fn prop_digest_deterministic(contents in files_strategy()) {
        let files = to_inputs(&contents);
        let first = digest_files(&Sha256Hasher, &files).unwrap();
        let second = digest_files(&Sha256Hasher, &files).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Content hash ignores filename and mime type
    #[test]
    fn prop_hash_independent_of_metadata(bytes in prop::collection::vec(any::<u8>(), 0..512), name in "[a-z]{1,12}") {
        let a = digest_files(&Sha256Hasher, &[FileInput::new(bytes.clone(), name, "text/plain")]).unwrap();
        let b = digest_files(&Sha256Hasher, &[FileInput::new(bytes, "other", "image/png")]).unwrap();
        prop_assert_eq!(&a[0].content_hash, &b[0].content_hash);
    }

    /// Every result is internally consistent
    #[test]
    fn prop_result_consistency(contents in files_strategy()) {
        let files = to_inputs(&contents);
        let result = ProofOfInvention::new("0xrecipient").commit(&files).unwrap();

        prop_assert_eq!(&result.merkle_tree.tree[0], &result.root);
        prop_assert_eq!(&result.transaction.payload, &result.root);
        prop_assert_eq!(result.files.len(), files.len());
        for (i, value) in result.merkle_tree.values.iter().enumerate() {
            prop_assert_eq!(value.tree_index, i + 1);
            prop_assert_eq!(&value.value, &result.files[i].content_hash);
            prop_assert_eq!(result.files[i].size, contents[i].len() as u64);
        }
        if files.len() == 1 {
            prop_assert_eq!(&result.root, &result.files[0].content_hash);
        }
    }

    /// Rebuilding from the published values reproduces the commitment
    #[test]
    fn prop_commitment_rebuilds(contents in files_strategy()) {
        let files = to_inputs(&contents);
        let builder = CommitmentBuilder::new();
        let result = ProofOfInvention::new("0xrecipient").commit(&files).unwrap();
        let leaves: Vec<&str> = result.merkle_tree.values.iter().map(|v| v.value.as_str()).collect();
        let rebuilt = builder.build(&leaves).unwrap();
        prop_assert_eq!(&rebuilt.root, &result.root);
        prop_assert_eq!(&rebuilt.tree, &result.merkle_tree.tree);
    }

    /// Swapping two distinct leaves changes the root
    #[test]
    fn prop_swap_changes_root(a in prop::collection::vec(any::<u8>(), 1..64), b in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assume!(a != b);
        let service = ProofOfInvention::new("0xrecipient");
        let forward = service.commit(&to_inputs(&[a.clone(), b.clone()])).unwrap();
        let backward = service.commit(&to_inputs(&[b, a])).unwrap();
        prop_assert_ne!(forward.root, backward.root);
    }
}
