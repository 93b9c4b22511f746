//! Integration tests for layered configuration loading

use super::test_utils::with_isolated_env;
use poi_merkle::config::{ConfigLoader, DEFAULT_RECIPIENT};
use poi_merkle::digest::HashAlgorithm;
use poi_merkle::ProofOfInvention;
use std::fs;
use tempfile::TempDir;

/// No files anywhere: defaults apply
#[test]
fn test_defaults_without_files() {
    let env_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_isolated_env(&env_dir, &[], || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.commitment.recipient, DEFAULT_RECIPIENT);
    assert_eq!(config.commitment.hash_algorithm, HashAlgorithm::Sha256);
    assert_eq!(config.upload.max_total_bytes, 100 * 1024 * 1024);
}

/// Workspace file overrides the global file
#[test]
fn test_workspace_overrides_global() {
    let env_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    fs::create_dir_all(env_dir.path().join("poi")).unwrap();
    fs::write(
        env_dir.path().join("poi").join("config.toml"),
        "[commitment]\nrecipient = \"0xglobal\"\nhash_algorithm = \"blake3\"\n",
    )
    .unwrap();
    fs::create_dir_all(workspace.path().join("config")).unwrap();
    fs::write(
        workspace.path().join("config").join("config.toml"),
        "[commitment]\nrecipient = \"0xworkspace\"\n",
    )
    .unwrap();

    let config = with_isolated_env(&env_dir, &[], || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.commitment.recipient, "0xworkspace");
    assert_eq!(config.commitment.hash_algorithm, HashAlgorithm::Blake3);
}

/// Environment-specific workspace file is layered on the base file
#[test]
fn test_env_specific_workspace_file() {
    let env_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let config_dir = workspace.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[upload]\nmax_total_bytes = 100\n").unwrap();
    fs::write(config_dir.join("production.toml"), "[upload]\nmax_total_bytes = 200\n").unwrap();

    let config = with_isolated_env(&env_dir, &[("POI_ENV", "production")], || {
        ConfigLoader::load(workspace.path()).unwrap()
    });
    assert_eq!(config.upload.max_total_bytes, 200);
}

/// Environment variables win over files
#[test]
fn test_environment_overrides_files() {
    let env_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    fs::create_dir_all(workspace.path().join("config")).unwrap();
    fs::write(
        workspace.path().join("config").join("config.toml"),
        "[commitment]\nrecipient = \"0xfile\"\n",
    )
    .unwrap();

    let config = with_isolated_env(
        &env_dir,
        &[("POI__COMMITMENT__RECIPIENT", "0xenvironment")],
        || ConfigLoader::load(workspace.path()).unwrap(),
    );
    assert_eq!(config.commitment.recipient, "0xenvironment");
}

/// Loaded recipient flows into results
#[test]
fn test_config_drives_result() {
    let env_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    fs::create_dir_all(workspace.path().join("config")).unwrap();
    fs::write(
        workspace.path().join("config").join("config.toml"),
        "[commitment]\nrecipient = \"0xdeployment\"\n",
    )
    .unwrap();

    let config = with_isolated_env(&env_dir, &[], || ConfigLoader::load(workspace.path()).unwrap());
    let result = ProofOfInvention::from_config(&config.commitment)
        .commit(&[poi_merkle::FileInput::new(b"a".to_vec(), "a", "text/plain")])
        .unwrap();
    assert_eq!(result.transaction.recipient, "0xdeployment");
}
