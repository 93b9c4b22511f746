//! Shared test utilities for integration tests
//!
//! Serializes environment mutation so config tests can point the loader at
//! isolated directories without racing each other.

use poi_merkle::commitment::{NodeCombiner, PrefixedConcatCombiner};
use poi_merkle::digest::{ContentHasher, FileInput, Sha256Hasher};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    vars: Vec<(&'static str, Option<String>)>,
}

const MANAGED_VARS: [&str; 4] = ["HOME", "XDG_CONFIG_HOME", "POI_ENV", "POI__COMMITMENT__RECIPIENT"];

impl EnvState {
    fn capture() -> Self {
        Self {
            vars: MANAGED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.vars {
            match value {
                Some(orig) => std::env::set_var(name, orig),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`.
///
/// The global config file then lives at `<test_dir>/poi/config.toml`.
/// Extra variables in `vars` are set for the duration of the call.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().to_str().unwrap());
    std::env::remove_var("POI_ENV");
    std::env::remove_var("POI__COMMITMENT__RECIPIENT");
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    env_state.restore();

    result
}

/// In-memory file with a fixed mime type.
pub fn file(bytes: &[u8], name: &str) -> FileInput {
    FileInput::new(bytes.to_vec(), name, "application/octet-stream")
}

/// SHA-256 leaf hash of `bytes`.
pub fn leaf(bytes: &[u8]) -> String {
    Sha256Hasher.hash_hex(bytes)
}

/// Parent of two nodes under the default combination rule.
pub fn combine(left: &str, right: &str) -> String {
    PrefixedConcatCombiner
        .combine(&Sha256Hasher, left, right)
        .unwrap()
}

/// Independent recursive root: reduce one level, recurse on the next.
pub fn reference_root(level: &[String]) -> String {
    if level.len() == 1 {
        return level[0].clone();
    }
    let next: Vec<String> = level
        .chunks(2)
        .map(|pair| combine(&pair[0], pair.get(1).unwrap_or(&pair[0])))
        .collect();
    reference_root(&next)
}

/// Independent recursive count of generated nodes, root included.
pub fn reference_generated_count(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let next = (n + 1) / 2;
    next + reference_generated_count(next)
}
