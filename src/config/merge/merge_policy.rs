//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("commitment.recipient", crate::config::DEFAULT_RECIPIENT)?
        .set_default("commitment.hash_algorithm", "sha256")?
        .set_default("upload.max_total_bytes", crate::config::DEFAULT_MAX_TOTAL_BYTES as i64)
}
