//! MergeService: orchestrates sources, applies merge policy, deserializes to PoiConfig.

use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::PoiConfig;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from workspace and standard sources.
    /// Precedence: global file (lowest) -> workspace base -> workspace env -> environment (highest).
    pub fn load(workspace_root: &Path) -> Result<PoiConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        debug!(workspace = %workspace_root.display(), "Configuration sources merged");
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<PoiConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
