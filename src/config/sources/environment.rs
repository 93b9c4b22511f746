//! Environment variable source: POI_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses POI_ prefix and __ as separator for nested keys,
/// e.g. `POI__COMMITMENT__RECIPIENT`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("POI")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
