//! Global config file: `$XDG_CONFIG_HOME/repomap/config.toml` (optional)

use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use tracing::debug;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg_root::global_config_file() {
        Ok(path) => {
            debug!(path = %path.display(), "global config source");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        // No HOME: skip the global layer rather than fail.
        Err(_) => Ok(builder),
    }
}
