//! Merge policy: every build starts from the serialized built-in defaults so
//! partial files only override the keys they name.

use crate::config::RepoMapConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with [`RepoMapConfig::default`].
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&RepoMapConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
