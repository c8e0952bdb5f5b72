//! Configuration loader implementation
//!
//! Configuration is layered with the `config` crate:
//! 1. Default values (lowest priority)
//! 2. Configuration file, if one is given
//! 3. Environment variables prefixed with `WEBPROF_`
//!
//! Command-line flags are applied afterwards by the caller.

use std::path::Path;
use ::config::{Config, Environment, File, FileFormat};

use crate::config::defaults;
use crate::config::error::{ConfigError, Result};
use crate::config::types::ClientConfig;

/// Load configuration from an optional JSON file and the environment
///
/// The result is not validated: command-line overrides still have to be
/// applied, after which the caller runs `validate_config` once.
pub fn load_config(config_file: Option<&Path>) -> Result<ClientConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_file {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        builder = builder.add_source(File::from(path).format(FileFormat::Json).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(defaults::ENV_PREFIX)
            .prefix_separator("_")
            .try_parsing(true)
    );

    Ok(builder.build()?.try_deserialize()?)
}
