//! Configuration module
//!
//! This module handles client configuration: defaults, layered loading
//! from a file and the environment, and validation.

pub mod defaults;
mod error;
mod loader;
mod types;
mod validator;

pub use self::defaults::ENV_PREFIX;
pub use self::error::ConfigError;
pub use self::loader::load_config;
pub use self::types::ClientConfig;
pub use self::validator::validate_config;
