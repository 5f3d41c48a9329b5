//! Configuration for the data-model generator.
//!
//! - **settings**: the `dbm.toml` schema and its conversion into generator inputs
//! - **paths**: config file discovery (`--config`, `DBM_CONFIG`, `./dbm.toml`)

pub mod error;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use paths::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, load_config, resolve_config_path};
pub use settings::{Config, GeneratorSection, TypesSection};
