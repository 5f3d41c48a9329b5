//! Config file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::settings::Config;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "DBM_CONFIG";

/// Looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "dbm.toml";

/// Config file to load, if any.
///
/// Resolution order:
/// 1. `explicit` (the `--config` flag)
/// 2. `DBM_CONFIG` environment variable
/// 3. `dbm.toml` in the working directory, when it exists
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    let env_value = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_from(explicit, env_value, &cwd)
}

fn resolve_from(explicit: Option<&Path>, env_value: Option<PathBuf>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}

/// Load the resolved config, or defaults when there is none.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match resolve_config_path(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(&path)
        }
        None => {
            debug!("no config file; using defaults");
            Ok(Config::default())
        }
    }
}
