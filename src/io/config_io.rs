use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Config filename looked up in the working directory when no explicit
/// path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".jot.toml";

/// Error loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Resolve the config to use: an explicit path must exist and parse;
/// otherwise `.jot.toml` in the working directory is used when present;
/// otherwise built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                read_config(default)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}
