//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Error, Result};

use super::types::Config;

/// File names probed when searching for a configuration file
const CONFIG_FILE_NAMES: &[&str] = &["liftoff.toml", ".liftoff.toml"];

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    info!(path = %path.display(), "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: Config = toml::from_str(&content).map_err(ConfigError::Toml)?;

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find a configuration file in the directory or its parents.
///
/// The first match wins; parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration or fall back to defaults
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match find_config(dir) {
        Some(path) => match load_config(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                (Config::default(), None)
            }
        },
        None => (Config::default(), None),
    }
}

fn validate_config(config: &Config) -> Result<()> {
    // A prefix containing digits or '.' would make version stripping ambiguous
    if config
        .version
        .prefix
        .chars()
        .any(|c| c.is_ascii_digit() || c == '.')
    {
        return Err(Error::Config(ConfigError::InvalidValue {
            field: "version.prefix".to_string(),
            message: "prefix must not contain digits or '.'".to_string(),
        }));
    }

    if config.version.file.is_empty() {
        return Err(Error::Config(ConfigError::InvalidValue {
            field: "version.file".to_string(),
            message: "version file path must not be empty".to_string(),
        }));
    }

    Ok(())
}
