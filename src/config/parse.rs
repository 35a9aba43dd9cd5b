//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, GenplotError};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file names searched in the working directory and its parents
const CONFIG_FILE_NAMES: &[&str] = &["cdf-genplot.yml", ".cdf-genplot.yml"];

/// File name of the per-user configuration
const USER_CONFIG_FILE_NAME: &str = "config.yml";

/// Find a project configuration file by searching current and parent directories
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = env::current_dir().ok()?;
    find_config_file_from(current_dir)
}

/// Find a project configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);

            if config_path.is_file() {
                return Some(config_path);
            }
        }

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Path of the per-user configuration file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cdf-genplot")
        .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE_NAME))
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, GenplotError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
///
/// An empty document is the same as an empty mapping.
pub fn parse_config(yaml: &str) -> Result<Config, GenplotError> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Load the configuration for this invocation
///
/// An explicit path must exist. Otherwise the project file nearest to the
/// working directory wins, then the per-user file. Returns the path the
/// configuration was read from, if any.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>), GenplotError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let config = parse_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let discovered = find_config_file().or_else(|| user_config_path().filter(|p| p.is_file()));

    match discovered {
        Some(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}
