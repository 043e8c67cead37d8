//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating the
//! YAML configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::from_str;

use crate::utils::find_project_folder;

use super::model::Config;

/// Loads a configuration from a file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid YAML, has unknown
/// keys or fails validation
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    load_config_from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })
}

/// Parses and validates configuration text
///
/// An empty document yields the default configuration.
pub fn load_config_from_str(content: &str) -> Result<Config> {
    let mut config: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        from_str(content)?
    };

    config.expand_paths();
    config.validate()?;

    Ok(config)
}

/// Finds the configuration file to use
///
/// The path is taken as given when it exists; otherwise it is looked up in the
/// platform configuration directory. `None` means no file exists in either
/// place.
pub fn locate_config(config: &Path) -> Option<PathBuf> {
    if config.exists() {
        return Some(config.to_path_buf());
    }

    // A path with directories in it is an explicit location, not a name to look up
    if config.components().count() > 1 {
        return None;
    }

    let folder = find_project_folder().ok()?;
    let candidate = folder.config_dir().join(config);
    candidate.exists().then_some(candidate)
}

/// Loads the configuration if a file can be found, or the defaults otherwise
pub fn load_or_default(config: &Path) -> Result<Config> {
    match locate_config(config) {
        Some(path) => {
            info!("Using configuration {}", path.display());
            load_config(&path)
        }
        None => {
            debug!(
                "No configuration file {} found, using defaults",
                config.display()
            );
            Ok(Config::default())
        }
    }
}
