//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::{DEFAULT_OUTPUT_DIR, SOURCE_EXTENSION, TARGET_EXTENSION};
use crate::utils::expand_path;

/// Configuration for the transform batch
///
/// Every key is optional in the YAML file; missing keys fall back to the
/// built-in defaults. Command-line flags override what is read here.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Stylesheet to apply; `None` means the one installed next to the executable
    pub stylesheet: Option<PathBuf>,
    /// Root of the generated tree
    pub output: PathBuf,
    /// Extension of the documents picked up under the input root
    pub source_extension: String,
    /// Extension given to generated documents
    pub target_extension: String,
    /// Pretty-print the generated documents
    pub indent: bool,
    /// Skip files and directories whose name starts with a dot
    pub skip_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stylesheet: None,
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            source_extension: SOURCE_EXTENSION.to_string(),
            target_extension: TARGET_EXTENSION.to_string(),
            indent: true,
            skip_hidden: false,
        }
    }
}

impl Config {
    /// Validates the configuration
    ///
    /// Extensions are used both in a glob pattern and in `Path::with_extension`,
    /// so they must be bare: non-empty, without dots, separators or glob
    /// metacharacters.
    pub fn validate(&self) -> Result<()> {
        validate_extension("source_extension", &self.source_extension)?;
        validate_extension("target_extension", &self.target_extension)?;

        if self.output.as_os_str().is_empty() {
            return Err(anyhow!(
                "The output directory is empty. Please specify a directory path."
            ));
        }

        if let Some(stylesheet) = &self.stylesheet
            && stylesheet.as_os_str().is_empty()
        {
            return Err(anyhow!(
                "The stylesheet path is empty. Remove the key to use the bundled stylesheet."
            ));
        }

        Ok(())
    }

    /// Expands `~` in every path of the configuration
    pub(crate) fn expand_paths(&mut self) {
        self.output = expand_path(&self.output);
        if let Some(stylesheet) = &self.stylesheet {
            self.stylesheet = Some(expand_path(stylesheet));
        }
    }
}

fn validate_extension(key: &str, extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(anyhow!("'{key}' must not be empty"));
    }
    if let Some(bad) = extension
        .chars()
        .find(|c| matches!(c, '.' | '/' | '\\' | '*' | '?' | '[' | ']'))
    {
        return Err(anyhow!(
            "'{key}' contains '{bad}': give the bare extension, e.g. 'xml'"
        ));
    }
    Ok(())
}
