use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::cli::CliOptions;
use crate::config::{Config, load_or_default};
use crate::constants::STYLESHEET_FILENAME;
use crate::transform::XsltTransformer;
use crate::utils::expand_path;
use crate::workflow::{BatchOptions, BatchReport, run_batch};

/// Loads the configuration, the stylesheet and runs the batch
///
/// # Errors
/// Returns an error for conditions that keep the batch from starting: an
/// invalid configuration, a stylesheet that is missing or does not compile,
/// an input path that is not a directory, or an output root that cannot be
/// created. Per-file failures are reported in the returned [`BatchReport`].
pub fn perform_transform_based_on_configuration(options: &CliOptions) -> Result<BatchReport> {
    let configuration = load_or_default(&options.config)?;

    let batch = batch_options(options, &configuration);
    let stylesheet = resolve_stylesheet(options, &configuration)?;

    let mut transformer = XsltTransformer::load(&stylesheet, configuration.indent)?;
    info!("Using stylesheet {}", transformer.stylesheet_path().display());

    let report = run_batch(&batch, &mut transformer)?;
    Ok(report)
}

/// Combines command-line arguments with the configuration
///
/// Command-line values win over configuration values.
pub fn batch_options(options: &CliOptions, configuration: &Config) -> BatchOptions {
    let output = options
        .transform
        .out
        .as_deref()
        .map(expand_path)
        .unwrap_or_else(|| configuration.output.clone());

    BatchOptions {
        input: expand_path(&options.transform.xml),
        output,
        source_extension: configuration.source_extension.clone(),
        target_extension: configuration.target_extension.clone(),
        skip_hidden: configuration.skip_hidden,
        dry_run: options.transform.dry_run,
    }
}

/// Picks the stylesheet: command line, then configuration, then the file
/// installed next to the executable
pub fn resolve_stylesheet(options: &CliOptions, configuration: &Config) -> Result<PathBuf> {
    if let Some(stylesheet) = &options.transform.stylesheet {
        return Ok(expand_path(stylesheet));
    }
    if let Some(stylesheet) = &configuration.stylesheet {
        return Ok(stylesheet.clone());
    }

    let executable = std::env::current_exe().context("Failed to locate the running executable")?;
    let directory = executable
        .parent()
        .context("The running executable has no parent directory")?;
    Ok(directory.join(STYLESHEET_FILENAME))
}
