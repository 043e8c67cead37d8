//! Workflow engine
//!
//! This module drives the batch: discover the sources, transform each one,
//! write the results and keep going past per-file failures.

use std::fs::create_dir_all;
use std::path::PathBuf;

use colored::Colorize;
use log::{debug, error, info, warn};

use crate::discovery::discover_sources;
use crate::errors::{Result, file_operation_error};
use crate::file_ops::write_atomically;
use crate::path_gen::TransformJob;
use crate::transform::DocumentTransformer;

use super::context::{BatchReport, FileOutcome};

/// Options for one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Directory searched for source documents
    pub input: PathBuf,
    /// Root of the generated tree
    pub output: PathBuf,
    /// Extension of the source documents
    pub source_extension: String,
    /// Extension of the generated documents
    pub target_extension: String,
    /// Ignore dot-files and dot-directories
    pub skip_hidden: bool,
    /// Only list what would be done
    pub dry_run: bool,
}

/// Transforms every source document under `options.input`
///
/// Documents are handled one at a time in path order. A document that fails
/// to parse, transform or write is logged, recorded in the report and
/// skipped; the destination is only written once its transform succeeded.
///
/// # Errors
/// Only conditions that prevent the batch from starting are returned: an
/// input path that is not a directory, or an output root that cannot be
/// created
pub fn run_batch<T>(options: &BatchOptions, transformer: &mut T) -> Result<BatchReport>
where
    T: DocumentTransformer + ?Sized,
{
    let mut report = BatchReport::new(options.dry_run);

    let documents = discover_sources(
        &options.input,
        &options.source_extension,
        options.skip_hidden,
    )?;
    report.stats.files_found = documents.len();

    if !options.dry_run {
        create_dir_all(&options.output).map_err(|e| {
            file_operation_error(e, options.output.clone(), "create output directory")
        })?;
    }

    if documents.is_empty() {
        info!(
            "No .{} files found in {}",
            options.source_extension,
            options.input.display()
        );
        return Ok(report);
    }

    info!(
        "Transforming {} files{}...",
        documents.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    for document in documents {
        info!("{}", document.relative.display());
        let job = TransformJob::new(document, &options.output, &options.target_extension);

        if options.dry_run {
            debug!(
                "Would write {} -> {}",
                job.source.path.display(),
                job.target.display()
            );
            report.record(FileOutcome::Planned(job));
            continue;
        }

        let outcome = match process_job(transformer, &job) {
            Ok(()) => FileOutcome::Transformed(job),
            Err(e) => {
                error!("Failed to produce {}: {e}", job.target.display());
                FileOutcome::Failed {
                    source: job.source.path,
                    target: job.target,
                    error: e,
                }
            }
        };
        report.record(outcome);
    }

    log_summary(&report);
    if options.dry_run {
        print_plan(&report);
    }

    Ok(report)
}

/// Transforms one document and writes it out
fn process_job<T>(transformer: &mut T, job: &TransformJob) -> Result<()>
where
    T: DocumentTransformer + ?Sized,
{
    let output = transformer.transform(job)?;
    write_atomically(&job.target, &output)?;
    debug!("Wrote {}", job.target.display());
    Ok(())
}

fn log_summary(report: &BatchReport) {
    let stats = &report.stats;
    if report.dry_run {
        info!(
            "Finished planning {} of {} files",
            stats.files_planned, stats.files_found
        );
        return;
    }

    info!(
        "Finished: {} found, {} transformed, {} failed",
        stats.files_found,
        stats.files_transformed,
        stats.failures()
    );
    if !report.is_success() {
        warn!(
            "Failures: {} parse, {} transform, {} write",
            stats.parse_failures, stats.transform_failures, stats.write_failures
        );
        for failure in &report.failures {
            warn!(
                "  {} ({}): {}",
                failure.source.display(),
                failure.error.kind(),
                failure.error
            );
        }
    }
}

fn print_plan(report: &BatchReport) {
    println!("\nPlanned transforms:");
    println!("-------------------");
    for job in &report.jobs {
        println!(
            "  {} -> {}",
            job.source.path.display(),
            job.target.display().to_string().bold()
        );
    }
    println!("\nRun without --dry flag to write these files.");
}
