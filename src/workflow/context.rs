//! Workflow context
//!
//! This module defines the per-file outcomes and the statistics gathered
//! while a batch runs.

use std::path::PathBuf;

use crate::errors::Error;
use crate::path_gen::TransformJob;

/// What happened to one source document
#[derive(Debug)]
pub enum FileOutcome {
    /// Output written to the job's target
    Transformed(TransformJob),
    /// Dry run: the job was planned but nothing was written
    Planned(TransformJob),
    /// Parsing, transforming or writing failed; nothing was written
    Failed {
        /// The document that failed
        source: PathBuf,
        /// The output it would have produced
        target: PathBuf,
        /// Why it failed
        error: Error,
    },
}

/// A failure kept for the end-of-batch summary
#[derive(Debug)]
pub struct FailedFile {
    pub source: PathBuf,
    pub target: PathBuf,
    pub error: Error,
}

/// Statistics about the batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of source documents found
    pub files_found: usize,
    /// Number of outputs written
    pub files_transformed: usize,
    /// Number of outputs planned in dry-run mode
    pub files_planned: usize,
    /// Sources that were unreadable or malformed
    pub parse_failures: usize,
    /// Sources the stylesheet failed on
    pub transform_failures: usize,
    /// Outputs that could not be written, or other per-file failures
    pub write_failures: usize,
}

impl BatchStats {
    /// Total number of failed files
    pub fn failures(&self) -> usize {
        self.parse_failures + self.transform_failures + self.write_failures
    }
}

/// Result of a whole batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Whether the batch only planned its work
    pub dry_run: bool,
    /// Counters
    pub stats: BatchStats,
    /// Planned or completed jobs, in processing order
    pub jobs: Vec<TransformJob>,
    /// Failed files, in processing order
    pub failures: Vec<FailedFile>,
}

impl BatchReport {
    /// Creates an empty report
    pub fn new(dry_run: bool) -> Self {
        BatchReport {
            dry_run,
            ..BatchReport::default()
        }
    }

    /// Records the outcome of one document
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Transformed(job) => {
                self.stats.files_transformed += 1;
                self.jobs.push(job);
            }
            FileOutcome::Planned(job) => {
                self.stats.files_planned += 1;
                self.jobs.push(job);
            }
            FileOutcome::Failed {
                source,
                target,
                error,
            } => {
                match &error {
                    Error::Parse { .. } => self.stats.parse_failures += 1,
                    Error::Transform { .. } => self.stats.transform_failures += 1,
                    _ => self.stats.write_failures += 1,
                }
                self.failures.push(FailedFile {
                    source,
                    target,
                    error,
                });
            }
        }
    }

    /// Whether every found document went through
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
