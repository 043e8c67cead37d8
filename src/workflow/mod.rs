//! Workflow module
//!
//! This module contains components for orchestrating the batch.

mod context;
mod engine;

pub use context::{BatchReport, BatchStats, FailedFile, FileOutcome};
pub use engine::{BatchOptions, run_batch};
