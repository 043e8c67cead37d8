//! File operations module
//!
//! This module contains components for writing generated documents.

mod writer;

pub use writer::write_atomically;
