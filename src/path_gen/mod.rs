//! Path generation module
//!
//! This module maps source documents to their destination paths.

mod mirror;

pub use mirror::{TransformJob, mirror_output_path};
