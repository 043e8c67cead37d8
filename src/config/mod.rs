//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{load_config, load_config_from_str, locate_config, load_or_default};
pub use model::Config;
