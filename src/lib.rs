//! Batch conversion of docutils XML trees into PreTeXt.
//!
//! Every `.xml` file under an input directory is run through one XSLT
//! stylesheet and written to the same relative location under an output
//! directory. A file that fails to parse or transform is reported and skipped;
//! the rest of the batch carries on.

pub mod cli;
pub mod config;
mod configuration;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod transform;
pub mod utils;
pub mod workflow;

pub use configuration::{
    batch_options, perform_transform_based_on_configuration, resolve_stylesheet,
};

pub mod prelude {
    pub use crate::cli::{CliOptions, TransformArgs, get_matches, parse_options};
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, init_logger};
    pub use crate::perform_transform_based_on_configuration;
    pub use crate::workflow::{BatchOptions, BatchReport, run_batch};
}
