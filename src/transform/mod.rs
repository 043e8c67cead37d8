//! Document transformation module
//!
//! This module applies the stylesheet to single source documents. Writing the
//! result is left to the caller so that nothing touches the destination unless
//! the transform succeeded.

mod params;
mod xslt;

pub use params::{TransformParameters, xpath_string_literal};
pub use xslt::XsltTransformer;

use crate::errors::Result;
use crate::path_gen::TransformJob;

/// Turns one source document into the serialized output document
pub trait DocumentTransformer {
    /// Parses `job.source`, applies the stylesheet and returns the output text
    ///
    /// # Errors
    /// A parse error when the source is unreadable or malformed, a transform
    /// error when the stylesheet fails on it
    fn transform(&mut self, job: &TransformJob) -> Result<String>;
}
