//! Output path mirroring
//!
//! Generated documents land under the output root at the same relative
//! location as their source, with the target extension.

use std::path::{Path, PathBuf};

use crate::discovery::SourceDocument;

/// Source document paired with the file it will be written to
#[derive(Debug, Clone, PartialEq)]
pub struct TransformJob {
    /// The document to transform
    pub source: SourceDocument,
    /// Where the result goes
    pub target: PathBuf,
}

impl TransformJob {
    /// Plans the output location of `source` under `out_root`
    pub fn new(source: SourceDocument, out_root: &Path, target_extension: &str) -> Self {
        let target = mirror_output_path(out_root, &source.relative, target_extension);
        TransformJob { source, target }
    }
}

/// Joins `relative` under `out_root` and swaps its extension
///
/// Only the last extension is replaced, so `notes.v2.xml` becomes
/// `notes.v2.ptx`.
pub fn mirror_output_path(out_root: &Path, relative: &Path, target_extension: &str) -> PathBuf {
    out_root.join(relative).with_extension(target_extension)
}
