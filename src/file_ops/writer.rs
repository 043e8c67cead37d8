//! Output writing
//!
//! Generated documents are written to a temporary file next to the
//! destination and renamed over it, so an interrupted or failed write never
//! leaves a truncated document behind.

use std::fs::create_dir_all;
use std::io::Write;
use std::path::Path;

use log::trace;
use tempfile::NamedTempFile;

use crate::errors::{Result, file_operation_error};

/// Writes `contents` to `target`, creating parent directories as needed
///
/// An existing file at `target` is replaced.
///
/// # Errors
/// Returns a file operation error if a directory cannot be created or the
/// temporary file cannot be written or renamed
pub fn write_atomically(target: &Path, contents: &str) -> Result<()> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    create_dir_all(parent)
        .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;

    let mut temporary = NamedTempFile::new_in(parent)
        .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create temporary file in"))?;
    let temporary_path = temporary.path().to_path_buf();
    temporary
        .write_all(contents.as_bytes())
        .map_err(|e| file_operation_error(e, temporary_path.clone(), "write"))?;
    temporary
        .flush()
        .map_err(|e| file_operation_error(e, temporary_path, "flush"))?;

    temporary
        .persist(target)
        .map_err(|e| file_operation_error(e.error, target.to_path_buf(), "replace"))?;
    trace!("Wrote {}", target.display());

    Ok(())
}
