//! Directory scanning functionality
//!
//! This module contains functions for finding the source documents under the
//! input root.

use std::path::{Component, Path, PathBuf};

use glob::{Pattern, glob};
use log::{debug, warn};

use crate::errors::{
    Result, generic_error, glob_pattern_error, invalid_filename_error, path_operation_error,
};
use crate::utils::has_hidden_component;

/// A source document found during scanning
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceDocument {
    /// The path to the file, as reached from the input root
    pub path: PathBuf,
    /// The path relative to the input root
    pub relative: PathBuf,
}

impl SourceDocument {
    /// Creates a source document from a path found under `root`
    ///
    /// # Errors
    /// Returns an error if the path does not lie under `root`
    ///
    /// `./` components are ignored on both sides, so `.` is the root of
    /// `a/x.xml`.
    pub fn new(root: &Path, path: PathBuf) -> Result<Self> {
        let relative = without_cur_dir(&path)
            .strip_prefix(without_cur_dir(root))
            .map_err(|_| path_operation_error(path.clone(), "strip the input root from"))?
            .to_path_buf();

        Ok(SourceDocument { path, relative })
    }

    /// The file name without its extension
    ///
    /// # Errors
    /// Returns an error if the name is missing or not valid unicode
    pub fn stem(&self) -> Result<&str> {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| invalid_filename_error(self.path.clone()))
    }

    /// The directory holding the file, as a string
    ///
    /// # Errors
    /// Returns an error if the directory is not valid unicode
    pub fn folder(&self) -> Result<&str> {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_str()
            .ok_or_else(|| invalid_filename_error(self.path.clone()))
    }
}

/// Drops `.` components, leaving an empty path for the current directory
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Builds the recursive pattern for `extension` below `root`
fn source_pattern(root: &Path, extension: &str) -> Result<String> {
    let base = without_cur_dir(root);
    if base.as_os_str().is_empty() {
        return Ok(format!("**/*.{extension}"));
    }

    let base_str = base
        .to_str()
        .ok_or_else(|| invalid_filename_error(root.to_path_buf()))?;
    let escaped = Pattern::escape(base_str);
    Ok(format!("{}/**/*.{}", escaped.trim_end_matches('/'), extension))
}

/// Finds every file with the given extension anywhere under `root`
///
/// The result is sorted by path so that runs are reproducible. A missing root
/// is reported and yields no documents; unreadable entries below the root are
/// logged and skipped.
///
/// # Arguments
/// * `root` - The input directory
/// * `extension` - The bare source extension, e.g. `xml`
/// * `skip_hidden` - Ignore files inside, or named like, dot-directories/dot-files
///
/// # Errors
/// Returns an error if `root` exists but is not a directory, or if it cannot
/// be expressed as a glob pattern
pub fn discover_sources(
    root: &Path,
    extension: &str,
    skip_hidden: bool,
) -> Result<Vec<SourceDocument>> {
    if !root.exists() {
        warn!("Input directory {} does not exist", root.display());
        return Ok(Vec::new());
    }
    if !root.is_dir() {
        return Err(generic_error(&format!(
            "Input path is not a directory: {}",
            root.display()
        )));
    }

    let pattern = source_pattern(root, extension)?;
    debug!("Scanning {} with pattern {pattern}", root.display());

    let entries = glob(&pattern).map_err(|e| glob_pattern_error(e, &pattern))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable entry {}: {}", e.path().display(), e.error());
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }

        let document = match SourceDocument::new(root, path) {
            Ok(document) => document,
            Err(e) => {
                warn!("{e}; skipping it");
                continue;
            }
        };
        if skip_hidden && has_hidden_component(&document.relative) {
            debug!("Skipping hidden file {}", document.relative.display());
            continue;
        }
        documents.push(document);
    }

    documents.sort();
    debug!("Found {} source documents", documents.len());

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        create_dir_all(path.parent().unwrap()).unwrap();
        write(path, "<document/>").unwrap();
    }

    fn relatives(documents: &[SourceDocument]) -> Vec<PathBuf> {
        documents.iter().map(|d| d.relative.clone()).collect()
    }

    #[test]
    fn test_discovers_recursively_in_sorted_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "zeta.xml");
        touch(dir.path(), "b/second.xml");
        touch(dir.path(), "a/b/doc.xml");
        touch(dir.path(), "alpha.xml");
        touch(dir.path(), "notes.txt");

        let documents = discover_sources(dir.path(), "xml", false).unwrap();

        assert_eq!(
            relatives(&documents),
            vec![
                PathBuf::from("a/b/doc.xml"),
                PathBuf::from("alpha.xml"),
                PathBuf::from("b/second.xml"),
                PathBuf::from("zeta.xml"),
            ]
        );
        assert!(documents.iter().all(|d| d.path.starts_with(dir.path())));
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let documents = discover_sources(&dir.path().join("absent"), "xml", false).unwrap();
        assert!(documents.is_empty());
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(discover_sources(dir.path(), "xml", false).unwrap().is_empty());
    }

    #[test]
    fn test_file_as_root_is_an_error() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "single.xml");
        assert!(discover_sources(&dir.path().join("single.xml"), "xml", false).is_err());
    }

    #[test]
    fn test_directories_named_like_sources_are_ignored() {
        let dir = tempdir().unwrap();
        create_dir_all(dir.path().join("folder.xml")).unwrap();
        touch(dir.path(), "folder.xml/inner.xml");

        let documents = discover_sources(dir.path(), "xml", false).unwrap();
        assert_eq!(relatives(&documents), vec![PathBuf::from("folder.xml/inner.xml")]);
    }

    #[test]
    fn test_root_with_glob_metacharacters() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("book [draft]");
        touch(&root, "ch1.xml");

        let documents = discover_sources(&root, "xml", false).unwrap();
        assert_eq!(relatives(&documents), vec![PathBuf::from("ch1.xml")]);
    }

    #[test]
    fn test_skip_hidden() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".cache/old.xml");
        touch(dir.path(), ".scratch.xml");
        touch(dir.path(), "kept.xml");

        let all = discover_sources(dir.path(), "xml", false).unwrap();
        assert_eq!(all.len(), 3);

        let visible = discover_sources(dir.path(), "xml", true).unwrap();
        assert_eq!(relatives(&visible), vec![PathBuf::from("kept.xml")]);
    }

    #[test]
    fn test_stem_and_folder() {
        let document =
            SourceDocument::new(Path::new("docs"), PathBuf::from("docs/a/intro.xml")).unwrap();
        assert_eq!(document.relative, PathBuf::from("a/intro.xml"));
        assert_eq!(document.stem().unwrap(), "intro");
        assert_eq!(document.folder().unwrap(), "docs/a");
    }

    #[test]
    fn test_dot_roots_match_paths_without_the_dot() {
        let document = SourceDocument::new(Path::new("."), PathBuf::from("a/x.xml")).unwrap();
        assert_eq!(document.relative, PathBuf::from("a/x.xml"));
        assert_eq!(document.folder().unwrap(), "a");

        let document = SourceDocument::new(Path::new("./"), PathBuf::from("x.xml")).unwrap();
        assert_eq!(document.relative, PathBuf::from("x.xml"));

        let document =
            SourceDocument::new(Path::new("./sub"), PathBuf::from("sub/a/x.xml")).unwrap();
        assert_eq!(document.relative, PathBuf::from("a/x.xml"));

        let document =
            SourceDocument::new(Path::new("../dir"), PathBuf::from("../dir/x.xml")).unwrap();
        assert_eq!(document.relative, PathBuf::from("x.xml"));
    }

    #[test]
    fn test_source_pattern_for_relative_roots() {
        assert_eq!(source_pattern(Path::new("."), "xml").unwrap(), "**/*.xml");
        assert_eq!(source_pattern(Path::new("./"), "xml").unwrap(), "**/*.xml");
        assert_eq!(source_pattern(Path::new("./sub"), "xml").unwrap(), "sub/**/*.xml");
        assert_eq!(source_pattern(Path::new("../dir"), "xml").unwrap(), "../dir/**/*.xml");
        assert_eq!(source_pattern(Path::new("docs/"), "ptx").unwrap(), "docs/**/*.ptx");
        assert_eq!(source_pattern(Path::new("/"), "xml").unwrap(), "/**/*.xml");
    }

    #[test]
    fn test_root_with_dot_components() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "sub/a/x.xml");

        for root in [dir.path().join("."), dir.path().join("./sub/.")] {
            let documents = discover_sources(&root, "xml", false).unwrap();
            assert_eq!(documents.len(), 1, "{}", root.display());
            assert!(documents[0].relative.ends_with("a/x.xml"));
            assert!(documents[0].path.is_file());
        }
    }

    #[test]
    fn test_path_outside_root_is_rejected() {
        assert!(SourceDocument::new(Path::new("docs"), PathBuf::from("other/x.xml")).is_err());
    }
}
