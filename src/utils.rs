use std::fs::create_dir_all;
use std::path::{Component, Path, PathBuf};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

/// Locates the platform configuration folder, creating it when missing
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}

/// Expands a leading `~` in a user supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}

/// Whether any component of a relative path is hidden (starts with a dot)
pub(crate) fn has_hidden_component(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_str().is_some_and(|n| n.starts_with('.')),
        _ => false,
    })
}
