// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Miscellaneous utilities.

use crate::errors;

/// Verifies that the path exists and is a directory.
///
/// # Errors
///
/// Returns an error if the path does not exist or is not a directory.
pub fn dir_exists(path: &std::path::Path) -> Result<(), errors::ConfigCheckError> {
    if !path.exists() {
        return Err(errors::ConfigCheckError::DoesNotExist(path.to_owned()));
    }
    if !path.is_dir() {
        return Err(errors::ConfigCheckError::NotADir(path.to_owned()));
    }
    Ok(())
}

/// Verifies that the path can be created or already exists and is a directory.
///
/// # Errors
///
/// Returns an error if the path does not exist or is not a directory.
pub fn dir_usable(path: &std::path::Path) -> Result<(), errors::ConfigCheckError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(errors::ConfigCheckError::NotADir(path.to_owned()));
        }
    } else if let Some(base) = path.parent().filter(|base| !base.as_os_str().is_empty()) {
        if !base.exists() {
            return Err(errors::ConfigCheckError::DoesNotExist(base.to_owned()));
        }
        if !base.is_dir() {
            return Err(errors::ConfigCheckError::NotADir(base.to_owned()));
        }
    } else if path.parent().is_none() {
        return Err(errors::ConfigCheckError::NoParent(path.to_owned()));
    }

    Ok(())
}

/// Creates the parent of the given path.
pub fn create_parent(path: &std::path::Path) -> Result<(), errors::ProcessingError> {
    if let Some(base) = path.parent() {
        std::fs::create_dir_all(base)
            .map_err(|e| errors::ProcessingError::Io(e, path.to_owned()))?;
        Ok(())
    } else {
        Err(errors::ConfigCheckError::NoParent(path.to_owned()).into())
    }
}

/// Writes the file creating its parent directories.
pub fn write_file(path: &std::path::Path, contents: &str) -> Result<(), errors::ProcessingError> {
    create_parent(path)?;
    std::fs::write(path, contents).map_err(|e| errors::ProcessingError::Io(e, path.to_owned()))
}
