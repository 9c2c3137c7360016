// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

pub use rwai_content::ContentError;

/// Error returned if config checking failed.
#[derive(Error, Debug)]
pub enum ConfigCheckError {
    #[error("Path '{0}' does not exist")]
    DoesNotExist(std::path::PathBuf),

    #[error("Path '{0}' is not a directory")]
    NotADir(std::path::PathBuf),

    #[error("Path '{0}' has no parent")]
    NoParent(std::path::PathBuf),
}

/// Error returned when a problem with processing.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("In file `{1}`.\nIO error: {0}")]
    Io(std::io::Error, std::path::PathBuf),

    #[error("YAML serialization error: {0}")]
    WriteYaml(#[from] serde_yaml::Error),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Section `{section}` not found in the {locale} homepage")]
    SectionNotFound { section: String, locale: rwai_models::Locale },

    #[error("Config check: {0}")]
    ConfigCheck(#[from] ConfigCheckError),
}
