// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generation of per-locale content files from the raw mixed-language files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use rwai_models::{Locale, Localized, models::ArenaPage};

use crate::{about, errors::ContentError, faq, framework, homepage, simple};

/// Suffix of the raw content files.
pub const RAW_SUFFIX: &str = ".raw.md";

/// Parser used for a raw file.
#[derive(Serialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageKind {
    #[serde(rename = "homepage")]
    Homepage,

    #[serde(rename = "about")]
    About,

    #[serde(rename = "faq")]
    Faq,

    #[serde(rename = "framework")]
    Framework,

    #[serde(rename = "simple")]
    Simple,

    /// No parser is known; the raw content is copied to both locales.
    #[serde(rename = "verbatim")]
    Verbatim,
}

impl PageKind {
    /// Chooses the parser from the directory relative to the content root and the file stem.
    #[must_use]
    pub fn for_file(dir: &Path, stem: &str) -> Self {
        let is_page = stem == "page";
        if stem == "homepage" {
            Self::Homepage
        } else if is_page && dir == Path::new("About") {
            Self::About
        } else if is_page && dir == Path::new("FAQ") {
            Self::Faq
        } else if is_page && dir == Path::new("Framework") {
            Self::Framework
        } else if is_page || ArenaPage::ALL.iter().any(|page| page.to_str() == stem) {
            Self::Simple
        } else {
            Self::Verbatim
        }
    }

    /// Splits the raw content into the complete per-locale files.
    #[must_use]
    pub fn split(self, raw: &str) -> Localized<String> {
        match self {
            Self::Homepage => homepage::split(raw),
            Self::About => about::split(raw),
            Self::Faq => faq::split(raw),
            Self::Framework => framework::split(raw),
            Self::Simple => simple::split(raw),
            Self::Verbatim => Localized::new(raw.to_string(), raw.to_string()),
        }
    }
}

/// Result of processing one raw file.
#[derive(Serialize, Clone, Debug, Eq, PartialEq)]
pub struct SyncedFile {
    pub raw: PathBuf,
    pub kind: PageKind,
    pub outputs: Localized<PathBuf>,
}

/// Summary of a whole sync run.
#[derive(Serialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct SyncReport {
    pub files: Vec<SyncedFile>,
}

impl SyncReport {
    #[must_use]
    pub fn processed(&self) -> usize {
        self.files.len()
    }

    /// Number of files copied without a dedicated parser.
    #[must_use]
    pub fn verbatim(&self) -> usize {
        self.files.iter().filter(|file| file.kind == PageKind::Verbatim).count()
    }
}

fn raw_stem(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()?.strip_suffix(RAW_SUFFIX)
}

/// Recursively finds all raw files in the directory, sorted by path.
///
/// # Errors
///
/// Returns `Err` if a directory could not be read.
pub fn find_raw_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let mut files = Vec::new();
    let mut dirs = vec![dir.to_owned()];
    while let Some(dir) = dirs.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|e| ContentError::Io(e, dir.clone()))?;
        for entry in entries {
            let entry = entry.map_err(|e| ContentError::Io(e, dir.clone()))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| ContentError::Io(e, path.clone()))?;
            if file_type.is_dir() {
                dirs.push(path);
            } else if file_type.is_file() && raw_stem(&path).is_some() {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Generates `<stem>.en.md` and `<stem>.zh.md` next to the raw file.
///
/// # Errors
///
/// Returns `Err` if the path is not a raw file or reading or writing fails.
pub fn process_raw_file(path: &Path, root: &Path) -> Result<SyncedFile, ContentError> {
    let stem = raw_stem(path).ok_or_else(|| ContentError::NotRawFile(path.to_owned()))?;
    let dir = path.parent().unwrap_or(Path::new(""));
    let relative_dir = dir.strip_prefix(root).unwrap_or(dir);

    log::info!("Processing: {}", path.display());
    let raw = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e, path.to_owned()))?;
    // Generated files always use `\n` line endings.
    let raw = raw.replace("\r\n", "\n");

    let kind = PageKind::for_file(relative_dir, stem);
    if kind == PageKind::Verbatim {
        log::warn!("No specific parser for `{stem}`, copying raw content");
    }
    let contents = kind.split(&raw);

    let mut outputs = Localized::<PathBuf>::default();
    for locale in Locale::ALL {
        let output = dir.join(format!("{stem}.{locale}.md"));
        std::fs::write(&output, contents.get(locale))
            .map_err(|e| ContentError::Io(e, output.clone()))?;
        log::info!(" - generated: {}", output.display());
        *outputs.get_mut(locale) = output;
    }

    Ok(SyncedFile { raw: path.to_owned(), kind, outputs })
}

/// Processes all raw files under the content root.
///
/// # Errors
///
/// Returns `Err` on the first file that could not be read or written.
pub fn sync_all(root: &Path) -> Result<SyncReport, ContentError> {
    let raw_files = find_raw_files(root)?;
    log::info!("Found {} raw files", raw_files.len());

    let mut report = SyncReport::default();
    for path in &raw_files {
        report.files.push(process_raw_file(path, root)?);
    }

    log::info!(
        "Content sync complete: {} processed, {} copied verbatim",
        report.processed(),
        report.verbatim()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing() {
        let root = Path::new("");
        assert_eq!(PageKind::for_file(Path::new("Homepage"), "homepage"), PageKind::Homepage);
        assert_eq!(PageKind::for_file(Path::new("About"), "page"), PageKind::About);
        assert_eq!(PageKind::for_file(Path::new("FAQ"), "page"), PageKind::Faq);
        assert_eq!(PageKind::for_file(Path::new("Framework"), "page"), PageKind::Framework);
        assert_eq!(PageKind::for_file(Path::new("Arena"), "page"), PageKind::Simple);
        assert_eq!(
            PageKind::for_file(Path::new("Arena/system-v1"), "validation-report"),
            PageKind::Simple
        );
        assert_eq!(PageKind::for_file(Path::new("About"), "team"), PageKind::Verbatim);
        assert_eq!(PageKind::for_file(root, "readme"), PageKind::Verbatim);
    }

    #[test]
    fn test_raw_stem() {
        assert_eq!(raw_stem(Path::new("Content/About/page.raw.md")), Some("page"));
        assert_eq!(raw_stem(Path::new("Content/About/page.en.md")), None);
    }

    #[test]
    fn test_verbatim_split() {
        let result = PageKind::Verbatim.split("# 混合 Mixed");
        assert_eq!(result, Localized::new("# 混合 Mixed".to_string(), "# 混合 Mixed".to_string()));
    }
}
