// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read access to the generated per-locale content files.
//!
//! Files are laid out as `<root>/<Section>/<name>.<locale>.md`.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Serialize;

use rwai_models::{Locale, models::ArenaPage};

use crate::{
    errors::ContentError,
    frontmatter::{self, Frontmatter},
    sections, text,
};

pub const HOMEPAGE_SECTION: &str = "Homepage";
pub const HOMEPAGE_NAME: &str = "homepage";
pub const ARENA_SECTION: &str = "Arena";
pub const PAGE_NAME: &str = "page";

/// Key-value fields of a homepage section.
pub type Fields = BTreeMap<String, String>;

/// Body of a content file with its metadata.
#[derive(Serialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct ContentFile {
    pub content: String,
    pub frontmatter: Option<Frontmatter>,
}

/// Fields of one `###` subsection.
#[derive(Serialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct Subsection {
    pub title: String,
    pub fields: Fields,
}

fn read(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|e| ContentError::Io(e, path.to_owned()))
}

/// Reads the content tree.
#[derive(Clone, Debug)]
pub struct ContentLibrary {
    root: PathBuf,
}

impl ContentLibrary {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the locale file. Sections can be nested with `/`.
    #[must_use]
    pub fn locale_path(&self, section: &str, name: &str, locale: Locale) -> PathBuf {
        section
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
            .join(format!("{name}.{locale}.md"))
    }

    /// Reads a content file falling back to English if the locale file is missing.
    ///
    /// The English fallback is returned as is, without frontmatter parsing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an existing file could not be read.
    pub fn read_file(
        &self,
        section: &str,
        name: &str,
        locale: Locale,
    ) -> Result<Option<ContentFile>, ContentError> {
        let path = self.locale_path(section, name, locale);
        if path.is_file() {
            let text = read(&path)?;
            let (frontmatter, body) = frontmatter::split(&text);
            return Ok(Some(ContentFile { content: body.to_string(), frontmatter }));
        }

        let fallback = self.locale_path(section, name, Locale::En);
        if fallback.is_file() {
            log::debug!("Falling back to `{}`", fallback.display());
            return Ok(Some(ContentFile { content: read(&fallback)?, frontmatter: None }));
        }

        Ok(None)
    }

    /// Same as `read_file` but read errors are logged and reported as missing content.
    #[must_use]
    pub fn file(&self, section: &str, name: &str, locale: Locale) -> Option<ContentFile> {
        match self.read_file(section, name, locale) {
            Ok(file) => file,
            Err(err) => {
                log::error!("Error reading content file {section}/{name}.{locale}.md: {err}");
                None
            }
        }
    }

    /// Reads `<Section>/page.<locale>.md`.
    #[must_use]
    pub fn page(&self, section: &str, locale: Locale) -> Option<ContentFile> {
        self.file(section, PAGE_NAME, locale)
    }

    /// Lists the IDs of arenas having a content directory, sorted.
    #[must_use]
    pub fn arena_ids(&self) -> Vec<String> {
        let dir = self.root.join(ARENA_SECTION);
        if !dir.is_dir() {
            return Vec::new();
        }
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::error!("Error reading arena directories in `{}`: {err}", dir.display());
                return Vec::new();
            }
        };

        let mut ids: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn arena_page(&self, id: &str, page: ArenaPage, locale: Locale) -> Option<ContentFile> {
        self.file(&format!("{ARENA_SECTION}/{id}"), page.to_str(), locale)
    }

    /// Returns the part of the homepage file belonging to the section.
    ///
    /// `section` is the English section name. It's mapped to the header used in the locale file.
    #[must_use]
    pub fn homepage_section(&self, section: &str, locale: Locale) -> Option<ContentFile> {
        let homepage = self.file(HOMEPAGE_SECTION, HOMEPAGE_NAME, locale)?;
        let header = sections::section_header(section, locale);
        slice_section(&homepage.content, header)
            .map(|content| ContentFile { content: content.to_string(), frontmatter: None })
    }
}

/// Returns the text from the `## <header>` line up to the next `## ` line.
///
/// Headers are compared case-insensitively.
#[must_use]
pub fn slice_section<'a>(content: &'a str, header: &str) -> Option<&'a str> {
    let header = header.to_lowercase();
    let mut start = None;
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let title = text::heading(line.trim_end(), 2);
        match start {
            None => {
                if title.is_some_and(|title| title.to_lowercase() == header) {
                    start = Some(offset);
                }
            }
            Some(start) => {
                if title.is_some() {
                    return Some(content[start..offset].trim_end());
                }
            }
        }
        offset += line.len();
    }
    start.map(|start| content[start..].trim_end())
}

/// Collects `- **Key**: value` lines. Later keys overwrite earlier ones.
#[must_use]
pub fn parse_section_fields(content: &str) -> Fields {
    content
        .split('\n')
        .filter(|line| line.trim().starts_with("- **"))
        .filter_map(text::parse_list_key_value)
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .collect()
}

/// Collects `- **Key**: value` lines grouped by `###` subsections in order.
///
/// Fields before the first subsection are ignored.
#[must_use]
pub fn parse_subsections(content: &str) -> Vec<Subsection> {
    let mut result: Vec<Subsection> = Vec::new();
    for line in content.split('\n') {
        if let Some(title) = text::heading(line, 3) {
            result.push(Subsection { title: title.to_string(), fields: Fields::new() });
        } else if line.trim().starts_with("- **") {
            if let (Some(subsection), Some((key, value))) =
                (result.last_mut(), text::parse_list_key_value(line))
            {
                subsection.fields.insert(key.trim().to_string(), value.to_string());
            }
        }
    }
    result
}
