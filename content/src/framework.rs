// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser of the raw Framework page.
//!
//! Sections contain `### English Content` / `### Chinese Content` blocks and inline
//! `**English**:` / `**Chinese**:` lines.

use rwai_models::{Locale, Localized};

use crate::text;

/// Splits the text into `## ` sections. The first element holds the lines before the first
/// section, every other element starts with the section title.
///
/// Every section except the last one ends with an empty line.
fn split_sections(body: &str) -> Vec<Vec<&str>> {
    let mut sections = Vec::new();
    let mut current = Vec::new();
    for line in body.split('\n') {
        if let Some(title) = line.strip_prefix("## ") {
            current.push("");
            sections.push(std::mem::replace(&mut current, vec![title]));
        } else {
            current.push(line);
        }
    }
    sections.push(current);
    sections
}

fn marker_line(line: &str) -> Option<(Locale, &str)> {
    if let Some(content) = text::strip_marker(line, "English") {
        return Some((Locale::En, content));
    }
    text::strip_marker(line, "Chinese")
        .or_else(|| text::strip_marker(line, "中文"))
        .map(|content| (Locale::Zh, content))
}

/// Cleans a content line for the given locale. Returns `None` if the line should be dropped.
fn content_line(line: &str, locale: Locale) -> Option<String> {
    match locale {
        Locale::En => {
            if line.contains("**Chinese**") || line.contains("**中文**") {
                return None;
            }
            let cleaned = text::remove_fullwidth_groups(line, true);
            let cleaned = text::collapse_whitespace(&text::replace_chinese(&cleaned, " "));
            (!cleaned.is_empty() || line.trim().is_empty()).then_some(cleaned)
        }
        Locale::Zh => {
            if line.contains("**English**") {
                None
            } else if text::has_chinese_annotation(line) {
                text::chinese_annotation(line).map(str::to_string)
            } else if text::is_chinese(line) || line.trim().is_empty() {
                Some(line.to_string())
            } else {
                None
            }
        }
    }
}

/// Renders the Framework page for one locale.
#[must_use]
pub fn render(raw: &str, locale: Locale) -> String {
    let mut result = Vec::new();

    let (first, rest) = raw.split_once('\n').unwrap_or((raw, ""));
    let has_title = first.starts_with('#');
    if has_title && !first.trim().is_empty() {
        result.push(first.trim().to_string());
    }
    let body = if has_title { rest } else { raw };

    for lines in split_sections(body) {
        if lines.iter().all(|line| line.trim().is_empty()) {
            continue;
        }
        let title = lines[0].trim();
        if title.is_empty() || title.contains("Team") || title.contains("Notes") {
            continue;
        }
        result.push(format!("## {title}"));

        // `None` means the content is shared by both languages.
        let mut block: Option<Locale> = None;
        for line in &lines[1..] {
            match line.trim() {
                "### English Content" => {
                    block = Some(Locale::En);
                    continue;
                }
                "### Chinese Content" => {
                    block = Some(Locale::Zh);
                    continue;
                }
                _ => {}
            }

            if let Some((marker_locale, content)) = marker_line(line) {
                if marker_locale == locale {
                    result.push(content.to_string());
                }
                continue;
            }

            if text::heading(line, 3).is_some() && !line.contains("Content") {
                result.push((*line).to_string());
                block = None;
                continue;
            }

            if block.is_some_and(|block| block != locale) {
                continue;
            }
            if let Some(cleaned) = content_line(line, locale) {
                result.push(cleaned);
            }
        }
    }

    text::collapse_newlines(&result.join("\n"))
}

/// Splits the raw Framework page into per-locale files.
#[must_use]
pub fn split(raw: &str) -> Localized<String> {
    Localized::new(render(raw, Locale::En), render(raw, Locale::Zh))
}
