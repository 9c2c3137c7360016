// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser of simple bilingual pages: the arena list page and the arena detail pages.

use rwai_models::{Locale, Localized};

use crate::text;

/// Characters allowed in English headers. Everything outside the Basic Multilingual Plane,
/// like most emoji, is accepted.
fn is_english_header_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || "()-,.'\":".contains(c)
        || ['•', '⭐', '⚡'].contains(&c)
        || u32::from(c) > 0xFFFF
}

/// Picks the `###` header for the locale, `None` if the locale has no header here.
fn localized_header(line: &str, prefix: &str, header: &str, locale: Locale) -> Option<String> {
    if header == "English Content" || header == "Chinese Content" {
        return None;
    }
    match locale {
        Locale::En => match text::leading_run(header, is_english_header_char) {
            Some(english) => Some(format!("{prefix}{}", english.trim())),
            None => (!text::is_chinese(header)).then(|| line.to_string()),
        },
        Locale::Zh => {
            if text::is_chinese(header) {
                Some(format!("{prefix}{}", header.trim()))
            } else if text::is_english(header) && !header.contains(':') {
                Some(line.to_string())
            } else {
                None
            }
        }
    }
}

fn marker_line(line: &str) -> Option<(Locale, &str)> {
    if let Some(content) = text::strip_marker(line, "English") {
        return Some((Locale::En, content));
    }
    text::strip_marker(line, "Chinese")
        .or_else(|| text::strip_marker(line, "中文"))
        .map(|content| (Locale::Zh, content))
}

/// Cleans a non-empty content line for the given locale.
fn content_line(line: &str, locale: Locale) -> Option<String> {
    match locale {
        Locale::En => {
            if text::is_chinese(line) && !text::has_latin(line) {
                return None;
            }
            let cleaned = text::remove_fullwidth_groups(line, false);
            let cleaned = text::replace_chinese(cleaned.trim(), "");
            let cleaned = cleaned.trim();
            (!cleaned.is_empty()).then(|| cleaned.to_string())
        }
        Locale::Zh => {
            if text::has_chinese_annotation(line) {
                text::chinese_annotation(line).map(str::to_string)
            } else if text::is_chinese(line) {
                Some(line.to_string())
            } else {
                None
            }
        }
    }
}

/// Renders a simple page for one locale.
#[must_use]
pub fn render(raw: &str, locale: Locale) -> String {
    let mut result = Vec::new();
    // `None` means the content is shared by both languages.
    let mut block: Option<Locale> = None;

    for line in raw.split('\n') {
        if line.contains("## Team") || line.contains("## Notes") {
            break;
        }

        match line.trim() {
            "#### English" | "### English Content" => {
                block = Some(Locale::En);
                continue;
            }
            "#### 中文" | "### Chinese Content" => {
                block = Some(Locale::Zh);
                continue;
            }
            "" => {
                result.push(String::new());
                continue;
            }
            _ => {}
        }

        if text::heading(line, 2).is_some() {
            block = None;
            result.push(line.to_string());
            continue;
        }

        if let Some((prefix, header)) = text::split_heading(line, 3) {
            if let Some(header) = localized_header(line, prefix, header, locale) {
                result.push(header);
            }
            continue;
        }

        if let Some((marker_locale, content)) = marker_line(line) {
            if marker_locale == locale {
                result.push(content.to_string());
            }
            continue;
        }

        if block.is_some_and(|block| block != locale) {
            continue;
        }
        if let Some(cleaned) = content_line(line, locale) {
            result.push(cleaned);
        }
    }

    text::join_dedup_empty(result)
}

/// Splits a raw simple page into per-locale files.
#[must_use]
pub fn split(raw: &str) -> Localized<String> {
    Localized::new(render(raw, Locale::En), render(raw, Locale::Zh))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    const RAW: &str = indoc! {"
        # Overview（概览）


        ## Summary
        #### English
        Research system for reports.
        #### 中文
        研究报告系统。

        ## Key Metrics
        ### ⚡ Speed: 15 minutes（速度）
        ### 核心优势
        ### Accuracy
        Quality score 95（质量）
        **English**: Works offline.
        **中文**: 离线可用。
        Arena（中文：竞技场）

        ## Notes for Content Team
        hidden
    "};

    #[test]
    fn test_english() {
        assert_eq!(
            render(RAW, Locale::En),
            indoc! {"
                # Overview

                ## Summary
                Research system for reports.

                ## Key Metrics
                ### ⚡ Speed: 15 minutes
                ### Accuracy
                Quality score 95
                Works offline.
                Arena
            "}
        );
    }

    #[test]
    fn test_chinese() {
        assert_eq!(
            render(RAW, Locale::Zh),
            indoc! {"
                # Overview（概览）

                ## Summary
                研究报告系统。

                ## Key Metrics
                ### ⚡ Speed: 15 minutes（速度）
                ### 核心优势
                ### Accuracy
                Quality score 95（质量）
                离线可用。
                竞技场
            "}
        );
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            localized_header("### Setup: Step 1", "### ", "Setup: Step 1", Locale::Zh),
            None
        );
        assert_eq!(
            localized_header("### 🚀 Launch", "### ", "🚀 Launch", Locale::En),
            Some("### 🚀 Launch".to_string())
        );        assert_eq!(
            localized_header("### 🚀 Launch 发射", "### ", "🚀 Launch 发射", Locale::En),
            Some("### 🚀 Launch".to_string())
        );
        assert_eq!(
            localized_header("### 🔒 Security（安全）", "### ", "🔒 Security（安全）", Locale::En),
            Some("### 🔒 Security".to_string())
        );
        assert_eq!(
            localized_header("### 🚀 Launch 发射", "### ", "🚀 Launch 发射", Locale::Zh),
            Some("### 🚀 Launch 发射".to_string())
        );
    }

    #[test]
    fn test_emoji_headers() {
        let raw = "## Plan
### 🚀 Launch 发射
Go live.
";
        assert_eq!(render(raw, Locale::En), "## Plan
### 🚀 Launch
Go live.
");
        assert_eq!(render(raw, Locale::Zh), "## Plan
### 🚀 Launch 发射
");
    }
}
