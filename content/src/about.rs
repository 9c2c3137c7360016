// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser of the raw About page.

use rwai_models::{Locale, Localized};

use crate::text;

/// Number of lines after an item entry searched for the item fields.
const ITEM_LOOKAHEAD: usize = 9;

const PARTNER_INVITATION_EN: &str = "We welcome more enterprises, universities, and organizations \
                                     to join us. Please contact us for cooperation.";
const PARTNER_INVITATION_ZH: &str = "我们欢迎更多企业、高校和组织加入。欢迎联系我们进行合作。";

fn is_english_header_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '?' || c == '-'
}

/// Picks the part of a bilingual header for the locale.
///
/// `fallback_to_chinese` keeps a whole Chinese header without parenthesised translation.
fn localized_header(header: &str, locale: Locale, fallback_to_chinese: bool) -> Option<String> {
    match locale {
        Locale::En => text::leading_run(header, is_english_header_char).map(|h| h.trim().to_string()),
        Locale::Zh => text::first_paren_group(header).map(str::to_string).or_else(|| {
            (fallback_to_chinese && text::is_chinese(header)).then(|| header.to_string())
        }),
    }
}

/// Checks for `- **Item N:**`.
fn is_item_entry(line: &str) -> bool {
    let Some(rest) = line.trim().strip_prefix("- **Item") else {
        return false;
    };
    let number = rest.trim_start();
    if number.len() == rest.len() {
        return false;
    }
    let digits = number.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && number[digits..].starts_with(":**")
}

/// Reads the title and description of an item from the lines following its entry.
fn read_item(lines: &[&str], locale: Locale) -> Option<(String, Option<String>)> {
    let (title_marker, description_marker) = match locale {
        Locale::En => ("Title (EN)", "Description (EN)"),
        Locale::Zh => ("Title (ZH)", "Description (ZH)"),
    };

    let mut title = None;
    let mut description = None;
    for line in lines {
        if line.contains("**Icon**:") {
            continue;
        }
        if line.contains("**Title (EN)**") || line.contains("**Title (ZH)**") {
            if let Some(value) = text::find_marker(line, title_marker) {
                title = Some(value.to_string());
            }
            continue;
        }
        if line.contains("**Description (EN)**") || line.contains("**Description (ZH)**") {
            if let Some(value) = text::find_marker(line, description_marker) {
                description = Some(value.to_string());
            }
            continue;
        }
        if line.trim().starts_with("- **Item") || line.trim().is_empty() || line.contains("---") {
            break;
        }
    }
    title.map(|title| (title, description))
}

fn marker_text(line: &str, locale: Locale) -> Option<&str> {
    match locale {
        Locale::En => text::find_marker(line, "English"),
        Locale::Zh => {
            text::find_marker(line, "Chinese").or_else(|| text::find_marker(line, "中文"))
        }
    }
}

/// Renders the About page for one locale.
#[must_use]
pub fn render(raw: &str, locale: Locale) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    let mut result = Vec::new();
    let mut in_items = false;

    for (i, line) in lines.iter().enumerate() {
        if line.contains("## Notes") {
            break;
        }
        if line.contains("## Team Maintained Original Content") || line.contains("## Main Content")
        {
            continue;
        }

        if let Some(header) = text::heading(line, 3) {
            in_items = false;
            if let Some(header) = localized_header(header, locale, true) {
                result.push(format!("## {header}"));
            }
            continue;
        }
        if let Some(header) = text::heading(line, 4) {
            if let Some(header) = localized_header(header, locale, false) {
                result.push(format!("### {header}"));
            }
            continue;
        }

        if line.trim() == "**Items**:" {
            in_items = true;
            continue;
        }
        if in_items && line.trim().starts_with("- **Item") {
            if is_item_entry(line) {
                let end = (i + 1 + ITEM_LOOKAHEAD).min(lines.len());
                if let Some((title, description)) = read_item(&lines[i + 1..end], locale) {
                    result.push(format!("- {title}"));
                    result.extend(description);
                }
            }
            continue;
        }

        if line.contains("**Partner List**") {
            result.push(locale.pick(PARTNER_INVITATION_EN, PARTNER_INVITATION_ZH).to_string());
            continue;
        }

        // Marker lines would also parse as key-value pairs.
        if line.contains("**English**") || line.contains("**Chinese**") || line.contains("**中文**") {
            if let Some(content) = marker_text(line, locale) {
                result.push(content.to_string());
            }
            continue;
        }

        if line.trim().starts_with("**") && line.contains("**:") {
            if let Some((key, value)) = text::parse_key_value(line) {
                let skip = match locale {
                    Locale::En => key.contains("(ZH)"),
                    Locale::Zh => key.contains("(EN)"),
                };
                if !skip {
                    let key = key.replace("(EN)", "").replace("(ZH)", "");
                    result.push(format!("**{}**: {value}", key.trim()));
                }
            }
            continue;
        }

        if line.trim() == "---" {
            result.push("---".to_string());
        } else if line.trim().is_empty() {
            result.push(String::new());
        }
    }

    text::join_dedup_empty(result)
}

/// Splits the raw About page into per-locale files.
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
        # About RWAI Arena

        ## Team Maintained Original Content

        ### Our Mission（我们的使命）

        **English**: Find the best practice for every business task.
        **Chinese**: 为每个业务任务找到最佳实践。

        #### Core Values（核心价值）

        **Items**:
        - **Item 1:**
          - **Icon**: shield
          - **Title (EN)**: Openness
          - **Title (ZH)**: 开放
          - **Description (EN)**: Everything is open source.
          - **Description (ZH)**: 一切开源。
        - **Item 2:**
          - **Title (EN)**: Fairness

        ---

        ### 合作伙伴
        **Partner List**:
        **Founded (EN)**: 2024
        **Website**: https://rwai.example

        ## Notes for Content Team
        Internal remark.
    "};

    #[test]
    fn test_english() {
        assert_eq!(
            render(RAW, Locale::En),
            indoc! {"

                ## Our Mission

                Find the best practice for every business task.

                ### Core Values

                - Openness
                Everything is open source.
                - Fairness

                ---

                We welcome more enterprises, universities, and organizations to join us. Please contact us for cooperation.
                **Founded**: 2024
                **Website**: https://rwai.example
            "}
        );
    }

    #[test]
    fn test_chinese() {
        assert_eq!(
            render(RAW, Locale::Zh),
            indoc! {"

                ## 我们的使命

                为每个业务任务找到最佳实践。

                ### 核心价值

                - 开放
                一切开源。

                ---

                ## 合作伙伴
                我们欢迎更多企业、高校和组织加入。欢迎联系我们进行合作。
                **Website**: https://rwai.example
            "}
        );
    }

    #[test]
    fn test_item_entry() {
        assert!(is_item_entry("- **Item 12:**"));
        assert!(!is_item_entry("- **Item:**"));
        assert!(!is_item_entry("- **Items 1:**"));
    }
}
