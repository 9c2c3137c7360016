// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser of the raw FAQ page.

use rwai_models::{Locale, Localized};

use crate::text;

/// Number of lines after the "Still Have Questions?" header searched for its description.
const CONTACT_LOOKAHEAD: usize = 3;

fn title(locale: Locale) -> &'static str {
    locale.pick("# FAQ - Frequently Asked Questions", "# FAQ - 常见问题")
}

/// Extracts the English name from `Category N: Name（中文名）`.
fn english_category(line: &str) -> Option<&str> {
    line.match_indices("Category").find_map(|(pos, _)| {
        let rest = &line[pos + "Category".len()..];
        let number = rest.trim_start();
        if number.len() == rest.len() {
            return None;
        }
        let digits = number.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let name = number[digits..].strip_prefix(':')?;
        let name = name.split('（').next().unwrap_or_default().trim();
        if name.is_empty() { None } else { Some(name) }
    })
}

/// Extracts the question from `Q1: Question?`.
fn question(header: &str) -> Option<&str> {
    let mut chars = header.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let rest = chars.as_str();
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix(':').map(str::trim)
}

/// Collects the lines of one locale and keeps track of the pending answer.
struct Output {
    lines: Vec<String>,
    answer: Option<String>,
}

impl Output {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Flushes the pending answer. Returns `true` if there was one.
    fn flush_answer(&mut self) -> bool {
        match self.answer.take() {
            Some(answer) => {
                self.lines.push(answer);
                true
            }
            None => false,
        }
    }

    /// Flushes the pending answer followed by an empty line.
    fn close_answer(&mut self) {
        if self.flush_answer() {
            self.push("");
        }
    }
}

/// Renders the FAQ page for one locale.
#[must_use]
pub fn render(raw: &str, locale: Locale) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    let mut output = Output { lines: vec![title(locale).to_string()], answer: None };

    let mut i = 1;
    while i < lines.len() {
        let line = lines[i];
        i += 1;

        if line.contains("## Notes") {
            break;
        }
        if line.contains("## Team Maintained Original Content")
            || line.contains("### Page Header")
            || line.contains("## FAQ Categories")
        {
            continue;
        }

        if line.contains("## Contact Section") {
            output.flush_answer();
            output.push("");
            continue;
        }

        if let Some(header) = text::heading(line, 3) {
            if header.starts_with("Category") {
                output.close_answer();
                let category = match locale {
                    Locale::En => english_category(line),
                    Locale::Zh => text::first_paren_group(line).map(str::trim),
                };
                if let Some(category) = category {
                    output.push(format!("### {category}"));
                }
                output.push("");
                continue;
            }
        }

        if let Some(header) = text::heading(line, 4) {
            if let Some(question) = question(header) {
                output.close_answer();
                // The Chinese question follows on its own marker line.
                if locale == Locale::En && !question.is_empty() {
                    output.push(format!("#### {question}"));
                }
                continue;
            }
        }

        if let Some(question) = text::strip_marker(line, "中文") {
            if locale == Locale::Zh {
                output.push(format!("#### {}", question.trim()));
            }
            continue;
        }

        if let Some(answer) = text::strip_marker(line, "English Answer") {
            if locale == Locale::En {
                output.answer = Some(answer.trim().to_string());
            }
            continue;
        }
        if let Some(answer) = text::strip_marker(line, "中文回答") {
            if locale == Locale::Zh {
                output.answer = Some(answer.trim().to_string());
            }
            continue;
        }

        if let Some(header) = text::heading(line, 3) {
            if header == "Still Have Questions?" {
                output.push(format!("### {}", locale.pick("Still Have Questions?", "仍有疑问？")));
                let marker = locale.pick("English", "Chinese");
                let needle = format!("**{marker}**");
                let end = (i + CONTACT_LOOKAHEAD).min(lines.len());
                if let Some(offset) = lines[i..end].iter().position(|l| l.contains(&needle)) {
                    if let Some(description) = text::find_marker(lines[i + offset], marker) {
                        output.push(description);
                    }
                    i += offset + 1;
                }
                output.push("");
                continue;
            }
            if header == "Contact Methods" {
                output.push(format!("### {}", locale.pick("Contact Methods", "联系方式")));
                output.push("");
                continue;
            }
        }

        if line.starts_with("- **GitHub**") || line.starts_with("- **Email**") {
            output.push(line);
            continue;
        }

        if line.trim() == "---" || line.trim().is_empty() {
            output.close_answer();
        }
    }
    output.flush_answer();

    text::collapse_newlines(&output.lines.join("\n"))
}

/// Splits the raw FAQ page into per-locale files.
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
        # FAQ (raw)

        ## Team Maintained Original Content
        ### Page Header
        ## FAQ Categories

        ### Category 1: About RWAI Arena（关于RWAI竞技场）

        #### Q1: What is RWAI Arena?
        **中文**：什么是RWAI竞技场？
        **English Answer**: An open arena for AI practices.
        **中文回答**：一个开放的AI实践竞技场。

        #### Q2: Is it free?
        **中文**: 免费吗？
        **English Answer**: Yes.
        **中文回答**: 是的。
        ---

        ## Contact Section
        ### Still Have Questions?
        **English**: Reach out to us.
        **Chinese**: 联系我们。

        ### Contact Methods
        - **GitHub**: https://github.com/rwai-arena
        - **Email**: hello@rwai.example

        ## Notes for Content Team
        Do not publish.
    "};

    #[test]
    fn test_english() {
        assert_eq!(
            render(RAW, Locale::En),
            indoc! {"
                # FAQ - Frequently Asked Questions
                ### About RWAI Arena

                #### What is RWAI Arena?
                An open arena for AI practices.

                #### Is it free?
                Yes.

                ### Still Have Questions?
                Reach out to us.

                ### Contact Methods

                - **GitHub**: https://github.com/rwai-arena
                - **Email**: hello@rwai.example"}
        );
    }

    #[test]
    fn test_chinese() {
        assert_eq!(
            render(RAW, Locale::Zh),
            indoc! {"
                # FAQ - 常见问题
                ### 关于RWAI竞技场

                #### 什么是RWAI竞技场？
                一个开放的AI实践竞技场。

                #### 免费吗？
                是的。

                ### 仍有疑问？
                联系我们。

                ### 联系方式

                - **GitHub**: https://github.com/rwai-arena
                - **Email**: hello@rwai.example"}
        );
    }

    #[test]
    fn test_parts() {
        assert_eq!(english_category("### Category 2: Developers (开发者)"), Some("Developers (开发者)"));
        assert_eq!(english_category("### Category: Misc"), None);
        assert_eq!(question("Q12: Why?"), Some("Why?"));
        assert_eq!(question("q1: Why?"), None);
        assert_eq!(question("Question"), None);
    }
}
