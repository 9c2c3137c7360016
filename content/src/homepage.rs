// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser of the raw homepage file.
//!
//! The raw file is organised as `## Section` / `### Subsection` / `- **Key (EN)**: value`.

use rwai_models::{Locale, Localized};

use crate::{sections, text};

pub const EN_TITLE: &str = "# Homepage Content";
pub const ZH_TITLE: &str = "# 首页内容";

/// Lines of one `##` section collected for both locales.
#[derive(Default)]
struct Section {
    title: String,
    lines: Localized<Vec<String>>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self { title: title.to_string(), lines: Localized::default() }
    }

    fn push(&mut self, locale: Locale, line: String) {
        self.lines.get_mut(locale).push(line);
    }

    fn push_both(&mut self, line: &str) {
        for locale in Locale::ALL {
            self.push(locale, line.to_string());
        }
    }

    /// Renders the section for each locale which collected at least one line.
    fn flush(self, output: &mut Localized<Vec<String>>) {
        if self.title.is_empty() {
            return;
        }
        for locale in Locale::ALL {
            let lines = self.lines.get(locale);
            if !lines.is_empty() {
                let header = sections::section_header(&self.title, locale);
                output.get_mut(locale).push(format!("## {header}\n{}", lines.join("\n")));
            }
        }
    }
}

/// Splits the raw homepage into section bodies joined by blank lines, without the title.
#[must_use]
pub fn parse(raw: &str) -> Localized<String> {
    let mut output = Localized::<Vec<String>>::default();
    let mut section = Section::default();

    for line in raw.split('\n') {
        if let Some(title) = text::heading(line, 2) {
            std::mem::replace(&mut section, Section::new(title)).flush(&mut output);
            continue;
        }

        if let Some(subsection) = text::heading(line, 3) {
            for locale in Locale::ALL {
                let header = sections::subsection_header(subsection, locale);
                section.push(locale, format!("\n### {header}"));
            }
            continue;
        }

        if line.trim().starts_with("- **") {
            if let Some((key, value)) = text::parse_list_key_value(line) {
                if let Some(key) = key.strip_suffix("(EN)") {
                    section.push(Locale::En, format!("- **{}**: {value}", key.trim_end()));
                } else if let Some(key) = key.strip_suffix("(ZH)") {
                    section.push(Locale::Zh, format!("- **{}**: {value}", key.trim_end()));
                } else {
                    section.push_both(&format!("- **{key}**: {value}"));
                }
            }
        }
    }
    section.flush(&mut output);

    output.map(|sections| sections.join("\n\n"))
}

/// Splits the raw homepage into the complete per-locale files.
#[must_use]
pub fn split(raw: &str) -> Localized<String> {
    let body = parse(raw);
    Localized::new(format!("{EN_TITLE}\n\n{}", body.en), format!("{ZH_TITLE}\n\n{}", body.zh))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_by_language() {
        let raw = indoc! {"
            # Homepage (raw)

            ## Hero Section

            ### Main Content
            - **Title (EN)**: Which AI Actually Works?
            - **Title (ZH)**：哪个 AI 真的有效？
            - **Link**: /arena

            ## Trust Section
            - **Note (EN)**: English only

            ## Custom
            Some prose that is not a key value line.
        "};
        let result = split(raw);

        assert_eq!(
            result.en,
            indoc! {"
                # Homepage Content

                ## Hero Section

                ### Main Content
                - **Title**: Which AI Actually Works?
                - **Link**: /arena

                ## Trust Section
                - **Note**: English only"}
        );
        assert_eq!(
            result.zh,
            indoc! {"
                # 首页内容

                ## 英雄区

                ### 主要内容
                - **Title**: 哪个 AI 真的有效？
                - **Link**: /arena"}
        );
    }

    #[test]
    fn test_section_without_lines_for_locale() {
        let raw = "## Hero Section\n- **Title (ZH)**: 标题\n";
        let result = parse(raw);
        assert_eq!(result.en, "");
        assert_eq!(result.zh, "## 英雄区\n- **Title**: 标题");
    }
}
