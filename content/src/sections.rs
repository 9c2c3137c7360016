// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Homepage section and subsection names.
//!
//! Raw homepage files use English headers. The generated Chinese file uses the translated
//! headers, so both the sync pipeline and the content accessor map headers through here.

use rwai_models::Locale;

pub const HERO: &str = "Hero Section";
pub const FEATURED_ARENAS: &str = "Featured Arenas Section";
pub const INDUSTRIES: &str = "Industries Section";
pub const APPROACH: &str = "Approach Section";
pub const PRACTICE_INCLUDES: &str = "Practice Includes Section";
pub const CASE_STUDIES: &str = "Case Studies Section";
pub const TRUST: &str = "Trust Section";
pub const FINAL_CTA: &str = "Final CTA Section";

const SECTIONS: [(&str, &str); 8] = [
    (HERO, "英雄区"),
    (FEATURED_ARENAS, "精选实践区"),
    (INDUSTRIES, "行业区"),
    (APPROACH, "方法区"),
    (PRACTICE_INCLUDES, "实践包含区"),
    (CASE_STUDIES, "案例研究区"),
    (TRUST, "信任区"),
    (FINAL_CTA, "最终行动区"),
];

const SUBSECTIONS: [(&str, &str); 16] = [
    ("Badges", "徽章"),
    ("Main Content", "主要内容"),
    ("CTA Buttons", "行动按钮"),
    ("Content", "内容"),
    ("Header", "标题区"),
    ("Step 1", "步骤 1"),
    ("Step 2", "步骤 2"),
    ("Step 3", "步骤 3"),
    ("Feature 1", "特点 1"),
    ("Feature 2", "特点 2"),
    ("Feature 3", "特点 3"),
    ("Feature 4", "特点 4"),
    ("Case Study 1", "案例 1"),
    ("Trust Point 1", "信任点 1"),
    ("Trust Point 2", "信任点 2"),
    ("Trust Point 3", "信任点 3"),
];

fn translate<'a>(table: &[(&'static str, &'static str)], name: &'a str, locale: Locale) -> &'a str {
    match locale {
        Locale::En => name,
        Locale::Zh => table
            .iter()
            .find(|(en, _)| *en == name)
            .map_or(name, |(_, zh)| *zh),
    }
}

/// Returns the header of the homepage section in the given locale.
///
/// Unknown names are returned unchanged.
#[must_use]
pub fn section_header(name: &str, locale: Locale) -> &str {
    translate(&SECTIONS, name, locale)
}

/// Returns the header of the homepage subsection in the given locale.
///
/// Unknown names are returned unchanged.
#[must_use]
pub fn subsection_header(name: &str, locale: Locale) -> &str {
    translate(&SUBSECTIONS, name, locale)
}
