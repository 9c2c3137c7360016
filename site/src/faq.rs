// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use maud::{Markup, html};

use rwai_content::ContentLibrary;
use rwai_models::Locale;

use crate::{defaults, markdown_page};

pub const SECTION: &str = "FAQ";

fn built_in(locale: Locale) -> Markup {
    html! {
        section class="hero" {
            h1 { (defaults::FAQ_TITLE.get(locale)) }
            p class="subtitle" { (defaults::FAQ_SUBTITLE.get(locale)) }
        }

        @for category in &defaults::FAQ_CATEGORIES {
            section class="faq-category" {
                h2 { (category.name.get(locale)) }
                @for entry in &category.entries {
                    details {
                        summary { (entry.title.get(locale)) }
                        p { (entry.description.get(locale)) }
                    }
                }
            }
        }

        section class="contact" {
            h2 { (defaults::FAQ_CONTACT_TITLE.get(locale)) }
            p { (defaults::FAQ_CONTACT_TEXT.get(locale)) }
            p {
                a class="button" href=(defaults::GITHUB_URL) { "GitHub" }
                " "
                a class="button" href=(defaults::CONTACT_EMAIL) {
                    (defaults::SEND_EMAIL.get(locale))
                }
            }
        }
    }
}

/// Renders the FAQ page from `FAQ/page.<locale>.md`, or the built-in entries if it's missing.
///
/// Returns the page title and body.
#[must_use]
pub fn render(library: &ContentLibrary, locale: Locale) -> (String, Markup) {
    let default_title = *defaults::FAQ_TITLE.get(locale);
    match library.page(SECTION, locale) {
        Some(file) => markdown_page(&file, default_title),
        None => (default_title.to_string(), built_in(locale)),
    }
}
