// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use maud::{Markup, html};

use rwai_content::ContentLibrary;
use rwai_models::{ArenaQuery, Locale};

use crate::{defaults, markdown_page, route::Route};

pub const SECTION: &str = "About";

fn built_in(locale: Locale) -> Markup {
    html! {
        section class="hero" {
            h1 { (defaults::ABOUT_TITLE.get(locale)) }
            p class="subtitle" { (defaults::ABOUT_SUBTITLE.get(locale)) }
            p { (defaults::ABOUT_INTRO.get(locale)) }
        }

        section class="mission" {
            h2 { (defaults::MISSION_TITLE.get(locale)) }
            p { (defaults::MISSION_TEXT.get(locale)) }
            div class="grid" {
                @for value in &defaults::VALUES {
                    div class="card" {
                        h3 { (value.title.get(locale)) }
                        p { (value.description.get(locale)) }
                    }
                }
            }
        }

        section class="team" {
            h2 { (defaults::TEAM_TITLE.get(locale)) }
            p { (defaults::TEAM_SUBTITLE.get(locale)) }
            @for group in &defaults::TEAM_GROUPS {
                h3 { (group.title.get(locale)) }
                p { (group.description.get(locale)) }
            }
        }

        section class="achievements" {
            h2 { (defaults::ACHIEVEMENTS_TITLE.get(locale)) }
            div class="grid" {
                @for (value, label) in &defaults::ACHIEVEMENTS {
                    div class="card" {
                        strong { (value) }
                        p { (label.get(locale)) }
                    }
                }
            }
        }

        section class="contact" {
            h2 { (defaults::CONTACT_TITLE.get(locale)) }
            p { (defaults::CONTACT_TEXT.get(locale)) }
            div class="grid" {
                @for link in &defaults::CONTACT_LINKS {
                    a class="card" href=(link.href) {
                        h3 { (link.title) }
                        p { (link.description.get(locale)) }
                    }
                }
            }
        }

        section class="join" {
            h2 { (defaults::JOIN_TITLE.get(locale)) }
            p { (defaults::JOIN_TEXT.get(locale)) }
            h3 { (defaults::POSITIONS_TITLE.get(locale)) }
            p {
                @for position in &defaults::POSITIONS {
                    span class="badge" { (position.get(locale)) }
                    " "
                }
            }
            p { a class="button" href=(defaults::CAREERS_EMAIL) { (defaults::APPLY.get(locale)) } }
        }

        section class="final-cta" {
            h2 { (defaults::ABOUT_CTA_TITLE.get(locale)) }
            p { (defaults::ABOUT_CTA_TEXT.get(locale)) }
            p {
                a class="button" href=(Route::ArenaList(locale, ArenaQuery::default()).href()) {
                    (defaults::ABOUT_CTA_BUTTON.get(locale))
                }
            }
        }
    }
}

/// Renders the About page from `About/page.<locale>.md`, or the built-in texts if it's missing.
///
/// Returns the page title and body.
#[must_use]
pub fn render(library: &ContentLibrary, locale: Locale) -> (String, Markup) {
    let default_title = *defaults::ABOUT_TITLE.get(locale);
    match library.page(SECTION, locale) {
        Some(file) => markdown_page(&file, default_title),
        None => (default_title.to_string(), built_in(locale)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in() {
        let html = built_in(Locale::En).into_string();
        assert!(html.contains("<section class=\"mission\"><h2>Our Mission</h2>"));
        assert!(html.contains(&format!("<a class=\"card\" href=\"{}\">", defaults::DISCORD_URL)));

        let html = built_in(Locale::Zh).into_string();
        assert!(html.contains(&format!(
            "<a class=\"button\" href=\"{}\">",
            defaults::CAREERS_EMAIL
        )));
        assert!(html.contains("<a class=\"button\" href=\"/zh/arena\">"));
    }
}
