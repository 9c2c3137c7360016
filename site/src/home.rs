// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The home page, assembled from the sections of the homepage content file.

use maud::{Markup, html};

use rwai_content::{
    ContentLibrary,
    accessor::{self, Subsection},
    sections,
};
use rwai_models::{
    ArenaQuery, Catalog, Locale,
    models::{Arena, Industry, MetricKind},
};

use crate::{
    defaults::{self, Card, Text},
    route::Route,
};

/// Fields of one homepage section grouped by subsections.
struct Section {
    locale: Locale,
    subsections: Vec<Subsection>,
}

impl Section {
    fn load(library: &ContentLibrary, name: &str, locale: Locale) -> Self {
        let subsections = library
            .homepage_section(name, locale)
            .map(|file| accessor::parse_subsections(&file.content))
            .unwrap_or_default();
        Self { locale, subsections }
    }

    /// Looks up a non-empty field. `subsection` is the English subsection name.
    fn field(&self, subsection: &str, key: &str) -> Option<&str> {
        let title = sections::subsection_header(subsection, self.locale);
        self.subsections
            .iter()
            .find(|s| s.title == title)?
            .fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    fn text<'a>(&'a self, subsection: &str, key: &str, default: Text) -> &'a str {
        self.field(subsection, key).unwrap_or(*default.get(self.locale))
    }

    /// Reads the numbered subsections, e.g. `Step 1`, `Step 2`, with the defaults for each.
    fn cards(&self, prefix: &str, defaults: &[Card]) -> Vec<(&str, &str)> {
        defaults
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let name = format!("{prefix} {}", index + 1);
                (
                    self.text(&name, "Title", card.title),
                    self.text(&name, "Description", card.description),
                )
            })
            .collect()
    }
}

/// Prefixes site-internal links with the locale: `/arena` becomes `/en/arena`.
#[must_use]
pub fn localize_link(link: &str, locale: Locale) -> String {
    let Some(path) = link.strip_prefix('/') else {
        return link.to_string();
    };
    let first = path.split(['/', '?']).next().unwrap_or_default();
    if first.parse::<Locale>().is_ok() { link.to_string() } else { format!("/{locale}{link}") }
}

fn cards(cards: &[(&str, &str)], numbered: bool) -> Markup {
    html! {
        div class="grid" {
            @for (index, (title, description)) in cards.iter().enumerate() {
                div class="card" {
                    @if numbered {
                        span class="badge" { (format!("{:02}", index + 1)) }
                    }
                    h3 { (title) }
                    p { (description) }
                }
            }
        }
    }
}

fn hero(section: &Section) -> Markup {
    let locale = section.locale;
    let primary_link =
        section.field("CTA Buttons", "Primary Link").unwrap_or(defaults::HERO_PRIMARY_LINK);
    let secondary_link =
        section.field("CTA Buttons", "Secondary Link").unwrap_or(defaults::HERO_SECONDARY_LINK);

    html! {
        section class="hero" {
            p class="badge" { (section.text("Badges", "Text", defaults::HERO_BADGES)) }
            h1 { (section.text("Main Content", "Title", defaults::HERO_TITLE)) }
            p class="subtitle" {
                (section.text("Main Content", "Subtitle", defaults::HERO_SUBTITLE))
            }
            p { (section.text("Main Content", "Description", defaults::HERO_DESCRIPTION)) }
            p {
                a class="button" href=(localize_link(primary_link, locale)) {
                    (section.text("CTA Buttons", "Primary Text", defaults::HERO_PRIMARY_TEXT))
                }
                " "
                a class="button" href=(localize_link(secondary_link, locale)) {
                    (section.text("CTA Buttons", "Secondary Text", defaults::HERO_SECONDARY_TEXT))
                }
            }
        }
    }
}

fn section_header(section: &Section, title: Text, subtitle: Text) -> Markup {
    html! {
        h2 { (section.text("Header", "Title", title)) }
        p { (section.text("Header", "Subtitle", subtitle)) }
    }
}

/// Card of an arena, also used on the home page's featured list.
#[must_use]
pub fn arena_card(arena: &Arena, locale: Locale) -> Markup {
    let status_class = if arena.status.is_verified() { "badge verified" } else { "badge" };
    html! {
        div class="card" {
            p {
                span class=(status_class) { (arena.status.label(locale)) }
                " "
                span class="badge" {
                    (arena.metrics.quality) "% " (MetricKind::Quality.label(locale))
                }
            }
            h3 {
                a href=(Route::ArenaDetail(locale, arena.id.clone()).href()) {
                    (arena.title.get(locale))
                }
            }
            p {
                span class="badge" { (arena.industry.label(locale)) }
                " "
                span class="badge" { (arena.category.label(locale)) }
            }
            p { (arena.description.get(locale)) }
            p {
                (MetricKind::Quality.label(locale)) ": " (arena.metrics.quality)
                " · "
                (MetricKind::Efficiency.label(locale)) ": " (arena.metrics.efficiency)
            }
        }
    }
}

fn industries(section: &Section, catalog: &Catalog) -> Markup {
    let locale = section.locale;
    html! {
        section class="industries" {
            (section_header(section, defaults::INDUSTRIES_TITLE, defaults::INDUSTRIES_SUBTITLE))
            div class="grid" {
                @for industry in Industry::ALL {
                    @let query = ArenaQuery::default().with_industry(Some(industry));
                    a class="card" href=(Route::ArenaList(locale, query).href())
                        data-icon=(industry.icon()) {
                        (industry.label(locale))
                        " "
                        span { "(" (catalog.filter(None, Some(industry)).len()) ")" }
                    }
                }
            }
        }
    }
}

fn case_studies(section: &Section) -> Markup {
    const CASE: &str = "Case Study 1";
    let locale = section.locale;
    let case = defaults::CASE_STUDY;

    html! {
        section class="case-studies" {
            (section_header(section, defaults::CASE_STUDIES_TITLE, defaults::CASE_STUDIES_SUBTITLE))
            div class="card" {
                h3 { (section.text(CASE, "Title", case.title)) }
                p { (section.text(CASE, "Company", case.company)) }
                p {
                    (defaults::BEFORE.get(locale)) ": " (section.text(CASE, "Before", case.before))
                }
                p {
                    (defaults::AFTER.get(locale)) ": " (section.text(CASE, "After", case.after))
                }
                p {
                    strong { (section.field(CASE, "Efficiency").unwrap_or(case.efficiency)) }
                    " " (defaults::EFFICIENCY.get(locale)) " · "
                    strong { (section.field(CASE, "Accuracy").unwrap_or(case.accuracy)) }
                    " " (defaults::ACCURACY.get(locale))
                }
            }
        }
    }
}

fn final_cta(section: &Section) -> Markup {
    let link = section.field("Content", "Button Link").unwrap_or(defaults::HERO_PRIMARY_LINK);
    html! {
        section class="final-cta" {
            h2 { (section.text("Content", "Title", defaults::FINAL_CTA_TITLE)) }
            p { (section.text("Content", "Description", defaults::FINAL_CTA_DESCRIPTION)) }
            p {
                a class="button" href=(localize_link(link, section.locale)) {
                    (section.text("Content", "Button Text", defaults::FINAL_CTA_BUTTON))
                }
                " "
                a class="button" href=(defaults::GITHUB_URL) { "GitHub" }
            }
            p { small { (section.text("Content", "Note", defaults::FINAL_CTA_NOTE)) } }
        }
    }
}

/// Renders the body of the home page.
#[must_use]
pub fn render(library: &ContentLibrary, catalog: &Catalog, locale: Locale) -> Markup {
    let section = |name| Section::load(library, name, locale);
    let featured = section(sections::FEATURED_ARENAS);
    let approach = section(sections::APPROACH);
    let practice = section(sections::PRACTICE_INCLUDES);
    let trust = section(sections::TRUST);

    html! {
        (hero(&section(sections::HERO)))

        section class="featured" {
            (section_header(&featured, defaults::FEATURED_TITLE, defaults::FEATURED_SUBTITLE))
            div class="grid" {
                @for arena in catalog.featured(defaults::FEATURED_COUNT) {
                    (arena_card(arena, locale))
                }
            }
        }

        (industries(&section(sections::INDUSTRIES), catalog))

        section class="approach" {
            h2 { (approach.text("Header", "Title", defaults::APPROACH_TITLE)) }
            p { (approach.text("Header", "Description", defaults::APPROACH_DESCRIPTION)) }
            (cards(&approach.cards("Step", &defaults::APPROACH_STEPS), true))
        }

        section class="practice" {
            (section_header(&practice, defaults::PRACTICE_TITLE, defaults::PRACTICE_SUBTITLE))
            (cards(&practice.cards("Feature", &defaults::PRACTICE_FEATURES), false))
        }

        (case_studies(&section(sections::CASE_STUDIES)))

        section class="trust" {
            h2 { (trust.text("Header", "Title", defaults::TRUST_TITLE)) }
            (cards(&trust.cards("Trust Point", &defaults::TRUST_POINTS), false))
        }

        (final_cta(&section(sections::FINAL_CTA)))
    }
}

/// Title of the home page shown in the browser tab.
#[must_use]
pub fn title(locale: Locale) -> &'static str {
    *defaults::HERO_TITLE.get(locale)
}

#[cfg(test)]
mod tests {
    use rwai_models::Localized;

    use super::*;

    #[test]
    fn test_localize_link() {
        assert_eq!(localize_link("/arena", Locale::Zh), "/zh/arena");
        assert_eq!(localize_link("/arena?industry=retail", Locale::En), "/en/arena?industry=retail");
        assert_eq!(localize_link("/en/faq", Locale::Zh), "/en/faq");
        assert_eq!(localize_link("https://github.com", Locale::Zh), "https://github.com");
    }

    #[test]
    fn test_section_fields() {
        let section = Section {
            locale: Locale::Zh,
            subsections: vec![Subsection {
                title: "步骤 2".to_string(),
                fields: [("Title".to_string(), "定义场景".to_string())].into(),
            }],
        };
        let steps = section.cards("Step", &defaults::APPROACH_STEPS);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].0, "定义真实场景");
        assert_eq!(steps[1].0, "定义场景");
        assert_eq!(steps[1].1, *defaults::APPROACH_STEPS[1].description.get(Locale::Zh));
        assert_eq!(section.text("Badges", "Text", Localized::new("Badge", "徽章")), "徽章");
    }

    #[test]
    fn test_content_is_escaped() {
        let section = Section {
            locale: Locale::En,
            subsections: vec![
                Subsection {
                    title: "Main Content".to_string(),
                    fields: [("Title".to_string(), "<script>alert(1)</script> & more".to_string())]
                        .into(),
                },
                Subsection {
                    title: "CTA Buttons".to_string(),
                    fields: [("Primary Link".to_string(), "/arena?a=\"b\"".to_string())].into(),
                },
            ],
        };
        let html = hero(&section).into_string();
        assert!(html.contains("<h1>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</h1>"));
        assert!(html.contains("href=\"/en/arena?a=&quot;b&quot;\""));
        assert!(!html.contains("<script>"));
    }
}
