// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena list and arena detail pages.

use maud::{Markup, html};

use rwai_content::{ContentLibrary, accessor::ARENA_SECTION, text};
use rwai_models::{
    ArenaQuery, Catalog, Locale, SortField, SortOrder,
    models::{Arena, ArenaPage, Category, Industry, MetricKind, VerificationStatus},
};

use crate::{defaults, html as html_mod, route::Route};

/// Extracts the first `#` heading and the first paragraph line after it.
fn page_header(content: &str) -> (Option<&str>, Option<&str>) {
    let mut lines = content.lines().map(str::trim);
    let title = lines.by_ref().find_map(|line| text::heading(line, 1));
    let subtitle = title.and_then(|_| {
        lines.find(|line| !line.is_empty() && !line.starts_with('#') && *line != "---")
    });
    (title, subtitle)
}

/// Title and subtitle of the arena list, from `Arena/page.<locale>.md` if present.
#[must_use]
pub fn list_header(library: &ContentLibrary, locale: Locale) -> (String, String) {
    let file = library.page(ARENA_SECTION, locale);
    let (title, subtitle) =
        file.as_ref().map(|file| page_header(&file.content)).unwrap_or_default();
    (
        title.unwrap_or(*defaults::ARENA_TITLE.get(locale)).to_string(),
        subtitle.unwrap_or(*defaults::ARENA_SUBTITLE.get(locale)).to_string(),
    )
}

fn sort_indicator(query: &ArenaQuery, field: SortField) -> &'static str {
    match (query.sort == field, query.order) {
        (false, _) => "↕",
        (true, SortOrder::Ascending) => "↑",
        (true, SortOrder::Descending) => "↓",
    }
}

fn filter_link(
    locale: Locale,
    query: ArenaQuery,
    active: bool,
    label: &str,
    count: Option<usize>,
) -> Markup {
    html! {
        li {
            a class=[active.then_some("active")] href=(Route::ArenaList(locale, query).href()) {
                (label)
                @if let Some(count) = count {
                    " " span { "(" (count) ")" }
                }
            }
        }
    }
}

fn filters(catalog: &Catalog, locale: Locale, query: &ArenaQuery) -> Markup {
    html! {
        aside {
            h3 { (defaults::FILTER_BY_INDUSTRY.get(locale)) }
            ul class="industries" {
                (filter_link(
                    locale,
                    query.with_industry(None),
                    query.industry.is_none(),
                    defaults::ALL_INDUSTRIES.get(locale),
                    Some(catalog.len()),
                ))
                @for industry in Industry::ALL {
                    (filter_link(
                        locale,
                        query.with_industry(Some(industry)),
                        query.industry == Some(industry),
                        industry.label(locale),
                        Some(catalog.filter(None, Some(industry)).len()),
                    ))
                }
            }

            h3 { (defaults::FILTER_BY_CATEGORY.get(locale)) }
            ul class="categories" {
                (filter_link(
                    locale,
                    query.with_category(None),
                    query.category.is_none(),
                    defaults::ALL_CATEGORIES.get(locale),
                    None,
                ))
                @for category in Category::ALL {
                    (filter_link(
                        locale,
                        query.with_category(Some(category)),
                        query.category == Some(category),
                        category.label(locale),
                        None,
                    ))
                }
            }
        }
    }
}

fn status_class(arena: &Arena) -> &'static str {
    if arena.status.is_verified() { "badge verified" } else { "badge" }
}

fn row(arena: &Arena, locale: Locale) -> Markup {
    html! {
        tr {
            td { strong { (arena.title.get(locale)) } }
            td {
                a class="button" href=(Route::ArenaDetail(locale, arena.id.clone()).href()) {
                    (defaults::VIEW_DETAILS.get(locale))
                }
            }
            td { span class=(status_class(arena)) { (arena.status.label(locale)) } }
            td { (arena.category.label(locale)) }
            td data-icon=(arena.industry.icon()) { (arena.industry.label(locale)) }
            @for kind in MetricKind::ALL {
                td { (arena.metrics.get(kind)) }
            }
            td { "★ " (arena.github.stars) }
            td { (arena.github.forks) }
        }
    }
}

fn table(arenas: &[&Arena], locale: Locale, query: &ArenaQuery) -> Markup {
    let cleared = ArenaQuery { industry: None, category: None, ..*query };
    html! {
        table {
            thead {
                tr {
                    @for field in SortField::ALL {
                        @let label = match field {
                            SortField::Name => *defaults::ARENA_NAME.get(locale),
                            _ => field.label(locale),
                        };
                        th {
                            a href=(Route::ArenaList(locale, query.toggled(field)).href()) {
                                (label) " " (sort_indicator(query, field))
                            }
                        }
                        @if field == SortField::Name {
                            th { (defaults::ACTION.get(locale)) }
                        }
                    }
                }
            }
            tbody {
                @if arenas.is_empty() {
                    tr {
                        td colspan=(SortField::ALL.len() + 1) {
                            h3 { (defaults::NO_RESULTS_TITLE.get(locale)) }
                            p { (defaults::NO_RESULTS_TEXT.get(locale)) }
                            a class="button" href=(Route::ArenaList(locale, cleared).href()) {
                                (defaults::CLEAR_FILTERS.get(locale))
                            }
                        }
                    }
                }
                @for arena in arenas {
                    (row(arena, locale))
                }
            }
        }
    }
}

/// Renders the arena list filtered and sorted by the query.
///
/// Returns the page title and body.
#[must_use]
pub fn render_list(
    library: &ContentLibrary,
    catalog: &Catalog,
    locale: Locale,
    query: &ArenaQuery,
) -> (String, Markup) {
    let (title, subtitle) = list_header(library, locale);
    let stats = catalog.stats();
    let stat_items = [
        (locale.pick("Total", "总方案"), stats.total_blueprints),
        (VerificationStatus::Verified.label(locale), stats.verified_count),
        (VerificationStatus::InArena.label(locale), stats.total_blueprints - stats.verified_count),
    ];

    let body = html! {
        section class="hero" {
            h1 { (title) }
            p class="subtitle" { (subtitle) }
            div class="grid" {
                @for (label, value) in stat_items {
                    div class="card" {
                        strong { (value) }
                        p { (label) }
                    }
                }
            }
        }
        section class="arena-list" {
            (filters(catalog, locale, query))
            (table(&catalog.query(query, locale), locale, query))
        }
    };
    (title, body)
}

/// Link writing to the arena experts about the arena.
fn expert_mailto(title: &str) -> String {
    let subject = format!("Arena: {title}");
    format!("{}?subject={}", defaults::EXPERT_EMAIL, urlencoding::encode(&subject))
}

fn detail_header(arena: &Arena, locale: Locale) -> Markup {
    let title = arena.title.get(locale);
    html! {
        section class="hero" {
            p {
                a href=(Route::ArenaList(locale, ArenaQuery::default()).href()) {
                    "← " (defaults::BACK_TO_LIST.get(locale))
                }
            }
            h1 { (title) }
            p {
                span class=(status_class(arena)) { (arena.status.label(locale)) }
                " "
                span class="badge" { (arena.industry.label(locale)) }
                " "
                span class="badge" { (arena.category.label(locale)) }
            }
            p class="subtitle" { (arena.description.get(locale)) }

            div class="grid metrics" {
                @for kind in MetricKind::ALL {
                    div class="card" {
                        strong { (arena.metrics.get(kind)) }
                        p { (kind.label(locale)) }
                    }
                }
            }

            p {
                "★ " (arena.github.stars) " " (SortField::Stars.label(locale))
                " · " (arena.github.forks) " " (SortField::Forks.label(locale))
                " · "
                a href=(arena.github.url) { (defaults::VIEW_ON_GITHUB.get(locale)) }
            }

            @if !arena.highlights.is_empty() {
                h2 { (defaults::HIGHLIGHTS.get(locale)) }
                ul class="highlights" {
                    @for highlight in &arena.highlights {
                        li { (highlight) }
                    }
                }
            }

            p {
                a class="button" href=(expert_mailto(title)) {
                    (defaults::CONTACT_EXPERT.get(locale))
                }
            }
        }
    }
}

/// Renders the detail page of the arena with one tab per content page present on disk.
///
/// Returns the page title and body.
#[must_use]
pub fn render_detail(library: &ContentLibrary, arena: &Arena, locale: Locale) -> (String, Markup) {
    let tabs: Vec<(ArenaPage, String)> = ArenaPage::ALL
        .into_iter()
        .filter_map(|page| {
            library.arena_page(&arena.id, page, locale).map(|file| (page, file.content))
        })
        .collect();

    let body = html! {
        (detail_header(arena, locale))
        @if tabs.is_empty() {
            p class="notice" { (defaults::NO_CONTENT.get(locale)) }
        } @else {
            nav class="tabs" role="tablist" {
                @for (page, _) in &tabs {
                    a href={ "#" (page.to_str()) } role="tab" { (page.label(locale)) }
                }
            }
            @for (page, content) in &tabs {
                section id=(page.to_str()) class="prose" role="tabpanel" {
                    (html_mod::markdown(content))
                }
            }
        }
    };
    (arena.title.get(locale).clone(), body)
}
