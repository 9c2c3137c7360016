// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTML pages of the arena site, rendered from the content tree and the arena catalog.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod about;
pub mod arena;
pub mod defaults;
pub mod faq;
pub mod home;
pub mod html;
pub mod layout;
pub mod route;

use maud::{Markup, html};

use rwai_content::{ContentFile, ContentLibrary};
use rwai_models::{ArenaQuery, Catalog, Locale};

pub use crate::route::Route;

/// Outcome of rendering a route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rendered {
    /// A complete HTML document.
    Page(String),

    /// HTML document explaining the page does not exist.
    NotFound(String),

    /// Location to redirect to.
    Redirect(String),
}

impl Rendered {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

/// Renders markdown content, taking the page title from the frontmatter if available.
pub(crate) fn markdown_page(file: &ContentFile, default_title: &str) -> (String, Markup) {
    let title = file
        .frontmatter
        .as_ref()
        .and_then(|frontmatter| frontmatter.get("title"))
        .map_or(default_title, String::as_str);
    let body = html! {
        article class="prose" { (html::markdown(&file.content)) }
    };
    (title.to_string(), body)
}

fn not_found(locale: Locale) -> Rendered {
    log::debug!("Page not found ({locale})");
    let route = Route::NotFound(locale);
    let title = *defaults::NOT_FOUND_TITLE.get(locale);
    let body = html! {
        section class="hero" {
            h1 { (title) }
            p { (defaults::NOT_FOUND_TEXT.get(locale)) }
            p {
                a class="button" href=(Route::Home(locale).href()) {
                    (defaults::BACK_HOME.get(locale))
                }
            }
        }
    };
    Rendered::NotFound(layout::render(&layout::Page { route: &route, title, body }))
}

/// The whole site. Content is read from disk on every render.
#[derive(Clone, Debug)]
pub struct Site {
    library: ContentLibrary,
    catalog: Catalog,
}

impl Site {
    #[must_use]
    pub fn new(library: ContentLibrary, catalog: Catalog) -> Self {
        Self { library, catalog }
    }

    #[must_use]
    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Renders the page for the route.
    #[must_use]
    pub fn render(&self, route: &Route) -> Rendered {
        let (title, body) = match route {
            Route::Root => return Rendered::Redirect(Route::Home(Locale::En).href()),
            Route::Home(locale) => {
                let body = home::render(&self.library, &self.catalog, *locale);
                (home::title(*locale).to_string(), body)
            }
            Route::About(locale) => about::render(&self.library, *locale),
            Route::Faq(locale) => faq::render(&self.library, *locale),
            Route::ArenaList(locale, query) => {
                arena::render_list(&self.library, &self.catalog, *locale, query)
            }
            Route::ArenaDetail(locale, id) => match self.catalog.get(id) {
                Some(arena) => arena::render_detail(&self.library, arena, *locale),
                None => return not_found(*locale),
            },
            Route::NotFound(locale) => return not_found(*locale),
        };

        Rendered::Page(layout::render(&layout::Page { route, title: &title, body }))
    }

    /// Parses the path and query and renders the page.
    #[must_use]
    pub fn render_path(&self, path: &str, query: Option<&str>) -> Rendered {
        self.render(&Route::parse(path, query))
    }

    /// All routes of a statically rendered site: the pages of both locales, one detail page
    /// per catalog arena and the not-found page.
    #[must_use]
    pub fn static_routes(&self) -> Vec<Route> {
        let mut routes = vec![Route::Root];
        for locale in Locale::ALL {
            routes.push(Route::Home(locale));
            routes.push(Route::About(locale));
            routes.push(Route::Faq(locale));
            routes.push(Route::ArenaList(locale, ArenaQuery::default()));
            routes.extend(
                self.catalog.all().iter().map(|arena| Route::ArenaDetail(locale, arena.id.clone())),
            );
        }
        routes.push(Route::NotFound(Locale::default()));
        routes
    }
}
