// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locale-prefixed routes of the site.

use rwai_models::{ArenaQuery, Locale, SortField, SortOrder};

pub const ABOUT: &str = "about";
pub const FAQ: &str = "faq";
pub const ARENA: &str = "arena";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    /// `/`, redirects to the English home page.
    Root,
    Home(Locale),
    About(Locale),
    Faq(Locale),
    ArenaList(Locale, ArenaQuery),
    ArenaDetail(Locale, String),
    NotFound(Locale),
}

impl Route {
    /// Parses the path and the query string (without the `?`).
    ///
    /// Unknown query parameters and values are ignored.
    #[must_use]
    pub fn parse(path: &str, query: Option<&str>) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((first, rest)) = segments.split_first() else {
            return Self::Root;
        };
        let Ok(locale) = first.parse::<Locale>() else {
            return Self::NotFound(Locale::default());
        };

        match rest {
            [] => Self::Home(locale),
            [ABOUT] => Self::About(locale),
            [FAQ] => Self::Faq(locale),
            [ARENA] => Self::ArenaList(locale, query.map(parse_query).unwrap_or_default()),
            [ARENA, id] => match urlencoding::decode(id) {
                Ok(id) => Self::ArenaDetail(locale, id.into_owned()),
                Err(err) => {
                    log::debug!("Invalid arena id `{id}`: {err}");
                    Self::NotFound(locale)
                }
            },
            _ => Self::NotFound(locale),
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        match self {
            Self::Root => Locale::default(),
            Self::Home(locale)
            | Self::About(locale)
            | Self::Faq(locale)
            | Self::ArenaList(locale, _)
            | Self::ArenaDetail(locale, _)
            | Self::NotFound(locale) => *locale,
        }
    }

    /// The same page in another language.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        match self {
            Self::Root | Self::Home(_) => Self::Home(locale),
            Self::About(_) => Self::About(locale),
            Self::Faq(_) => Self::Faq(locale),
            Self::ArenaList(_, query) => Self::ArenaList(locale, *query),
            Self::ArenaDetail(_, id) => Self::ArenaDetail(locale, id.clone()),
            Self::NotFound(_) => Self::NotFound(locale),
        }
    }

    /// Link to the route. Not-found routes link to the home page.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Home(locale) | Self::NotFound(locale) => format!("/{locale}"),
            Self::About(locale) => format!("/{locale}/{ABOUT}"),
            Self::Faq(locale) => format!("/{locale}/{FAQ}"),
            Self::ArenaList(locale, query) => format!("/{locale}/{ARENA}{}", query_string(query)),
            Self::ArenaDetail(locale, id) => {
                format!("/{locale}/{ARENA}/{}", urlencoding::encode(id))
            }
        }
    }

    /// Path of the file the route is stored in when the site is rendered statically.
    ///
    /// Query parameters are not part of the path.
    #[must_use]
    pub fn file_path(&self) -> String {
        match self {
            Self::Root => "index.html".to_string(),
            Self::NotFound(_) => "404.html".to_string(),
            Self::ArenaList(locale, _) => format!("{locale}/{ARENA}/index.html"),
            _ => format!("{}/index.html", self.href().trim_start_matches('/')),
        }
    }
}

/// Parses the arena list query string, e.g. `industry=finance&sort=quality&order=asc`.
///
/// Keys and values are percent-decoded, surrounding whitespace in values is ignored.
#[must_use]
pub fn parse_query(query: &str) -> ArenaQuery {
    let mut result = ArenaQuery::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim();
        match key.as_ref() {
            "industry" => result.industry = value.parse().ok().or(result.industry),
            "category" => result.category = value.parse().ok().or(result.category),
            "sort" => result.sort = value.parse().unwrap_or(result.sort),
            "order" => result.order = value.parse().unwrap_or(result.order),
            _ => log::debug!("Ignoring query parameter `{key}`"),
        }
    }
    result
}

/// Builds the query string (with the leading `?`) for the arena list.
///
/// Default sorting is omitted, an empty query yields an empty string.
#[must_use]
pub fn query_string(query: &ArenaQuery) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if let Some(industry) = query.industry {
        params.append_pair("industry", industry.to_str());
    }
    if let Some(category) = query.category {
        params.append_pair("category", category.to_str());
    }
    if query.sort != SortField::default() || query.order != SortOrder::default() {
        params.append_pair("sort", query.sort.to_str());
        params.append_pair("order", query.order.to_str());
    }

    let params = params.finish();
    if params.is_empty() { params } else { format!("?{params}") }
}
