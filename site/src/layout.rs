// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document skeleton shared by all pages: head, navigation and footer.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use rwai_models::{ArenaQuery, Locale};

use crate::{defaults, route::Route};

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#111827;line-height:1.6}\
a{color:inherit}\
header,footer,main{padding:1.5rem max(1rem,calc(50% - 36rem))}\
header{display:flex;gap:1.5rem;align-items:center;border-bottom:1px solid #e5e7eb}\
header .brand{font-weight:700;margin-right:auto;text-decoration:none}\
footer{border-top:1px solid #e5e7eb;color:#4b5563;font-size:.9rem}\
section{margin:3rem 0}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1rem}\
.card{border:1px solid #e5e7eb;border-radius:.75rem;padding:1.25rem}\
.badge{display:inline-block;border-radius:999px;padding:.1rem .6rem;background:#f3f4f6;font-size:.8rem}\
.verified{background:#fef3c7;color:#92400e}\
.button{display:inline-block;border-radius:.5rem;padding:.6rem 1.2rem;background:#111827;color:#fff;text-decoration:none}\
.active{font-weight:700}\
table{border-collapse:collapse;width:100%}\
th,td{padding:.5rem;text-align:left;border-bottom:1px solid #e5e7eb;white-space:nowrap}\
.prose table{width:auto}\
.prose pre{background:#111827;color:#f3f4f6;padding:1rem;overflow-x:auto}";

/// A page ready to be wrapped in the document skeleton.
#[derive(Clone, Debug)]
pub struct Page<'a> {
    /// The route of the page, used for the language switch.
    pub route: &'a Route,
    pub title: &'a str,
    pub body: Markup,
}

fn header(route: &Route) -> Markup {
    let locale = route.locale();
    let other = locale.other();
    let links = [
        (Route::ArenaList(locale, ArenaQuery::default()), defaults::NAV_ARENA),
        (Route::About(locale), defaults::NAV_ABOUT),
        (Route::Faq(locale), defaults::NAV_FAQ),
    ];

    html! {
        header {
            a class="brand" href=(Route::Home(locale).href()) { (defaults::SITE_NAME) }
            @for (link, label) in &links {
                a href=(link.href()) { (label.get(locale)) }
            }
            a href=(route.with_locale(other).href()) hreflang=(other.html_lang()) {
                (defaults::LANGUAGE_SWITCH.get(locale))
            }
        }
    }
}

fn footer(locale: Locale) -> Markup {
    html! {
        footer {
            div class="grid" {
                div {
                    h3 { (defaults::SITE_NAME) }
                    p { (defaults::FOOTER_TAGLINE.get(locale)) }
                }
                div {
                    h4 { (defaults::FOOTER_PLATFORM.get(locale)) }
                    ul {
                        li {
                            a href=(Route::ArenaList(locale, ArenaQuery::default()).href()) {
                                (defaults::NAV_ARENA.get(locale))
                            }
                        }
                        li {
                            a href=(Route::Faq(locale).href()) { (defaults::NAV_FAQ.get(locale)) }
                        }
                    }
                }
                div {
                    h4 { (defaults::FOOTER_COMMUNITY.get(locale)) }
                    ul {
                        li { a href=(defaults::GITHUB_URL) { "GitHub" } }
                        li {
                            a href=(Route::About(locale).href()) {
                                (defaults::FOOTER_ABOUT.get(locale))
                            }
                        }
                    }
                }
            }
            p {
                a href=(defaults::GITHUB_URL) rel="noopener noreferrer" {
                    (defaults::FOOTER_FOLLOW.get(locale))
                }
            }
        }
    }
}

/// Wraps the page body in a complete HTML document.
#[must_use]
pub fn render(page: &Page<'_>) -> String {
    let locale = page.route.locale();
    let markup = html! {
        (DOCTYPE)
        html lang=(locale.html_lang()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) " | " (defaults::SITE_NAME) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (header(page.route))
                main { (page.body) }
                (footer(locale))
            }
        }
    };
    markup.into_string()
}

/// Document redirecting to another page, for static hosting.
#[must_use]
pub fn redirect(location: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content={ "0; url=" (location) };
                link rel="canonical" href=(location);
            }
            body { a href=(location) { (location) } }
        }
    };
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let route = Route::Faq(Locale::Zh);
        let body = html! { p { "body" } };
        let page = Page { route: &route, title: "常见问题 <FAQ>", body };
        let html = render(&page);
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"zh-CN\">"));
        assert!(html.contains("<title>常见问题 &lt;FAQ&gt; | RWAI Arena</title>"));
        assert!(html.contains("<main><p>body</p></main>"));
        assert!(html.contains("<a href=\"/en/faq\" hreflang=\"en\">English</a>"));
        assert!(html.contains("<a href=\"/zh/arena\">竞技场</a>"));
    }

    #[test]
    fn test_redirect() {
        let html = redirect("/en");
        assert!(html.contains("content=\"0; url=/en\""));
        assert!(html.contains("<link rel=\"canonical\" href=\"/en\">"));

        let html = redirect("/en?a=\"b\"&c");
        assert!(html.contains("href=\"/en?a=&quot;b&quot;&amp;c\""));
    }
}
