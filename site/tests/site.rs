use std::{fs, path::Path};

use indoc::indoc;
use pretty_assertions::assert_eq;

use rwai_content::{ContentLibrary, sync};
use rwai_models::{ArenaQuery, Catalog, Locale, models::Industry};
use rwai_site::{Rendered, Route, Site};

const ARENA_ID: &str = "intelligent-research-system-v1";

const HOMEPAGE_RAW: &str = indoc! {"
    # Homepage

    ## Hero Section

    ### Main Content
    - **Title (EN)**: Pick the AI that works
    - **Title (ZH)**: 选出有效的 AI

    ### CTA Buttons
    - **Primary Text (EN)**: Enter
    - **Primary Text (ZH)**: 进入
    - **Primary Link**: /arena
"};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn site(root: &Path) -> Site {
    Site::new(ContentLibrary::new(root), Catalog::builtin())
}

fn page(site: &Site, path: &str, query: Option<&str>) -> String {
    match site.render_path(path, query) {
        Rendered::Page(html) => html,
        other => panic!("Expected a page for {path}, got {other:?}"),
    }
}

#[test]
fn root_redirects_to_english() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());
    assert_eq!(site.render_path("/", None), Rendered::Redirect("/en".to_string()));
}

#[test]
fn home_uses_built_in_texts_without_content() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());

    let html = page(&site, "/en", None);
    assert!(html.contains("<h1>Which AI Actually Works?</h1>"));
    assert!(html.contains("Intelligent Research &amp; Report Generation System"));
    assert!(html.contains("href=\"/en/arena?industry=finance\""));

    let html = page(&site, "/zh/", None);
    assert!(html.contains("<html lang=\"zh-CN\">"));
    assert!(html.contains("<h1>哪个 AI 真的有效？</h1>"));
}

#[test]
fn home_reads_synced_homepage() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("Homepage/homepage.raw.md"), HOMEPAGE_RAW);
    sync::sync_all(dir.path()).unwrap();
    let site = site(dir.path());

    let html = page(&site, "/en", None);
    assert!(html.contains("<h1>Pick the AI that works</h1>"));
    assert!(html.contains("<a class=\"button\" href=\"/en/arena\">Enter</a>"));

    let html = page(&site, "/zh", None);
    assert!(html.contains("<h1>选出有效的 AI</h1>"));
    assert!(html.contains("<a class=\"button\" href=\"/zh/arena\">进入</a>"));
    // Missing fields keep the built-in texts.
    assert!(html.contains("我们测试它们。只推荐最佳实践。"));
}

#[test]
fn about_renders_markdown_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());
    let html = page(&site, "/en/about", None);
    assert!(html.contains("<title>About RWAI | RWAI Arena</title>"));
    assert!(html.contains("<h2>Our Mission</h2>"));

    write(
        &dir.path().join("About/page.en.md"),
        "---\ntitle: About us\n---\n# Who we are\n\nA **small** team.\n",
    );
    let html = page(&site, "/en/about", None);
    assert!(html.contains("<title>About us | RWAI Arena</title>"));
    assert!(html.contains("<h1>Who we are</h1>"));
    assert!(html.contains("<p>A <strong>small</strong> team.</p>"));
    assert!(!html.contains("Our Mission"));

    // The Chinese page falls back to the English file.
    let html = page(&site, "/zh/about", None);
    assert!(html.contains("<title>关于 RWAI | RWAI Arena</title>"));
    assert!(html.contains("<h1>Who we are</h1>"));
    assert!(!html.contains("title: About us"));
}

#[test]
fn faq_uses_built_in_questions() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());
    let html = page(&site, "/zh/faq", None);
    assert!(html.contains("<title>常见问题 | RWAI Arena</title>"));
    assert_eq!(html.matches("<details>").count(), 12);
}

#[test]
fn arena_list_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("Arena/page.en.md"), "# Arena\n\nThe best practices.\n");
    let site = site(dir.path());

    let html = page(&site, "/en/arena", None);
    assert!(html.contains("<h1>Arena</h1>"));
    assert!(html.contains("<p class=\"subtitle\">The best practices.</p>"));
    assert!(html.contains(&format!("href=\"/en/arena/{ARENA_ID}\"")));
    assert!(html.contains("<a href=\"/en/arena?sort=stars&amp;order=asc\">Stars ↓</a>"));
    assert!(!html.contains("No Solutions Found"));

    let html = page(&site, "/zh/arena", Some("industry=retail&sort=quality&order=asc"));
    assert!(html.contains("<h1>真实AI竞技场</h1>"));
    assert!(html.contains("暂无此组合的方案"));
    assert!(!html.contains(&format!("href=\"/zh/arena/{ARENA_ID}\"")));
    assert!(html.contains("href=\"/zh/arena?sort=quality&amp;order=asc\""));
}

#[test]
fn arena_list_decodes_percent_encoded_query() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());

    let html = page(&site, "/en/arena", Some("industry=%66inance%20"));
    assert!(html.contains("<a class=\"active\" href=\"/en/arena?industry=finance\">Finance"));
    assert!(html.contains(&format!("href=\"/en/arena/{ARENA_ID}\"")));

    let html = page(&site, "/en/arena", Some("category=risk%2Dcontrol"));
    assert!(html.contains("<a class=\"active\" href=\"/en/arena?category=risk-control\">"));
    assert!(html.contains("No Solutions Found"));
    assert!(!html.contains(&format!("href=\"/en/arena/{ARENA_ID}\"")));

    let html = page(&site, "/en/arena/intelligent%2Dresearch-system-v1", None);
    assert!(html.contains("<h1>Intelligent Research &amp; Report Generation System</h1>"));
}

#[test]
fn arena_detail_shows_content_tabs() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());

    let path = format!("/en/arena/{ARENA_ID}");
    let html = page(&site, &path, None);
    assert!(html.contains("<p class=\"notice\">"));
    assert!(html.contains("★ 1284"));
    assert!(html.contains("href=\"mailto:contactmx@163.com?subject=Arena%3A%20Intelligent%20"));

    write(
        &dir.path().join(format!("Arena/{ARENA_ID}/overview.en.md")),
        "# Overview\n\nA research system.\n",
    );
    write(
        &dir.path().join(format!("Arena/{ARENA_ID}/requirements.zh.md")),
        "# 需求\n\n| 项目 | 值 |\n|---|---|\n| 速度 | 快 |\n",
    );

    let html = page(&site, &path, None);
    assert!(!html.contains("<p class=\"notice\">"));
    assert!(html.contains("<a href=\"#overview\" role=\"tab\">Overview</a>"));
    assert!(html.contains("<p>A research system.</p>"));
    assert!(!html.contains("#requirements"));

    let html = page(&site, &format!("/zh/arena/{ARENA_ID}"), None);
    assert!(html.contains("<a href=\"#overview\" role=\"tab\">概览</a>"));
    assert!(html.contains("<a href=\"#requirements\" role=\"tab\">需求文档</a>"));
    assert!(html.contains("<td>快</td>"));
}

#[test]
fn unknown_pages_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());

    for path in ["/en/arena/unknown", "/fr", "/zh/framework"] {
        let rendered = site.render_path(path, None);
        assert!(!rendered.is_found(), "{path}");
    }
    let Rendered::NotFound(html) = site.render_path("/zh/nothing", None) else {
        panic!("Expected not found");
    };
    assert!(html.contains("<h1>页面未找到</h1>"));
}

#[test]
fn static_routes_cover_both_locales() {
    let dir = tempfile::tempdir().unwrap();
    let site = site(dir.path());
    let routes = site.static_routes();

    assert_eq!(routes.len(), 12);
    assert_eq!(routes.first(), Some(&Route::Root));
    assert!(routes.contains(&Route::ArenaList(Locale::Zh, ArenaQuery::default())));
    assert!(routes.contains(&Route::ArenaDetail(Locale::En, ARENA_ID.to_string())));
    assert!(!routes.contains(&Route::ArenaList(
        Locale::En,
        ArenaQuery::default().with_industry(Some(Industry::Finance))
    )));

    let mut paths: Vec<String> = routes.iter().map(Route::file_path).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), routes.len());
}
