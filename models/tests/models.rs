// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pretty_assertions::assert_eq;

use rwai_models::{
    ArenaQuery, Catalog, Locale, Localized, SortField, SortOrder, Stats,
    errors::ModelsError,
    models::{Arena, Category, GitHubData, Industry, Metrics, VerificationStatus},
};

fn arena(id: &str, category: Category, industry: Industry, quality: u8, stars: u32) -> Arena {
    Arena {
        id: id.to_string(),
        title: Localized::new(format!("Title {id}"), format!("标题 {id}")),
        description: Localized::default(),
        category,
        industry,
        status: if quality > 90 {
            VerificationStatus::Verified
        } else {
            VerificationStatus::InArena
        },
        metrics: Metrics { quality, efficiency: 50, cost: 50, trust: 50 },
        github: GitHubData { stars, forks: stars / 10, url: String::new() },
        highlights: Vec::new(),
        image: None,
        created_at: chrono::NaiveDate::default(),
        updated_at: chrono::NaiveDate::default(),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        arena("c", Category::Service, Industry::Finance, 95, 100),
        arena("a", Category::General, Industry::Retail, 80, 300),
        arena("b", Category::Marketing, Industry::Finance, 92, 200),
        arena("d", Category::Service, Industry::Energy, 70, 200),
    ])
    .unwrap()
}

fn ids(arenas: &[&Arena]) -> Vec<String> {
    arenas.iter().map(|a| a.id.clone()).collect()
}

#[test]
fn catalog_rejects_repeated_ids() {
    let result = Catalog::new(vec![
        arena("a", Category::Service, Industry::Finance, 95, 100),
        arena("a", Category::Service, Industry::Retail, 95, 100),
    ]);
    assert_eq!(result.unwrap_err(), ModelsError::RepeatedArenaId("a".to_string()));
}

#[test]
fn builtin_catalog_is_valid() {
    let builtin = Catalog::builtin();
    let copy = Catalog::new(builtin.all().to_vec());
    assert!(copy.is_ok());
    assert!(builtin.get("intelligent-research-system-v1").is_some());
    assert!(builtin.get("missing").is_none());
}

#[test]
fn featured_is_capped() {
    let catalog = catalog();
    assert_eq!(catalog.featured(2).len(), 2);
    assert_eq!(catalog.featured(6).len(), 4);
    assert_eq!(catalog.featured(0).len(), 0);
}

#[test]
fn filter_by_category_includes_general() {
    let catalog = catalog();
    let service: Vec<&Arena> = catalog.filter(Some(Category::Service), None);
    assert_eq!(ids(&service), vec!["c", "a", "d"]);

    let general = catalog.filter(Some(Category::General), None);
    assert_eq!(general.len(), 4);

    let finance = catalog.filter(None, Some(Industry::Finance));
    assert_eq!(ids(&finance), vec!["c", "b"]);

    let both = catalog.filter(Some(Category::Marketing), Some(Industry::Retail));
    assert_eq!(ids(&both), vec!["a"]);
}

#[test]
fn query_sorts_deterministically() {
    let catalog = catalog();

    let query = ArenaQuery::default();
    assert_eq!(query.sort, SortField::Stars);
    assert_eq!(query.order, SortOrder::Descending);
    assert_eq!(ids(&catalog.query(&query, Locale::En)), vec!["a", "b", "d", "c"]);

    let query = query.toggled(SortField::Stars);
    assert_eq!(query.order, SortOrder::Ascending);
    assert_eq!(ids(&catalog.query(&query, Locale::En)), vec!["c", "b", "d", "a"]);

    let query = query.toggled(SortField::Quality);
    assert_eq!(query.sort, SortField::Quality);
    assert_eq!(query.order, SortOrder::Descending);
    assert_eq!(ids(&catalog.query(&query, Locale::En)), vec!["c", "b", "a", "d"]);

    let query = ArenaQuery { sort: SortField::Name, order: SortOrder::Ascending, ..query };
    assert_eq!(ids(&catalog.query(&query, Locale::Zh)), vec!["a", "b", "c", "d"]);

    let query = ArenaQuery { sort: SortField::Status, order: SortOrder::Descending, ..query };
    assert_eq!(ids(&catalog.query(&query, Locale::En)), vec!["b", "c", "a", "d"]);
}

#[test]
fn query_filters_before_sorting() {
    let catalog = catalog();
    let query = ArenaQuery::default()
        .with_industry(Some(Industry::Finance))
        .with_category(Some(Category::Service));
    assert_eq!(ids(&catalog.query(&query, Locale::En)), vec!["c"]);
}

#[test]
fn stats() {
    assert_eq!(
        catalog().stats(),
        Stats { total_blueprints: 4, industries: 6, avg_accuracy: 84, verified_count: 2 }
    );
    assert_eq!(Catalog::default().stats().avg_accuracy, 0);
}

#[test]
fn arena_serde() {
    let original = arena("a", Category::RiskControl, Industry::Healthcare, 95, 1);
    let json = serde_json::to_value(&original).unwrap();
    assert_eq!(json["category"], "risk-control");
    assert_eq!(json["status"], "verified");
    assert_eq!(json["title"]["zh"], "标题 a");
    assert!(json.get("image").is_none());

    let received: Arena = serde_json::from_value(json).unwrap();
    assert_eq!(original, received);
}
