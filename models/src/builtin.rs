// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arenas shipped with the site. Only arenas with content in `Content/Arena/{id}/` belong here.

use chrono::NaiveDate;

use crate::{
    locale::Localized,
    models::{Arena, Category, GitHubData, Industry, Metrics, VerificationStatus},
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Returns the built-in arena list.
#[must_use]
pub fn arenas() -> Vec<Arena> {
    vec![Arena {
        id: "intelligent-research-system-v1".to_string(),
        title: Localized::new(
            "Intelligent Research & Report Generation System".to_string(),
            "智能研究与报告生成系统".to_string(),
        ),
        description: Localized::new(
            "Achieved #2 global ranking in DeepResearch benchmarks with 51.86 score. \
             95% labor reduction and ≤15 minute report generation."
                .to_string(),
            "在DeepResearch基准测试中获得全球第2名，分数51.86。95%工作减少，报告生成≤15分钟。"
                .to_string(),
        ),
        category: Category::Service,
        industry: Industry::Finance,
        status: VerificationStatus::Verified,
        metrics: Metrics { quality: 95, efficiency: 94, cost: 88, trust: 93 },
        github: GitHubData {
            stars: 1284,
            forks: 234,
            url: "https://github.com/rwai-arena/intelligent-research-system-v1".to_string(),
        },
        highlights: vec![
            "DeepResearch score: 51.86 (#2 globally)".to_string(),
            "95% labor reduction".to_string(),
            "≤15 minute generation time".to_string(),
        ],
        image: None,
        created_at: date(2024, 10, 1),
        updated_at: date(2024, 11, 22),
    }]
}
