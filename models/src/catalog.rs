// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{cmp::Ordering, collections::HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    builtin,
    errors::{ModelsError, ParseSlugError},
    locale::Locale,
    models::{Arena, Category, Industry, MetricKind},
};

/// Field the arena list can be sorted by.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,

    #[serde(rename = "status")]
    Status,

    #[serde(rename = "category")]
    Category,

    #[serde(rename = "industry")]
    Industry,

    #[serde(rename = "quality")]
    Quality,

    #[serde(rename = "efficiency")]
    Efficiency,

    #[serde(rename = "cost")]
    Cost,

    #[serde(rename = "trust")]
    Trust,

    #[default]
    #[serde(rename = "stars")]
    Stars,

    #[serde(rename = "forks")]
    Forks,
}

impl SortField {
    pub const ALL: [SortField; 10] = [
        SortField::Name,
        SortField::Status,
        SortField::Category,
        SortField::Industry,
        SortField::Quality,
        SortField::Efficiency,
        SortField::Cost,
        SortField::Trust,
        SortField::Stars,
        SortField::Forks,
    ];

    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn to_str(self) -> &'static str {
        #[allow(clippy::expect_used)]
        serde_variant::to_variant_name(&self)
            .expect("Converting enum to string should always succeed")
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Name => locale.pick("Name", "名称"),
            Self::Status => locale.pick("Status", "状态"),
            Self::Category => locale.pick("Category", "类别"),
            Self::Industry => locale.pick("Industry", "行业"),
            Self::Quality => MetricKind::Quality.label(locale),
            Self::Efficiency => MetricKind::Efficiency.label(locale),
            Self::Cost => MetricKind::Cost.label(locale),
            Self::Trust => MetricKind::Trust.label(locale),
            Self::Stars => locale.pick("Stars", "星标"),
            Self::Forks => locale.pick("Forks", "分支"),
        }
    }

    /// Compares two arenas by this field in ascending order.
    fn compare(self, a: &Arena, b: &Arena, locale: Locale) -> Ordering {
        match self {
            Self::Name => a.title.get(locale).cmp(b.title.get(locale)),
            Self::Status => a.status.cmp(&b.status),
            Self::Category => a.category.to_str().cmp(b.category.to_str()),
            Self::Industry => a.industry.to_str().cmp(b.industry.to_str()),
            Self::Quality => a.metrics.quality.cmp(&b.metrics.quality),
            Self::Efficiency => a.metrics.efficiency.cmp(&b.metrics.efficiency),
            Self::Cost => a.metrics.cost.cmp(&b.metrics.cost),
            Self::Trust => a.metrics.trust.cmp(&b.metrics.trust),
            Self::Stars => a.github.stars.cmp(&b.github.stars),
            Self::Forks => a.github.forks.cmp(&b.github.forks),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = ParseSlugError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.to_str() == string)
            .ok_or_else(|| ParseSlugError::unknown("sort field", string))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,

    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ParseSlugError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(ParseSlugError::unknown("sort order", string)),
        }
    }
}

/// Filtering and sorting settings of the arena list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ArenaQuery {
    pub industry: Option<Industry>,
    pub category: Option<Category>,
    pub sort: SortField,
    pub order: SortOrder,
}

impl ArenaQuery {
    /// Returns the query after the user clicked on the header of the given field.
    ///
    /// Clicking the current field flips the order, clicking another field sorts by it descending.
    #[must_use]
    pub fn toggled(self, field: SortField) -> Self {
        if self.sort == field {
            Self { order: self.order.reversed(), ..self }
        } else {
            Self { sort: field, order: SortOrder::Descending, ..self }
        }
    }

    #[must_use]
    pub fn with_industry(self, industry: Option<Industry>) -> Self {
        Self { industry, ..self }
    }

    #[must_use]
    pub fn with_category(self, category: Option<Category>) -> Self {
        Self { category, ..self }
    }

    /// `general` arenas match every category; filtering by `general` itself matches everything.
    fn matches_category(category: Option<Category>, arena: &Arena) -> bool {
        match category {
            None | Some(Category::General) => true,
            Some(category) => arena.category == category || arena.category == Category::General,
        }
    }

    fn matches(&self, arena: &Arena) -> bool {
        self.industry.is_none_or(|industry| arena.industry == industry)
            && Self::matches_category(self.category, arena)
    }
}

/// Summary numbers shown on the site.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    #[serde(rename = "totalBlueprints")]
    pub total_blueprints: usize,

    #[serde(rename = "industries")]
    pub industries: usize,

    /// Average quality, rounded half up. Zero for an empty catalog.
    #[serde(rename = "avgAccuracy")]
    pub avg_accuracy: u32,

    #[serde(rename = "verifiedCount")]
    pub verified_count: usize,
}

/// Immutable, in-memory list of arenas.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    arenas: Vec<Arena>,
}

impl Catalog {
    /// Constructs a new `Catalog`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if arena IDs repeat or metrics are out of range.
    pub fn new(arenas: Vec<Arena>) -> Result<Self, ModelsError> {
        let mut ids = HashSet::new();
        for arena in &arenas {
            arena.metrics.validate()?;
            if !ids.insert(arena.id.as_str()) {
                return Err(ModelsError::RepeatedArenaId(arena.id.clone()));
            }
        }
        Ok(Self { arenas })
    }

    /// Constructs the catalog of arenas shipped with the site.
    #[must_use]
    pub fn builtin() -> Self {
        Self { arenas: builtin::arenas() }
    }

    #[must_use]
    pub fn all(&self) -> &[Arena] {
        &self.arenas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arenas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arenas.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arena> {
        self.arenas.iter().find(|arena| arena.id == id)
    }

    /// Returns the first `limit` arenas.
    #[must_use]
    pub fn featured(&self, limit: usize) -> &[Arena] {
        &self.arenas[..limit.min(self.arenas.len())]
    }

    /// Filters by category and industry keeping the catalog order.
    #[must_use]
    pub fn filter(&self, category: Option<Category>, industry: Option<Industry>) -> Vec<&Arena> {
        let query = ArenaQuery { industry, category, ..ArenaQuery::default() };
        self.arenas.iter().filter(|arena| query.matches(arena)).collect()
    }

    /// Filters and sorts the arenas for the arena list page.
    ///
    /// Ties are broken by arena ID so the result does not depend on the catalog order.
    #[must_use]
    pub fn query(&self, query: &ArenaQuery, locale: Locale) -> Vec<&Arena> {
        let mut result: Vec<&Arena> =
            self.arenas.iter().filter(|arena| query.matches(arena)).collect();
        result.sort_by(|a, b| {
            let ordering = query.sort.compare(a, b, locale);
            let ordering = match query.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });
        result
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        let total = self.arenas.len();
        let quality_sum: u32 = self.arenas.iter().map(|a| u32::from(a.metrics.quality)).sum();
        let avg_accuracy = match u32::try_from(total) {
            Ok(0) | Err(_) => 0,
            Ok(count) => (2 * quality_sum + count) / (2 * count),
        };
        Stats {
            total_blueprints: total,
            industries: Industry::ALL.len(),
            avg_accuracy,
            verified_count: self.arenas.iter().filter(|a| a.status.is_verified()).count(),
        }
    }
}
