// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! This modules contains definitions of the arenas showcased on the site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ModelsError, ParseSlugError},
    locale::{Locale, Localized},
};

/// Implements `to_str`, `FromStr` and `Display` for slug-like enums.
macro_rules! slug_enum {
    ($name:ident, $kind:literal) => {
        impl $name {
            #[must_use]
            #[allow(clippy::missing_panics_doc)]
            pub fn to_str(self) -> &'static str {
                #[allow(clippy::expect_used)]
                serde_variant::to_variant_name(&self)
                    .expect("Converting enum to string should always succeed")
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseSlugError;

            fn from_str(string: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|variant| variant.to_str() == string)
                    .ok_or_else(|| ParseSlugError::unknown($kind, string))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.to_str())
            }
        }
    };
}

/// Application category of an arena.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    #[serde(rename = "service")]
    Service,

    #[serde(rename = "management")]
    Management,

    #[serde(rename = "marketing")]
    Marketing,

    #[serde(rename = "risk-control")]
    RiskControl,

    #[serde(rename = "operations")]
    Operations,

    /// Applicable to every category.
    #[serde(rename = "general")]
    General,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Service,
        Category::Management,
        Category::Marketing,
        Category::RiskControl,
        Category::Operations,
        Category::General,
    ];

    #[must_use]
    pub fn labels(self) -> Localized<&'static str> {
        match self {
            Self::Service => Localized::new("Service", "服务"),
            Self::Management => Localized::new("Management", "管理"),
            Self::Marketing => Localized::new("Marketing", "营销"),
            Self::RiskControl => Localized::new("Risk Control", "风控"),
            Self::Operations => Localized::new("Operations", "运营"),
            Self::General => Localized::new("General", "通用"),
        }
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        *self.labels().get(locale)
    }
}

slug_enum!(Category, "category");

/// Industry an arena is targeting.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Industry {
    #[serde(rename = "finance")]
    Finance,

    #[serde(rename = "retail")]
    Retail,

    #[serde(rename = "education")]
    Education,

    #[serde(rename = "healthcare")]
    Healthcare,

    #[serde(rename = "energy")]
    Energy,

    #[serde(rename = "manufacturing")]
    Manufacturing,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Finance,
        Industry::Retail,
        Industry::Education,
        Industry::Healthcare,
        Industry::Energy,
        Industry::Manufacturing,
    ];

    #[must_use]
    pub fn labels(self) -> Localized<&'static str> {
        match self {
            Self::Finance => Localized::new("Finance", "金融"),
            Self::Retail => Localized::new("Retail", "零售"),
            Self::Education => Localized::new("Education", "教育"),
            Self::Healthcare => Localized::new("Healthcare", "医疗"),
            Self::Energy => Localized::new("Energy", "能源"),
            Self::Manufacturing => Localized::new("Manufacturing", "制造"),
        }
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        *self.labels().get(locale)
    }

    /// Name of the icon representing the industry.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Finance => "building-2",
            Self::Retail => "shopping-cart",
            Self::Education => "graduation-cap",
            Self::Healthcare => "heart-pulse",
            Self::Energy => "zap",
            Self::Manufacturing => "factory",
        }
    }
}

slug_enum!(Industry, "industry");

/// Verification status of an arena.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum VerificationStatus {
    /// Still competing in the arena.
    #[serde(rename = "in-arena")]
    InArena,

    /// Verified best practice.
    #[serde(rename = "verified")]
    Verified,
}

impl VerificationStatus {
    pub const ALL: [VerificationStatus; 2] =
        [VerificationStatus::InArena, VerificationStatus::Verified];

    #[must_use]
    pub fn labels(self) -> Localized<&'static str> {
        match self {
            Self::InArena => Localized::new("In Arena", "竞技中"),
            Self::Verified => Localized::new("Verified", "已验证"),
        }
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        *self.labels().get(locale)
    }

    #[must_use]
    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

slug_enum!(VerificationStatus, "verification status");

/// One of the four evaluation dimensions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MetricKind {
    #[serde(rename = "quality")]
    Quality,

    #[serde(rename = "efficiency")]
    Efficiency,

    #[serde(rename = "cost")]
    Cost,

    #[serde(rename = "trust")]
    Trust,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] =
        [MetricKind::Quality, MetricKind::Efficiency, MetricKind::Cost, MetricKind::Trust];

    #[must_use]
    pub fn labels(self) -> Localized<&'static str> {
        match self {
            Self::Quality => Localized::new("Quality", "质量"),
            Self::Efficiency => Localized::new("Efficiency", "效率"),
            Self::Cost => Localized::new("Cost", "成本"),
            Self::Trust => Localized::new("Trust", "信任"),
        }
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        *self.labels().get(locale)
    }
}

slug_enum!(MetricKind, "metric");

/// Four-dimensional evaluation of an arena. Every value is in range 0-100.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Metrics {
    #[serde(rename = "quality")]
    pub quality: u8,

    #[serde(rename = "efficiency")]
    pub efficiency: u8,

    #[serde(rename = "cost")]
    pub cost: u8,

    #[serde(rename = "trust")]
    pub trust: u8,
}

impl Metrics {
    pub const MAX: u8 = 100;

    #[must_use]
    pub fn get(&self, kind: MetricKind) -> u8 {
        match kind {
            MetricKind::Quality => self.quality,
            MetricKind::Efficiency => self.efficiency,
            MetricKind::Cost => self.cost,
            MetricKind::Trust => self.trust,
        }
    }

    /// Checks that all the values are in the allowed range.
    ///
    /// # Errors
    ///
    /// Returns `Err` naming the first metric exceeding the range.
    pub fn validate(&self) -> Result<(), ModelsError> {
        for kind in MetricKind::ALL {
            let value = self.get(kind);
            if value > Self::MAX {
                return Err(ModelsError::MetricOutOfRange { metric: kind.to_str(), value });
            }
        }
        Ok(())
    }
}

/// Statistics of the arena's GitHub repository.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct GitHubData {
    #[serde(rename = "stars")]
    pub stars: u32,

    #[serde(rename = "forks")]
    pub forks: u32,

    #[serde(rename = "url")]
    pub url: String,
}

/// A showcased AI solution together with its comparative metrics.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Arena {
    /// Unique ID, also the name of the arena's content directory.
    #[serde(rename = "id")]
    pub id: String,

    #[serde(rename = "title")]
    pub title: Localized<String>,

    #[serde(rename = "description")]
    pub description: Localized<String>,

    #[serde(rename = "category")]
    pub category: Category,

    #[serde(rename = "industry")]
    pub industry: Industry,

    #[serde(rename = "status")]
    pub status: VerificationStatus,

    #[serde(rename = "metrics")]
    pub metrics: Metrics,

    #[serde(rename = "github")]
    pub github: GitHubData,

    #[serde(rename = "highlights")]
    pub highlights: Vec<String>,

    #[serde(rename = "image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,

    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
}

/// Kinds of content pages shown as tabs on the arena detail page.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ArenaPage {
    #[serde(rename = "overview")]
    Overview,

    #[serde(rename = "implementation")]
    Implementation,

    #[serde(rename = "requirements")]
    Requirements,

    #[serde(rename = "validation-report")]
    ValidationReport,

    #[serde(rename = "project-report")]
    ProjectReport,
}

impl ArenaPage {
    pub const ALL: [ArenaPage; 5] = [
        ArenaPage::Overview,
        ArenaPage::Implementation,
        ArenaPage::Requirements,
        ArenaPage::ValidationReport,
        ArenaPage::ProjectReport,
    ];

    #[must_use]
    pub fn labels(self) -> Localized<&'static str> {
        match self {
            Self::Overview => Localized::new("Overview", "概览"),
            Self::Implementation => Localized::new("Implementation", "实施指南"),
            Self::Requirements => Localized::new("Requirements", "需求文档"),
            Self::ValidationReport => Localized::new("Validation Report", "验证报告"),
            Self::ProjectReport => Localized::new("Project Report", "项目报告"),
        }
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        *self.labels().get(locale)
    }
}

slug_enum!(ArenaPage, "arena page");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs() {
        assert_eq!(Category::RiskControl.to_str(), "risk-control");
        assert_eq!("risk-control".parse::<Category>(), Ok(Category::RiskControl));
        assert_eq!("healthcare".parse::<Industry>(), Ok(Industry::Healthcare));
        assert_eq!("in-arena".parse::<VerificationStatus>(), Ok(VerificationStatus::InArena));
        assert_eq!(ArenaPage::ValidationReport.to_string(), "validation-report");
        assert!("mining".parse::<Industry>().is_err());
    }

    #[test]
    fn test_metrics_validate() {
        let metrics = Metrics { quality: 95, efficiency: 94, cost: 88, trust: 93 };
        assert_eq!(metrics.validate(), Ok(()));

        let metrics = Metrics { cost: 101, ..metrics };
        assert_eq!(
            metrics.validate(),
            Err(ModelsError::MetricOutOfRange { metric: "cost", value: 101 })
        );
    }
}
