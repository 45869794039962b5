//! Industry profile definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::Category;

/// Per-category multipliers applied to raw scores before weighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeightMultipliers {
    pub performance: f64,
    pub mobile: f64,
    pub seo: f64,
    pub conversion: f64,
    pub content: f64,
}

impl Default for WeightMultipliers {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl WeightMultipliers {
    /// Same multiplier for every category
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            performance: value,
            mobile: value,
            seo: value,
            conversion: value,
            content: value,
        }
    }

    /// Multipliers in canonical category order
    #[must_use]
    pub const fn new(performance: f64, mobile: f64, seo: f64, conversion: f64, content: f64) -> Self {
        Self {
            performance,
            mobile,
            seo,
            conversion,
            content,
        }
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Performance => self.performance,
            Category::Mobile => self.mobile,
            Category::Seo => self.seo,
            Category::Conversion => self.conversion,
            Category::Content => self.content,
        }
    }
}

/// Scoring policy for one business vertical
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IndustryProfile {
    /// Registry key (normalized to lowercase snake case on registration)
    pub id: String,
    /// Category multipliers
    #[serde(default)]
    pub weight_multipliers: WeightMultipliers,
    /// Domain keywords used for industry detection
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    /// Typical monthly revenue of a business in this vertical
    pub average_monthly_revenue: i64,
}

impl IndustryProfile {
    /// Create a profile
    pub fn new(
        id: impl Into<String>,
        weight_multipliers: WeightMultipliers,
        keywords: &[&str],
        average_monthly_revenue: i64,
    ) -> Self {
        Self {
            id: id.into(),
            weight_multipliers,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            average_monthly_revenue,
        }
    }

    /// Number of this profile's keywords found in already-lowercased text
    #[must_use]
    pub fn keyword_hits(&self, lowercased_text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| !k.is_empty() && lowercased_text.contains(k.as_str()))
            .count()
    }
}

/// Normalize an industry id: trimmed, lowercased, `-` and spaces become `_`
#[must_use]
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
