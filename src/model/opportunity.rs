//! Improvement opportunities and their effort classification.

use serde::{Deserialize, Serialize};

/// Effort required to act on an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Effort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An actionable improvement with an estimated business impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Title; its lowercased form is the deduplication key
    pub title: String,
    pub description: String,
    /// Estimated improvement in percent
    pub estimated_improvement_pct: f64,
    /// Estimated monthly revenue lift in currency units
    pub estimated_revenue_lift: i64,
    pub effort: Effort,
    /// Priority (1 = lowest, 10 = highest)
    pub priority: u8,
}

impl Opportunity {
    /// Create an opportunity
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_improvement_pct: f64,
        estimated_revenue_lift: i64,
        effort: Effort,
        priority: u8,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            estimated_improvement_pct,
            estimated_revenue_lift,
            effort,
            priority,
        }
    }

    /// Deduplication key: case-insensitive exact title
    #[must_use]
    pub fn dedup_key(&self) -> String {
        self.title.to_lowercase()
    }

    /// Low effort with at least 10% improvement
    #[must_use]
    pub fn is_quick_win(&self) -> bool {
        self.effort == Effort::Low && self.estimated_improvement_pct >= 10.0
    }

    /// At least 30,000 revenue lift or at least 25% improvement
    #[must_use]
    pub fn is_high_impact(&self) -> bool {
        self.estimated_revenue_lift >= 30_000 || self.estimated_improvement_pct >= 25.0
    }
}
