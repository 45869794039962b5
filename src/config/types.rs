//! Configuration types for the scoring engine.
//!
//! All tables here are static policy: constructed once at process start,
//! validated, then passed by reference into every scoring component.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::industry::IndustryProfile;
use crate::model::Category;
use crate::scoring::PlanTier;

use super::defaults::DEFAULT_MAX_OPPORTUNITIES;

// ============================================================================
// Top-level configuration
// ============================================================================

/// Complete scoring policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Global category weights for the composite score
    pub weights: GlobalWeights,
    /// Score deductions applied when the page is not served over HTTPS
    pub transport_penalty: TransportPenalty,
    /// Opportunity ranking options
    pub opportunities: OpportunityPolicy,
    /// Remediation plan prices and targets
    pub plans: PlanCatalog,
    /// Additional industry profiles, or overrides of built-ins with the same id
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<IndustryProfile>,
    /// Guess the industry from page text when an analysis carries no id
    pub auto_detect_industry: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: GlobalWeights::default(),
            transport_penalty: TransportPenalty::default(),
            opportunities: OpportunityPolicy::default(),
            plans: PlanCatalog::default(),
            industries: Vec::new(),
            auto_detect_industry: false,
        }
    }
}

impl ScoringConfig {
    /// Create a `ScoringConfig` builder.
    pub fn builder() -> ScoringConfigBuilder {
        ScoringConfigBuilder::default()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing `ScoringConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct ScoringConfigBuilder {
    config: ScoringConfig,
}

impl ScoringConfigBuilder {
    /// Set the global category weights.
    pub const fn weights(mut self, weights: GlobalWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Set the non-HTTPS penalty.
    pub const fn transport_penalty(mut self, penalty: TransportPenalty) -> Self {
        self.config.transport_penalty = penalty;
        self
    }

    /// Set the maximum number of ranked opportunities.
    pub const fn max_opportunities(mut self, max: usize) -> Self {
        self.config.opportunities.max_results = max;
        self
    }

    /// Set the plan catalogue.
    pub fn plans(mut self, plans: PlanCatalog) -> Self {
        self.config.plans = plans;
        self
    }

    /// Add or override an industry profile.
    pub fn industry(mut self, profile: IndustryProfile) -> Self {
        self.config.industries.push(profile);
        self
    }

    /// Enable keyword-based industry detection.
    pub const fn auto_detect_industry(mut self, enabled: bool) -> Self {
        self.config.auto_detect_industry = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ScoringConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Global category weights. They need not sum to 1; the aggregator
/// normalizes by their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GlobalWeights {
    pub performance: f64,
    pub mobile: f64,
    pub seo: f64,
    pub conversion: f64,
    pub content: f64,
}

impl Default for GlobalWeights {
    fn default() -> Self {
        Self {
            performance: 0.25,
            mobile: 0.20,
            seo: 0.20,
            conversion: 0.20,
            content: 0.15,
        }
    }
}

impl GlobalWeights {
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

    /// Sum of all five weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Points subtracted from raw scores when the page is not served over HTTPS.
/// Only performance and SEO are penalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TransportPenalty {
    pub performance: f64,
    pub seo: f64,
}

impl Default for TransportPenalty {
    fn default() -> Self {
        Self {
            performance: 10.0,
            seo: 15.0,
        }
    }
}

impl TransportPenalty {
    /// Penalty for `category`; zero for unpenalized categories
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Performance => self.performance,
            Category::Seo => self.seo,
            Category::Mobile | Category::Conversion | Category::Content => 0.0,
        }
    }
}

/// Opportunity ranking options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OpportunityPolicy {
    /// Length of the ranked list
    #[schemars(range(min = 1))]
    pub max_results: usize,
}

impl Default for OpportunityPolicy {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_OPPORTUNITIES,
        }
    }
}

/// Price and target of one remediation plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlanSpec {
    /// Display name
    pub name: String,
    /// Fixed monthly price
    pub monthly_price: i64,
    /// Composite score the plan is expected to reach
    #[schemars(range(max = 100))]
    pub target_score: u8,
    /// What the plan includes
    #[serde(default)]
    pub features: Vec<String>,
}

impl PlanSpec {
    fn new(name: &str, monthly_price: i64, target_score: u8, features: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            monthly_price,
            target_score,
            features: features.iter().map(ToString::to_string).collect(),
        }
    }
}

/// The three remediation plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PlanCatalog {
    pub simple: PlanSpec,
    pub standard: PlanSpec,
    pub premium: PlanSpec,
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            simple: PlanSpec::new(
                "Simple",
                30_000,
                60,
                &["Basic maintenance", "Monthly health report", "Security updates"],
            ),
            standard: PlanSpec::new(
                "Standard",
                50_000,
                75,
                &[
                    "Everything in Simple",
                    "Performance tuning",
                    "SEO improvements",
                    "Mobile optimization",
                ],
            ),
            premium: PlanSpec::new(
                "Premium",
                100_000,
                90,
                &[
                    "Everything in Standard",
                    "Full redesign",
                    "Conversion optimization",
                    "Content production",
                    "Dedicated consultant",
                ],
            ),
        }
    }
}

impl PlanCatalog {
    /// Spec of `plan`
    #[must_use]
    pub const fn get(&self, plan: PlanTier) -> &PlanSpec {
        match plan {
            PlanTier::Simple => &self.simple,
            PlanTier::Standard => &self.standard,
            PlanTier::Premium => &self.premium,
        }
    }

    /// `(tier, spec)` pairs from cheapest to most comprehensive
    pub fn iter(&self) -> impl Iterator<Item = (PlanTier, &PlanSpec)> {
        PlanTier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}
