//! Opportunity Calculator.
//!
//! Turns the analyzers' raw opportunity lists into one ranked, deduplicated,
//! bounded list:
//!
//! 1. rescale revenue estimates to the industry's revenue baseline
//! 2. synthesize cross-category opportunities from score thresholds
//! 3. merge, then deduplicate by case-insensitive title
//! 4. boost priorities, sort, truncate

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::error::{Result, VerdictError};
use crate::industry::{IndustryProfile, IndustryRegistry};
use crate::model::{Category, Effort, Opportunity};

use super::CompositeScore;

/// Highest opportunity priority
pub const MAX_PRIORITY: u8 = 10;

/// Lowest opportunity priority
pub const MIN_PRIORITY: u8 = 1;

/// Categories whose weak scores boost opportunities mentioning them
const BOOSTED_CATEGORIES: [Category; 4] = [
    Category::Performance,
    Category::Mobile,
    Category::Seo,
    Category::Conversion,
];

/// Category score below which mentioning opportunities are boosted
const WEAK_CATEGORY_SCORE: u8 = 50;

/// Absolute revenue lift above which an opportunity is boosted.
/// Not scaled by industry, unlike the revenue normalization step.
const REVENUE_BOOST_THRESHOLD: i64 = 50_000;

/// Threshold rule that adds an opportunity straight from the composite score
struct SyntheticRule {
    fires: fn(&CompositeScore) -> bool,
    title: &'static str,
    description: &'static str,
    improvement_pct: f64,
    /// Share of the industry's average monthly revenue
    revenue_share: f64,
    effort: Effort,
    priority: u8,
}

fn fails_overall(s: &CompositeScore) -> bool {
    s.total < 30
}

fn slow_and_not_mobile_ready(s: &CompositeScore) -> bool {
    s.performance < 50 && s.mobile < 50
}

fn invisible_and_thin(s: &CompositeScore) -> bool {
    s.seo < 50 && s.content < 50
}

fn rarely_converts(s: &CompositeScore) -> bool {
    s.conversion < 40
}

const SYNTHETIC_RULES: [SyntheticRule; 4] = [
    SyntheticRule {
        fires: fails_overall,
        title: "Full Site Renewal",
        description: "The site falls short across the board; rebuilding it recovers more than piecemeal fixes",
        improvement_pct: 60.0,
        revenue_share: 0.10,
        effort: Effort::High,
        priority: 10,
    },
    SyntheticRule {
        fires: slow_and_not_mobile_ready,
        title: "Mobile-First Redesign",
        description: "Slow pages and a poor phone experience; redesign around mobile visitors first",
        improvement_pct: 40.0,
        revenue_share: 0.08,
        effort: Effort::High,
        priority: 9,
    },
    SyntheticRule {
        fires: invisible_and_thin,
        title: "Content Marketing Program",
        description: "Thin content and weak search visibility; publish regular, search-targeted content",
        improvement_pct: 35.0,
        revenue_share: 0.06,
        effort: Effort::Medium,
        priority: 8,
    },
    SyntheticRule {
        fires: rarely_converts,
        title: "Conversion Optimization Program",
        description: "Visitors rarely turn into customers; rework calls to action, forms and trust signals",
        improvement_pct: 30.0,
        revenue_share: 0.12,
        effort: Effort::Medium,
        priority: 9,
    },
];

/// Opportunities generated from composite-score thresholds alone.
///
/// Rules are independent; several may fire for the same page.
#[must_use]
pub fn synthesize_opportunities(score: &CompositeScore, profile: &IndustryProfile) -> Vec<Opportunity> {
    SYNTHETIC_RULES
        .iter()
        .filter(|rule| (rule.fires)(score))
        .map(|rule| {
            tracing::debug!("Synthetic opportunity fired: {}", rule.title);
            Opportunity::new(
                rule.title,
                rule.description,
                rule.improvement_pct,
                (profile.average_monthly_revenue as f64 * rule.revenue_share).round() as i64,
                rule.effort,
                rule.priority,
            )
        })
        .collect()
}

/// Keep one opportunity per case-insensitive title.
///
/// A later duplicate replaces the kept one only with a strictly higher
/// priority; equal priorities keep the first seen. Survivors keep the
/// position of their key's first occurrence.
#[must_use]
pub fn deduplicate(opportunities: impl IntoIterator<Item = Opportunity>) -> Vec<Opportunity> {
    let mut best: IndexMap<String, Opportunity> = IndexMap::new();
    for opportunity in opportunities {
        match best.entry(opportunity.dedup_key()) {
            Entry::Occupied(mut kept) => {
                if opportunity.priority > kept.get().priority {
                    tracing::debug!(
                        "Duplicate '{}': priority {} replaces {}",
                        opportunity.title,
                        opportunity.priority,
                        kept.get().priority
                    );
                    kept.insert(opportunity);
                } else {
                    tracing::debug!("Duplicate '{}' dropped", opportunity.title);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(opportunity);
            }
        }
    }
    best.into_values().collect()
}

/// Base priority plus score-driven boosts, capped at [`MAX_PRIORITY`]
#[must_use]
pub fn boosted_priority(opportunity: &Opportunity, score: &CompositeScore) -> u8 {
    let mut boost: u8 = 0;

    for category in BOOSTED_CATEGORIES {
        if category.mentioned_in(&opportunity.title) && score.get(category) < WEAK_CATEGORY_SCORE {
            boost += 2;
        }
    }

    if opportunity.effort == Effort::Low && opportunity.estimated_improvement_pct > 20.0 {
        boost += 3;
    }

    if opportunity.estimated_revenue_lift > REVENUE_BOOST_THRESHOLD {
        boost += 2;
    }

    opportunity.priority.saturating_add(boost).min(MAX_PRIORITY)
}

/// Ranks opportunities for one page
#[derive(Debug, Clone, Copy)]
pub struct OpportunityCalculator<'a> {
    registry: &'a IndustryRegistry,
    config: &'a ScoringConfig,
}

impl<'a> OpportunityCalculator<'a> {
    #[must_use]
    pub const fn new(registry: &'a IndustryRegistry, config: &'a ScoringConfig) -> Self {
        Self { registry, config }
    }

    /// Rank the analyzers' opportunities plus synthetic ones.
    ///
    /// `per_category` holds one list per category in canonical order. The
    /// result holds at most `opportunities.max_results` entries sorted by
    /// priority, then revenue lift, both descending.
    pub fn rank_opportunities(
        &self,
        score: &CompositeScore,
        per_category: [&[Opportunity]; 5],
        industry_id: Option<&str>,
    ) -> Result<Vec<Opportunity>> {
        let profile = self.registry.resolve(industry_id);
        let scale = self.registry.revenue_scale(profile);

        let mut merged = Vec::with_capacity(per_category.iter().map(|l| l.len()).sum::<usize>() + 4);
        for (category, list) in Category::ALL.iter().zip(per_category) {
            for raw in list {
                if !raw.estimated_improvement_pct.is_finite() {
                    return Err(VerdictError::non_finite(
                        format!("{} opportunity '{}'", category.keyword(), raw.title),
                        "estimated_improvement_pct",
                        raw.estimated_improvement_pct,
                    ));
                }
                let mut normalized = raw.clone();
                normalized.estimated_revenue_lift =
                    (raw.estimated_revenue_lift as f64 * scale).round() as i64;
                normalized.priority = raw.priority.clamp(MIN_PRIORITY, MAX_PRIORITY);
                merged.push(normalized);
            }
        }
        merged.extend(synthesize_opportunities(score, profile));

        let mut ranked = deduplicate(merged);
        for opportunity in &mut ranked {
            opportunity.priority = boosted_priority(opportunity, score);
        }

        // Stable sort: full ties keep merge order
        ranked.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| b.estimated_revenue_lift.cmp(&a.estimated_revenue_lift))
        });
        ranked.truncate(self.config.opportunities.max_results);

        tracing::debug!(
            industry = %profile.id,
            count = ranked.len(),
            "Ranked opportunities"
        );

        Ok(ranked)
    }
}

/// Aggregate view over an opportunity list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpportunitySummary {
    /// Sum of revenue lifts, saturating at the `i64` bounds
    pub total_revenue_lift: i64,
    /// Sum of improvement percentages
    pub total_improvement_pct: f64,
    /// Low effort, at least 10% improvement
    pub quick_wins: Vec<Opportunity>,
    /// At least 30,000 lift or at least 25% improvement
    pub high_impact: Vec<Opportunity>,
}

impl OpportunitySummary {
    /// Summarize any opportunity list
    #[must_use]
    pub fn from_opportunities(opportunities: &[Opportunity]) -> Self {
        Self {
            total_revenue_lift: opportunities
                .iter()
                .map(|o| o.estimated_revenue_lift)
                .fold(0i64, i64::saturating_add),
            total_improvement_pct: opportunities.iter().map(|o| o.estimated_improvement_pct).sum(),
            quick_wins: opportunities.iter().filter(|o| o.is_quick_win()).cloned().collect(),
            high_impact: opportunities.iter().filter(|o| o.is_high_impact()).cloned().collect(),
        }
    }
}
