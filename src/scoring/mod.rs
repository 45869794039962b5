//! Website verdict scoring.
//!
//! Turns per-category analyzer output into a business verdict:
//!
//! - **Score aggregation**: transport penalty, industry multipliers, weighted total
//! - **Opportunity ranking**: revenue normalization, synthetic opportunities,
//!   deduplication, boosting, bounded ranking
//! - **Priority classification**: sales urgency from score and estimated loss
//! - **Plan recommendation**: remediation plan and its ROI projection
//!
//! # Usage
//!
//! ```
//! use site_verdict::config::ScoringConfig;
//! use site_verdict::industry::IndustryRegistry;
//! use site_verdict::model::CategoryResults;
//! use site_verdict::scoring::{PlanTier, ScoreAggregator};
//!
//! let registry = IndustryRegistry::with_builtins();
//! let config = ScoringConfig::default();
//! let results = CategoryResults::from_scores([20.0, 80.0, 80.0, 80.0, 80.0]);
//!
//! let score = ScoreAggregator::new(&registry, &config)
//!     .compute_scores(&results, true, Some("default"))
//!     .unwrap();
//! assert_eq!(score.total, 65);
//! assert_eq!(PlanTier::recommend(score.total), PlanTier::Standard);
//! ```

mod aggregator;
mod opportunities;
mod plan;
mod priority;

pub use aggregator::{CompositeScore, ScoreAggregator};
pub use opportunities::{
    boosted_priority, deduplicate, synthesize_opportunities, OpportunityCalculator,
    OpportunitySummary, MAX_PRIORITY, MIN_PRIORITY,
};
pub use plan::{PlanRecommender, PlanTier, RoiProjection};
pub use priority::PriorityTier;
