//! **Industry-aware website verdicts.**
//!
//! `site-verdict` turns per-category quality signals collected from a web page
//! (performance, mobile-friendliness, SEO, conversion-readiness, content) into a
//! business-facing verdict: a composite 0-100 score, a ranked list of
//! improvement opportunities with estimated revenue impact, a sales-priority
//! tier and a recommended remediation plan with its ROI.
//!
//! Crawling, browser automation and report rendering live elsewhere; this crate
//! starts from already-collected [`PageAnalysis`] records.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the analyzer output the core consumes, [`PageAnalysis`] and its
//!   per-category [`CategoryResults`].
//! - **[`industry`]**: the [`IndustryRegistry`] of weight multipliers, keywords and
//!   revenue baselines per industry.
//! - **[`scoring`]**: the four scoring components: [`ScoreAggregator`],
//!   [`OpportunityCalculator`], [`PriorityTier::classify`] and [`PlanRecommender`].
//! - **[`config`]**: the static scoring policy, [`ScoringConfig`], with presets,
//!   validation and YAML file discovery.
//! - **[`pipeline`]**: the [`VerdictEngine`] running all components over one page
//!   or a batch, plus input loading and output writing.
//!
//! ## Getting Started
//!
//! ```
//! use site_verdict::model::{CategoryResults, PageAnalysis};
//! use site_verdict::scoring::{PlanTier, PriorityTier};
//! use site_verdict::VerdictEngine;
//!
//! let analysis = PageAnalysis::new(
//!     "https://bistro.example",
//!     CategoryResults::from_scores([20.0, 80.0, 80.0, 80.0, 80.0]),
//! )
//! .with_industry("default");
//!
//! let verdict = VerdictEngine::with_defaults().evaluate(&analysis).unwrap();
//! assert_eq!(verdict.composite.total, 65);
//! assert_eq!(verdict.priority, PriorityTier::Low);
//! assert_eq!(verdict.plan, PlanTier::Standard);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `site-verdict` binary wraps the [`pipeline`] for analysis files on disk;
//! see `site-verdict --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores and currency amounts are bounded; rounding casts are intended
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod industry;
pub mod model;
pub mod pipeline;
pub mod scoring;

// Re-export main types for convenience
pub use config::{ConfigError, ScoringConfig, ScoringPreset, Validatable};
pub use error::{ErrorContext, OptionContext, Result, VerdictError};
pub use industry::{IndustryProfile, IndustryRegistry};
pub use model::{CategoryResults, Opportunity, PageAnalysis};
pub use pipeline::{Verdict, VerdictEngine};
pub use scoring::{
    CompositeScore, OpportunityCalculator, PlanRecommender, PlanTier, PriorityTier, RoiProjection,
    ScoreAggregator,
};
