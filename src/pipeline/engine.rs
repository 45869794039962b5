//! Verdict engine.
//!
//! Runs one page analysis through aggregation, opportunity ranking, priority
//! classification and plan recommendation, in that order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{PlanSpec, ScoringConfig, Validatable};
use crate::error::{ErrorContext, Result, VerdictError};
use crate::industry::IndustryRegistry;
use crate::model::{Issue, IssueCounts, Opportunity, PageAnalysis};
use crate::scoring::{
    CompositeScore, OpportunityCalculator, OpportunitySummary, PlanRecommender, PlanTier,
    PriorityTier, RoiProjection, ScoreAggregator,
};

/// Version of the scoring rules, recorded in every verdict
pub const ENGINE_VERSION: &str = "1.0";

/// Business verdict for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub url: String,
    /// Resolved industry id
    pub industry: String,
    pub composite: CompositeScore,
    /// Ranked, deduplicated, bounded
    pub opportunities: Vec<Opportunity>,
    pub summary: OpportunitySummary,
    /// Sum of the ranked opportunities' revenue lifts
    pub estimated_monthly_loss: i64,
    pub priority: PriorityTier,
    pub plan: PlanTier,
    pub plan_details: PlanSpec,
    pub roi: RoiProjection,
    pub issues: Vec<Issue>,
    pub issue_counts: IssueCounts,
    pub engine_version: String,
}

/// Owns the scoring policy and the industry registry built from it
#[derive(Debug, Clone)]
pub struct VerdictEngine {
    config: ScoringConfig,
    registry: IndustryRegistry,
}

impl VerdictEngine {
    /// Validate `config` and build the registry with its industry overrides.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        let errors = config.validate();
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(VerdictError::config(joined));
        }

        let registry = IndustryRegistry::with_overrides(&config.industries);
        tracing::debug!("Verdict engine ready with {} industry profiles", registry.len());

        Ok(Self { config, registry })
    }

    /// Engine with the default policy and built-in industries
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: ScoringConfig::default(),
            registry: IndustryRegistry::with_builtins(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &IndustryRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn aggregator(&self) -> ScoreAggregator<'_> {
        ScoreAggregator::new(&self.registry, &self.config)
    }

    #[must_use]
    pub const fn calculator(&self) -> OpportunityCalculator<'_> {
        OpportunityCalculator::new(&self.registry, &self.config)
    }

    #[must_use]
    pub const fn recommender(&self) -> PlanRecommender<'_> {
        PlanRecommender::new(&self.registry, &self.config.plans)
    }

    /// Industry id used for `analysis`: the explicit id, else a keyword
    /// match when auto-detection is on, else `default`.
    #[must_use]
    pub fn industry_for(&self, analysis: &PageAnalysis) -> String {
        if let Some(id) = analysis.industry.as_deref() {
            return self.registry.resolve(Some(id)).id.clone();
        }
        if self.config.auto_detect_industry {
            if let Some(profile) = analysis
                .page_text
                .as_deref()
                .and_then(|text| self.registry.detect(text))
            {
                tracing::debug!("Detected industry '{}' for {}", profile.id, analysis.url);
                return profile.id.clone();
            }
        }
        self.registry.default_profile().id.clone()
    }

    /// Evaluate one page
    pub fn evaluate(&self, analysis: &PageAnalysis) -> Result<Verdict> {
        self.evaluate_inner(analysis)
            .with_context(|| format!("page {}", analysis.url))
    }

    fn evaluate_inner(&self, analysis: &PageAnalysis) -> Result<Verdict> {
        let industry = self.industry_for(analysis);
        let industry_id = Some(industry.as_str());

        let composite = self.aggregator().compute_scores(
            &analysis.categories,
            analysis.is_secure(),
            industry_id,
        )?;

        let opportunities = self.calculator().rank_opportunities(
            &composite,
            analysis.categories.opportunity_lists(),
            industry_id,
        )?;
        let summary = OpportunitySummary::from_opportunities(&opportunities);
        let estimated_monthly_loss = summary.total_revenue_lift;

        let priority = PriorityTier::classify(composite.total, estimated_monthly_loss);

        let recommender = self.recommender();
        let plan = recommender.recommend_plan(composite.total);
        let roi = recommender.estimate_roi(
            composite.total,
            plan,
            industry_id,
            analysis.current_monthly_revenue,
        )?;

        let issues: Vec<Issue> = analysis.issues().cloned().collect();
        let issue_counts = IssueCounts::from_issues(&issues);

        tracing::debug!(
            url = %analysis.url,
            total = composite.total,
            priority = %priority,
            plan = %plan,
            "Evaluated page"
        );

        Ok(Verdict {
            url: analysis.url.clone(),
            industry,
            composite,
            opportunities,
            summary,
            estimated_monthly_loss,
            priority,
            plan,
            plan_details: recommender.details(plan).clone(),
            roi,
            issues,
            issue_counts,
            engine_version: ENGINE_VERSION.to_string(),
        })
    }

    /// Evaluate independent pages in parallel; results keep input order
    pub fn evaluate_batch(&self, analyses: &[PageAnalysis]) -> Vec<Result<Verdict>> {
        tracing::info!("Evaluating {} pages", analyses.len());
        analyses.par_iter().map(|a| self.evaluate(a)).collect()
    }
}

impl Default for VerdictEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
