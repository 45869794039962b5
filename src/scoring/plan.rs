//! Plan Recommender.
//!
//! Maps the composite total to a remediation plan and projects the return on
//! that plan from the revenue base and the score gap it is expected to close.

use serde::{Deserialize, Serialize};

use crate::config::{PlanCatalog, PlanSpec};
use crate::error::{InputErrorKind, Result, VerdictError};
use crate::industry::IndustryRegistry;

/// Monthly revenue gained per point of score improvement, as a fraction
const RETURN_PER_POINT: f64 = 0.005;

/// Months in the long-term ROI horizon
const ROI_HORIZON_MONTHS: f64 = 36.0;

/// Recommended remediation package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Simple,
    Standard,
    Premium,
}

impl PlanTier {
    /// All tiers, cheapest first
    pub const ALL: [Self; 3] = [Self::Simple, Self::Standard, Self::Premium];

    /// Recommend a plan: below 40 Premium, 40-69 Standard, 70 and up Simple
    #[must_use]
    pub const fn recommend(total_score: u8) -> Self {
        if total_score < 40 {
            Self::Premium
        } else if total_score < 70 {
            Self::Standard
        } else {
            Self::Simple
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(format!(
                "Unknown plan: {s}. Valid options: simple, standard, premium"
            )),
        }
    }
}

/// Return-on-investment projection for one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub plan: PlanTier,
    /// Plan price per month
    pub monthly_investment: i64,
    /// Projected extra revenue per month, rounded to the currency unit
    pub estimated_monthly_return: i64,
    /// Months until the plan pays for itself; 0 for free plans
    pub payback_period_months: u32,
    /// Three-year ROI in percent; 0 for free plans
    pub three_year_roi: i64,
}

/// Recommends plans and projects their ROI
#[derive(Debug, Clone, Copy)]
pub struct PlanRecommender<'a> {
    registry: &'a IndustryRegistry,
    plans: &'a PlanCatalog,
}

impl<'a> PlanRecommender<'a> {
    #[must_use]
    pub const fn new(registry: &'a IndustryRegistry, plans: &'a PlanCatalog) -> Self {
        Self { registry, plans }
    }

    /// See [`PlanTier::recommend`]
    #[must_use]
    pub const fn recommend_plan(&self, total_score: u8) -> PlanTier {
        PlanTier::recommend(total_score)
    }

    /// Price, target and features of `plan`
    #[must_use]
    pub const fn details(&self, plan: PlanTier) -> &PlanSpec {
        self.plans.get(plan)
    }

    /// Project the return of `plan` for a page currently scoring `current_score`.
    ///
    /// The revenue base is `current_monthly_revenue` when given, otherwise the
    /// resolved industry's average monthly revenue. Fails when the supplied
    /// revenue is negative.
    pub fn estimate_roi(
        &self,
        current_score: u8,
        plan: PlanTier,
        industry_id: Option<&str>,
        current_monthly_revenue: Option<i64>,
    ) -> Result<RoiProjection> {
        let spec = self.plans.get(plan);

        let revenue_base = match current_monthly_revenue {
            Some(revenue) if revenue < 0 => {
                return Err(VerdictError::invalid_input(
                    "ROI projection",
                    InputErrorKind::Negative {
                        field: "current_monthly_revenue".to_string(),
                        value: revenue as f64,
                    },
                ));
            }
            Some(revenue) => revenue,
            None => self.registry.resolve(industry_id).average_monthly_revenue,
        };

        let improvement_potential = spec.target_score.saturating_sub(current_score);
        let monthly_return =
            revenue_base as f64 * f64::from(improvement_potential) * RETURN_PER_POINT;
        let investment = spec.monthly_price as f64;

        let (payback_period_months, three_year_roi) = if spec.monthly_price > 0 {
            let payback = (investment / (monthly_return - investment).max(1.0)).ceil();
            let roi = ((monthly_return * ROI_HORIZON_MONTHS - investment * ROI_HORIZON_MONTHS)
                / (investment * ROI_HORIZON_MONTHS)
                * 100.0)
                .round();
            (payback as u32, roi as i64)
        } else {
            (0, 0)
        };

        Ok(RoiProjection {
            plan,
            monthly_investment: spec.monthly_price,
            estimated_monthly_return: monthly_return.round() as i64,
            payback_period_months,
            three_year_roi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommender_parts() -> (IndustryRegistry, PlanCatalog) {
        (IndustryRegistry::with_builtins(), PlanCatalog::default())
    }

    #[test]
    fn test_plan_boundaries() {
        assert_eq!(PlanTier::recommend(39), PlanTier::Premium);
        assert_eq!(PlanTier::recommend(40), PlanTier::Standard);
        assert_eq!(PlanTier::recommend(69), PlanTier::Standard);
        assert_eq!(PlanTier::recommend(70), PlanTier::Simple);
        assert_eq!(PlanTier::recommend(0), PlanTier::Premium);
        assert_eq!(PlanTier::recommend(100), PlanTier::Simple);
    }

    #[test]
    fn test_roi_standard_default_industry() {
        let (registry, plans) = recommender_parts();
        let roi = PlanRecommender::new(&registry, &plans)
            .estimate_roi(65, PlanTier::Standard, None, None)
            .unwrap();
        // 2,500,000 * (75 - 65) * 0.005
        assert_eq!(roi.estimated_monthly_return, 125_000);
        assert_eq!(roi.monthly_investment, 50_000);
        assert_eq!(roi.payback_period_months, 1);
        assert_eq!(roi.three_year_roi, 150);
    }

    #[test]
    fn test_roi_uses_explicit_revenue() {
        let (registry, plans) = recommender_parts();
        let roi = PlanRecommender::new(&registry, &plans)
            .estimate_roi(30, PlanTier::Premium, Some("retail"), Some(1_000_000))
            .unwrap();
        // 1,000,000 * 60 * 0.005 = 300,000
        assert_eq!(roi.estimated_monthly_return, 300_000);
        assert_eq!(roi.payback_period_months, 1);
        assert_eq!(roi.three_year_roi, 200);
    }

    #[test]
    fn test_roi_industry_baseline() {
        let (registry, plans) = recommender_parts();
        let roi = PlanRecommender::new(&registry, &plans)
            .estimate_roi(50, PlanTier::Simple, Some("beauty_salon"), None)
            .unwrap();
        // 1,500,000 * 10 * 0.005 = 75,000
        assert_eq!(roi.estimated_monthly_return, 75_000);
        // ceil(30,000 / 45,000)
        assert_eq!(roi.payback_period_months, 1);
        assert_eq!(roi.three_year_roi, 150);
    }

    #[test]
    fn test_roi_no_improvement_potential() {
        let (registry, plans) = recommender_parts();
        let roi = PlanRecommender::new(&registry, &plans)
            .estimate_roi(80, PlanTier::Simple, None, None)
            .unwrap();
        assert_eq!(roi.estimated_monthly_return, 0);
        // return minus investment is negative, so the divisor floors at 1
        assert_eq!(roi.payback_period_months, 30_000);
        assert_eq!(roi.three_year_roi, -100);
    }

    #[test]
    fn test_roi_free_plan() {
        let registry = IndustryRegistry::with_builtins();
        let mut plans = PlanCatalog::default();
        plans.simple.monthly_price = 0;
        let roi = PlanRecommender::new(&registry, &plans)
            .estimate_roi(10, PlanTier::Simple, None, None)
            .unwrap();
        assert_eq!(roi.payback_period_months, 0);
        assert_eq!(roi.three_year_roi, 0);
        assert_eq!(roi.monthly_investment, 0);
    }

    #[test]
    fn test_roi_rejects_negative_revenue() {
        let (registry, plans) = recommender_parts();
        let result = PlanRecommender::new(&registry, &plans).estimate_roi(
            50,
            PlanTier::Standard,
            None,
            Some(-5),
        );
        assert!(matches!(result, Err(VerdictError::InvalidInput { .. })));
    }

    #[test]
    fn test_plan_tier_from_str() {
        assert_eq!("Premium".parse::<PlanTier>(), Ok(PlanTier::Premium));
        assert!("gold".parse::<PlanTier>().is_err());
    }
}
