//! Score Aggregator.
//!
//! Fuses the five raw category scores and the transport-security flag into
//! a [`CompositeScore`] under the resolved industry profile.

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::error::{Result, VerdictError};
use crate::industry::IndustryRegistry;
use crate::model::{Category, CategoryResults};

/// Composite score; every field lies in 0-100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Weight-normalized average of the adjusted category scores
    pub total: u8,
    pub performance: u8,
    pub mobile: u8,
    pub seo: u8,
    pub conversion: u8,
    pub content: u8,
}

impl CompositeScore {
    #[must_use]
    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Performance => self.performance,
            Category::Mobile => self.mobile,
            Category::Seo => self.seo,
            Category::Conversion => self.conversion,
            Category::Content => self.content,
        }
    }

    /// Composite with the given total and category scores, clamped into 0-100
    #[must_use]
    pub fn from_parts(total: u8, categories: [u8; 5]) -> Self {
        let [performance, mobile, seo, conversion, content] = categories.map(|s| s.min(100));
        Self {
            total: total.min(100),
            performance,
            mobile,
            seo,
            conversion,
            content,
        }
    }
}

/// Round and clamp into the 0-100 score range
fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Computes composite scores
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator<'a> {
    registry: &'a IndustryRegistry,
    config: &'a ScoringConfig,
}

impl<'a> ScoreAggregator<'a> {
    #[must_use]
    pub const fn new(registry: &'a IndustryRegistry, config: &'a ScoringConfig) -> Self {
        Self { registry, config }
    }

    /// Compute the composite score of one page.
    ///
    /// Unknown or absent industry ids resolve to `default`. Fails only when a
    /// category score is NaN or infinite.
    pub fn compute_scores(
        &self,
        results: &CategoryResults,
        is_secure_transport: bool,
        industry_id: Option<&str>,
    ) -> Result<CompositeScore> {
        let profile = self.registry.resolve(industry_id);
        let weights = &self.config.weights;

        let mut adjusted = [0.0_f64; 5];
        for (slot, (category, result)) in adjusted.iter_mut().zip(results.iter()) {
            let raw = result.score;
            if !raw.is_finite() {
                return Err(VerdictError::non_finite(category.keyword(), "score", raw));
            }

            let penalty = self.config.transport_penalty.get(category);
            let penalized = if !is_secure_transport && penalty > 0.0 {
                (raw - penalty).max(0.0)
            } else {
                raw
            };

            *slot = (penalized * profile.weight_multipliers.get(category)).round();
        }

        let weight_sum = weights.sum();
        let weighted: f64 = Category::ALL
            .iter()
            .zip(adjusted)
            .map(|(c, score)| score * weights.get(*c))
            .sum();
        let total = if weight_sum > 0.0 {
            (weighted / weight_sum).round()
        } else {
            0.0
        };

        let composite = CompositeScore {
            total: clamp_score(total),
            performance: clamp_score(adjusted[0]),
            mobile: clamp_score(adjusted[1]),
            seo: clamp_score(adjusted[2]),
            conversion: clamp_score(adjusted[3]),
            content: clamp_score(adjusted[4]),
        };

        tracing::debug!(
            industry = %profile.id,
            secure = is_secure_transport,
            total = composite.total,
            "Computed composite score"
        );

        Ok(composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(scores: [f64; 5], secure: bool, industry: Option<&str>) -> CompositeScore {
        let registry = IndustryRegistry::with_builtins();
        let config = ScoringConfig::default();
        ScoreAggregator::new(&registry, &config)
            .compute_scores(&CategoryResults::from_scores(scores), secure, industry)
            .unwrap()
    }

    #[test]
    fn test_default_industry_weighted_average() {
        let score = compute([20.0, 80.0, 80.0, 80.0, 80.0], true, Some("default"));
        assert_eq!(score.total, 65);
        assert_eq!(score.performance, 20);
        assert_eq!(score.mobile, 80);
    }

    #[test]
    fn test_insecure_penalty_applies_to_performance_and_seo_only() {
        let score = compute([50.0, 50.0, 50.0, 50.0, 50.0], false, None);
        assert_eq!(score.performance, 40);
        assert_eq!(score.seo, 35);
        assert_eq!(score.mobile, 50);
        assert_eq!(score.conversion, 50);
        assert_eq!(score.content, 50);
        // (40*.25 + 50*.2 + 35*.2 + 50*.2 + 50*.15) = 44.5
        assert_eq!(score.total, 45);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let score = compute([5.0, 0.0, 10.0, 0.0, 0.0], false, None);
        assert_eq!(score.performance, 0);
        assert_eq!(score.seo, 0);
    }

    #[test]
    fn test_multiplier_then_clamp() {
        // beauty_salon mobile multiplier is 1.4
        let score = compute([90.0, 90.0, 90.0, 90.0, 90.0], true, Some("beauty_salon"));
        assert_eq!(score.mobile, 100);
        assert_eq!(score.performance, 90);
        // content multiplier 0.9
        assert_eq!(score.content, 81);
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        let score = compute([500.0, -20.0, 100.0, 100.0, 100.0], true, None);
        assert_eq!(score.performance, 100);
        assert_eq!(score.mobile, 0);
        assert!(score.total <= 100);
    }

    #[test]
    fn test_unknown_industry_equals_default() {
        let scores = [33.0, 44.0, 55.0, 66.0, 77.0];
        assert_eq!(
            compute(scores, true, Some("no-such-industry")),
            compute(scores, true, None)
        );
    }

    #[test]
    fn test_non_finite_score_fails_fast() {
        let registry = IndustryRegistry::with_builtins();
        let config = ScoringConfig::default();
        let mut results = CategoryResults::from_scores([50.0; 5]);
        results.conversion.score = f64::NAN;
        let err = ScoreAggregator::new(&registry, &config)
            .compute_scores(&results, true, None)
            .unwrap_err();
        assert!(matches!(err, VerdictError::InvalidInput { ref context, .. } if context == "conversion"));
    }

    #[test]
    fn test_unnormalized_weights_are_normalized() {
        let registry = IndustryRegistry::with_builtins();
        let mut config = ScoringConfig::default();
        config.weights.performance = 2.5;
        config.weights.mobile = 2.0;
        config.weights.seo = 2.0;
        config.weights.conversion = 2.0;
        config.weights.content = 1.5;
        let score = ScoreAggregator::new(&registry, &config)
            .compute_scores(
                &CategoryResults::from_scores([20.0, 80.0, 80.0, 80.0, 80.0]),
                true,
                None,
            )
            .unwrap();
        assert_eq!(score.total, 65);
    }

    #[test]
    fn test_from_parts_clamps() {
        let score = CompositeScore::from_parts(150, [10, 20, 200, 40, 50]);
        assert_eq!(score.total, 100);
        assert_eq!(score.seo, 100);
        assert_eq!(score.get(Category::Mobile), 20);
    }
}
