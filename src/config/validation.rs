//! Configuration validation.
//!
//! The scoring components assume a validated configuration: positive weight
//! sum, positive revenue baselines, finite multipliers.

use crate::industry::IndustryProfile;
use crate::model::Category;

use super::types::{
    GlobalWeights, OpportunityPolicy, PlanCatalog, ScoringConfig, TransportPenalty,
};

// ============================================================================
// Configuration Error
// ============================================================================

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.weights.validate());
        errors.extend(self.transport_penalty.validate());
        errors.extend(self.opportunities.validate());
        errors.extend(self.plans.validate());
        for profile in &self.industries {
            errors.extend(profile.validate());
        }
        errors
    }
}

fn check_weight(errors: &mut Vec<ConfigError>, field: String, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ConfigError::new(
            field,
            format!("Must be a finite, non-negative number, got {value}"),
        ));
    }
}

impl Validatable for GlobalWeights {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for category in Category::ALL {
            check_weight(
                &mut errors,
                format!("weights.{}", category.keyword()),
                self.get(category),
            );
        }
        if errors.is_empty() && self.sum() <= 0.0 {
            errors.push(ConfigError::new(
                "weights",
                "At least one category weight must be positive",
            ));
        }
        errors
    }
}

impl Validatable for TransportPenalty {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_weight(
            &mut errors,
            "transport_penalty.performance".to_string(),
            self.performance,
        );
        check_weight(&mut errors, "transport_penalty.seo".to_string(), self.seo);
        errors
    }
}

impl Validatable for OpportunityPolicy {
    fn validate(&self) -> Vec<ConfigError> {
        if self.max_results == 0 {
            vec![ConfigError::new(
                "opportunities.max_results",
                "Must keep at least one opportunity",
            )]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for PlanCatalog {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (tier, spec) in self.iter() {
            let prefix = format!("plans.{}", tier.name().to_lowercase());
            if spec.monthly_price < 0 {
                errors.push(ConfigError::new(
                    format!("{prefix}.monthly_price"),
                    format!("Price must not be negative, got {}", spec.monthly_price),
                ));
            }
            if spec.target_score > 100 {
                errors.push(ConfigError::new(
                    format!("{prefix}.target_score"),
                    format!("Target score must be 0-100, got {}", spec.target_score),
                ));
            }
        }
        errors
    }
}

impl Validatable for IndustryProfile {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let prefix = format!("industries.{}", self.id);
        if self.id.trim().is_empty() {
            errors.push(ConfigError::new("industries", "Profile id must not be empty"));
        }
        for category in Category::ALL {
            check_weight(
                &mut errors,
                format!("{prefix}.weight_multipliers.{}", category.keyword()),
                self.weight_multipliers.get(category),
            );
        }
        if self.average_monthly_revenue <= 0 {
            errors.push(ConfigError::new(
                format!("{prefix}.average_monthly_revenue"),
                format!(
                    "Revenue baseline must be positive, got {}",
                    self.average_monthly_revenue
                ),
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::industry::WeightMultipliers;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoringConfig::default().is_valid());
    }

    #[test]
    fn test_zero_weights_rejected() {
        let weights = GlobalWeights {
            performance: 0.0,
            mobile: 0.0,
            seo: 0.0,
            conversion: 0.0,
            content: 0.0,
        };
        let errors = weights.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "weights");
    }

    #[test]
    fn test_nan_weight_rejected() {
        let weights = GlobalWeights {
            seo: f64::NAN,
            ..GlobalWeights::default()
        };
        let errors = weights.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "weights.seo");
    }

    #[test]
    fn test_bad_industry_profile() {
        let profile = IndustryProfile::new(
            "broken",
            WeightMultipliers {
                mobile: -1.0,
                ..WeightMultipliers::default()
            },
            &[],
            0,
        );
        let config = ScoringConfig::builder().industry(profile).build();
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"industries.broken.weight_multipliers.mobile".to_string()));
        assert!(fields.contains(&"industries.broken.average_monthly_revenue".to_string()));
    }

    #[test]
    fn test_plan_validation() {
        let mut plans = PlanCatalog::default();
        plans.premium.monthly_price = -1;
        plans.simple.target_score = 101;
        let errors = plans.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "plans.simple.target_score");
        assert_eq!(errors[1].field, "plans.premium.monthly_price");
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let config = ScoringConfig::builder().max_opportunities(0).build();
        assert!(!config.is_valid());
    }
}
