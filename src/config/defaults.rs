//! Default values and named presets.

use super::types::{GlobalWeights, ScoringConfig};
use crate::error::{OptionContext, Result};

/// Length of the ranked opportunity list
pub const DEFAULT_MAX_OPPORTUNITIES: usize = 10;

// ============================================================================
// Scoring Presets
// ============================================================================

/// Named weight presets for common kinds of site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPreset {
    /// Balanced weights
    Default,
    /// Local businesses found through search on phones
    LocalBusiness,
    /// Online shops, where speed and checkout dominate
    Ecommerce,
}

impl ScoringPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LocalBusiness => "local-business",
            Self::Ecommerce => "ecommerce",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "local-business" | "local" | "local_business" => Some(Self::LocalBusiness),
            "ecommerce" | "e-commerce" | "shop" => Some(Self::Ecommerce),
            _ => None,
        }
    }

    /// Parse a preset name, listing the valid names when it is unknown.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).context_none(format!(
            "Unknown preset: {name}. Valid options: {}",
            Self::all()
                .iter()
                .map(Self::name)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced weights suitable for most sites",
            Self::LocalBusiness => "Emphasizes mobile and SEO for locally searched businesses",
            Self::Ecommerce => "Emphasizes performance and conversion for online shops",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::LocalBusiness, Self::Ecommerce]
    }

    /// Global weights of this preset
    #[must_use]
    pub fn weights(&self) -> GlobalWeights {
        match self {
            Self::Default => GlobalWeights::default(),
            Self::LocalBusiness => GlobalWeights {
                performance: 0.20,
                mobile: 0.25,
                seo: 0.25,
                conversion: 0.15,
                content: 0.15,
            },
            Self::Ecommerce => GlobalWeights {
                performance: 0.30,
                mobile: 0.20,
                seo: 0.15,
                conversion: 0.25,
                content: 0.10,
            },
        }
    }
}

impl std::fmt::Display for ScoringPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ScoringConfig {
    /// Create a `ScoringConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ScoringPreset) -> Self {
        Self {
            weights: preset.weights(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_roundtrip() {
        for preset in ScoringPreset::all() {
            assert_eq!(ScoringPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ScoringPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_parse_unknown_preset_lists_options() {
        assert_eq!(ScoringPreset::parse("Local").unwrap(), ScoringPreset::LocalBusiness);
        match ScoringPreset::parse("boutique") {
            Err(crate::VerdictError::Config(message)) => {
                assert!(message.contains("boutique"), "{message}");
                assert!(message.contains("default, local-business, ecommerce"), "{message}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_preset_weights_sum_to_one() {
        for preset in ScoringPreset::all() {
            let sum = preset.weights().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{preset} weights sum to {sum}");
        }
    }

    #[test]
    fn test_from_preset_keeps_other_defaults() {
        let config = ScoringConfig::from_preset(ScoringPreset::Ecommerce);
        assert_eq!(config.weights.performance, 0.30);
        assert_eq!(config.opportunities.max_results, DEFAULT_MAX_OPPORTUNITIES);
    }
}
