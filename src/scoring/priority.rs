//! Priority Classifier.

use serde::{Deserialize, Serialize};

/// Sales-urgency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// Classify a page by composite total and estimated monthly loss.
    ///
    /// First match wins:
    /// - total ≤ 40 or loss ≥ 100,000 → High
    /// - total ≤ 60 or loss ≥ 50,000 → Medium
    /// - otherwise Low
    ///
    /// Loss thresholds are absolute, independent of the industry baseline.
    #[must_use]
    pub const fn classify(total_score: u8, estimated_monthly_loss: i64) -> Self {
        if total_score <= 40 || estimated_monthly_loss >= 100_000 {
            Self::High
        } else if total_score <= 60 || estimated_monthly_loss >= 50_000 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PriorityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown priority tier: {s}. Valid options: high, medium, low")),
        }
    }
}
