//! Fully collected analysis of one page, as handed to the scoring core.

use serde::{Deserialize, Serialize};

use super::{CategoryResults, Issue};

/// Everything the analyzers collected about one page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageAnalysis {
    /// Page URL
    pub url: String,
    /// Industry identifier; absent or unknown resolves to `default`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Explicit transport-security flag; inferred from the URL scheme when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_transport: Option<bool>,
    /// Known monthly revenue, used instead of the industry baseline for ROI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_monthly_revenue: Option<i64>,
    /// Visible page text, used only for keyword-based industry detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_text: Option<String>,
    /// Per-category analyzer output
    pub categories: CategoryResults,
}

impl PageAnalysis {
    /// Create an analysis for `url`
    pub fn new(url: impl Into<String>, categories: CategoryResults) -> Self {
        Self {
            url: url.into(),
            categories,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    #[must_use]
    pub const fn with_secure_transport(mut self, secure: bool) -> Self {
        self.secure_transport = Some(secure);
        self
    }

    #[must_use]
    pub const fn with_monthly_revenue(mut self, revenue: i64) -> Self {
        self.current_monthly_revenue = Some(revenue);
        self
    }

    /// Whether the page was served over HTTPS
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.secure_transport.unwrap_or_else(|| {
            self.url
                .trim_start()
                .get(..8)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
        })
    }

    /// All issues in canonical category order
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.categories.iter().flat_map(|(_, r)| r.issues.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_transport_inferred_from_scheme() {
        let analysis = PageAnalysis::new("https://example.com", CategoryResults::default());
        assert!(analysis.is_secure());

        let analysis = PageAnalysis::new("HTTPS://EXAMPLE.COM", CategoryResults::default());
        assert!(analysis.is_secure());

        let analysis = PageAnalysis::new("http://example.com", CategoryResults::default());
        assert!(!analysis.is_secure());

        let analysis = PageAnalysis::new("", CategoryResults::default());
        assert!(!analysis.is_secure());
    }

    #[test]
    fn test_explicit_flag_wins() {
        let analysis = PageAnalysis::new("https://example.com", CategoryResults::default())
            .with_secure_transport(false);
        assert!(!analysis.is_secure());
    }

    #[test]
    fn test_deserialize_minimal_document() {
        let json = r#"{
            "url": "https://salon.example",
            "industry": "beauty_salon",
            "categories": {
                "performance": {"score": 72},
                "mobile": {"score": 40, "opportunities": [{
                    "title": "Enlarge tap targets",
                    "description": "Buttons are too small on phones",
                    "estimated_improvement_pct": 12,
                    "estimated_revenue_lift": 20000,
                    "effort": "low",
                    "priority": 6
                }]},
                "seo": {"score": 55},
                "conversion": {"score": 35},
                "content": {"score": 60}
            }
        }"#;
        let analysis: PageAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.industry.as_deref(), Some("beauty_salon"));
        assert_eq!(analysis.categories.mobile.opportunities.len(), 1);
        assert!(analysis.current_monthly_revenue.is_none());
    }
}
