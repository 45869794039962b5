//! Quality categories and the per-category results handed over by analyzers.

use serde::{Deserialize, Serialize};

use super::{Issue, Opportunity};

/// One independently measured dimension of website quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Performance,
    Mobile,
    Seo,
    Conversion,
    Content,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Self; 5] = [
        Self::Performance,
        Self::Mobile,
        Self::Seo,
        Self::Conversion,
        Self::Content,
    ];

    /// Display label
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Performance => "Performance",
            Self::Mobile => "Mobile",
            Self::Seo => "SEO",
            Self::Conversion => "Conversion",
            Self::Content => "Content",
        }
    }

    /// Lowercased label, matched against opportunity titles
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Mobile => "mobile",
            Self::Seo => "seo",
            Self::Conversion => "conversion",
            Self::Content => "content",
        }
    }

    /// Whether `title` mentions this category's label (case-insensitive)
    #[must_use]
    pub fn mentioned_in(&self, title: &str) -> bool {
        title.to_lowercase().contains(self.keyword())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output of one category analyzer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Raw score, nominally 0-100; out-of-range values are clamped after weighting
    pub score: f64,
    /// Improvement opportunities found by the analyzer
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    /// Issues found by the analyzer, passed through untouched
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl CategoryResult {
    /// Result with a score and nothing else
    #[must_use]
    pub fn with_score(score: f64) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_opportunities(mut self, opportunities: Vec<Opportunity>) -> Self {
        self.opportunities = opportunities;
        self
    }

    #[must_use]
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }
}

/// The five category results of one page.
///
/// Every field is required: a document missing a category fails to
/// deserialize rather than scoring with a silent zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResults {
    pub performance: CategoryResult,
    pub mobile: CategoryResult,
    pub seo: CategoryResult,
    pub conversion: CategoryResult,
    pub content: CategoryResult,
}

impl CategoryResults {
    /// Build results from bare scores, in canonical category order
    #[must_use]
    pub fn from_scores(scores: [f64; 5]) -> Self {
        let [performance, mobile, seo, conversion, content] = scores;
        Self {
            performance: CategoryResult::with_score(performance),
            mobile: CategoryResult::with_score(mobile),
            seo: CategoryResult::with_score(seo),
            conversion: CategoryResult::with_score(conversion),
            content: CategoryResult::with_score(content),
        }
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Performance => &self.performance,
            Category::Mobile => &self.mobile,
            Category::Seo => &self.seo,
            Category::Conversion => &self.conversion,
            Category::Content => &self.content,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut CategoryResult {
        match category {
            Category::Performance => &mut self.performance,
            Category::Mobile => &mut self.mobile,
            Category::Seo => &mut self.seo,
            Category::Conversion => &mut self.conversion,
            Category::Content => &mut self.content,
        }
    }

    /// Iterate `(category, result)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Opportunity lists in canonical order, one per category
    #[must_use]
    pub fn opportunity_lists(&self) -> [&[Opportunity]; 5] {
        Category::ALL.map(|c| self.get(c).opportunities.as_slice())
    }
}
