//! Industries command handler.

use crate::config::ScoringConfig;
use crate::industry::{IndustryProfile, IndustryRegistry};
use crate::model::Category;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::Result;
use std::fmt::Write as _;

/// Print the industry registry built from `scoring`, as JSON or a table
pub fn run_industries(scoring: &ScoringConfig, json: bool) -> Result<i32> {
    let registry = IndustryRegistry::with_overrides(&scoring.industries);

    let output = if json {
        let profiles: Vec<&IndustryProfile> = registry.iter().collect();
        serde_json::to_string_pretty(&profiles)?
    } else {
        format_industry_table(&registry)
    };

    write_output(&output, &OutputTarget::Stdout, false)?;
    Ok(exit_codes::SUCCESS)
}

fn format_industry_table(registry: &IndustryRegistry) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<16} {:>12}", "INDUSTRY", "REVENUE");
    for category in Category::ALL {
        let _ = write!(out, " {:>6}", category.keyword().get(..6).unwrap_or(category.keyword()));
    }
    out.push('\n');

    for profile in registry.iter() {
        let _ = write!(out, "{:<16} {:>12}", profile.id, profile.average_monthly_revenue);
        for category in Category::ALL {
            let _ = write!(out, " {:>6.2}", profile.weight_multipliers.get(category));
        }
        if !profile.keywords.is_empty() {
            let keywords: Vec<&str> = profile.keywords.iter().map(String::as_str).collect();
            let _ = write!(out, "  {}", keywords.join(", "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_profile() {
        let registry = IndustryRegistry::with_builtins();
        let table = format_industry_table(&registry);
        assert_eq!(table.lines().count(), registry.len() + 1);
        assert!(table.lines().nth(1).unwrap().starts_with("default"));
        assert!(table.contains("dental_clinic"));
        assert!(table.contains("4000000"));
    }
}
