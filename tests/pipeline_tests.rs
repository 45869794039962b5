//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → evaluate → write pipeline, config
//! file handling and the CLI command handlers with real fixture files.

use site_verdict::cli::{run_evaluate, EvaluateConfig};
use site_verdict::config::{load_config_file, load_or_default, ScoringConfig};
use site_verdict::model::IssueSeverity;
use site_verdict::pipeline::{exit_codes, load_analyses, VerdictEngine};
use site_verdict::scoring::{PlanTier, PriorityTier};
use site_verdict::VerdictError;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

// ============================================================================
// Single page evaluation
// ============================================================================

mod single_page {
    use super::*;

    fn restaurant_verdict() -> site_verdict::Verdict {
        let analyses = load_analyses(&fixture_path("restaurant_page.json")).expect("fixture loads");
        assert_eq!(analyses.len(), 1);
        VerdictEngine::with_defaults()
            .evaluate(&analyses[0])
            .expect("evaluation should succeed")
    }

    #[test]
    fn composite_applies_penalty_and_multipliers() {
        let verdict = restaurant_verdict();
        assert_eq!(verdict.industry, "restaurant");
        // http: performance 45-10, seo 55-15, then restaurant multipliers
        assert_eq!(verdict.composite.performance, 39);
        assert_eq!(verdict.composite.mobile, 52);
        assert_eq!(verdict.composite.seo, 44);
        assert_eq!(verdict.composite.conversion, 35);
        assert_eq!(verdict.composite.content, 54);
        assert_eq!(verdict.composite.total, 44);
    }

    #[test]
    fn opportunities_ranked_and_deduplicated() {
        let verdict = restaurant_verdict();
        let titles: Vec<&str> = verdict.opportunities.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Conversion Optimization Program",
                "Add online reservation button",
                "Improve SEO meta descriptions",
                "Compress hero images",
                "Enlarge tap targets",
            ]
        );
        let priorities: Vec<u8> = verdict.opportunities.iter().map(|o| o.priority).collect();
        assert_eq!(priorities, [10, 10, 7, 6, 5]);

        // revenue lifts rescaled to the 3,000,000 restaurant baseline
        let lifts: Vec<i64> = verdict
            .opportunities
            .iter()
            .map(|o| o.estimated_revenue_lift)
            .collect();
        assert_eq!(lifts, [360_000, 60_000, 36_000, 24_000, 12_000]);
    }

    #[test]
    fn loss_priority_and_plan() {
        let verdict = restaurant_verdict();
        assert_eq!(verdict.estimated_monthly_loss, 492_000);
        assert_eq!(verdict.priority, PriorityTier::High);
        assert_eq!(verdict.plan, PlanTier::Standard);
        assert_eq!(verdict.plan_details.name, "Standard");
        assert_eq!(verdict.roi.estimated_monthly_return, 465_000);
        assert_eq!(verdict.roi.payback_period_months, 1);
        assert_eq!(verdict.roi.three_year_roi, 830);
    }

    #[test]
    fn summary_and_issues() {
        let verdict = restaurant_verdict();
        assert_eq!(verdict.summary.total_revenue_lift, 492_000);
        assert_eq!(verdict.summary.quick_wins.len(), 3);
        assert_eq!(verdict.summary.high_impact.len(), 3);

        assert_eq!(verdict.issues.len(), 2);
        assert_eq!(verdict.issues[0].severity, IssueSeverity::Critical);
        assert_eq!(verdict.issue_counts.critical, 1);
        assert_eq!(verdict.issue_counts.medium, 1);
    }

    #[test]
    fn explicit_revenue_drives_roi() {
        let analysis = load_analyses(&fixture_path("restaurant_page.json"))
            .unwrap()
            .remove(0)
            .with_monthly_revenue(1_000_000);
        let verdict = VerdictEngine::with_defaults().evaluate(&analysis).unwrap();
        // 1,000,000 * 31 * 0.005
        assert_eq!(verdict.roi.estimated_monthly_return, 155_000);
        // opportunity scaling still follows the industry baseline
        assert_eq!(verdict.estimated_monthly_loss, 492_000);
    }

    #[test]
    fn evaluation_is_deterministic() {
        assert_eq!(restaurant_verdict(), restaurant_verdict());
    }
}

// ============================================================================
// Batch evaluation
// ============================================================================

mod batch {
    use super::*;

    #[test]
    fn batch_with_default_config() {
        let analyses = load_analyses(&fixture_path("batch.json")).unwrap();
        let results = VerdictEngine::with_defaults().evaluate_batch(&analyses);
        let verdicts: Vec<_> = results.into_iter().map(Result::unwrap).collect();

        assert_eq!(verdicts[0].url, "https://shop.example");
        assert_eq!(verdicts[0].composite.total, 65);
        assert_eq!(verdicts[0].priority, PriorityTier::Low);
        assert_eq!(verdicts[0].plan, PlanTier::Standard);

        assert_eq!(verdicts[1].composite.total, 0);
        assert_eq!(verdicts[1].opportunities.len(), 4);
        assert_eq!(verdicts[1].estimated_monthly_loss, 900_000);
        assert_eq!(verdicts[1].priority, PriorityTier::High);
        assert_eq!(verdicts[1].plan, PlanTier::Premium);
        assert_eq!(verdicts[1].roi.estimated_monthly_return, 1_125_000);
        assert_eq!(verdicts[1].roi.three_year_roi, 1_025);

        // detection is off by default
        assert_eq!(verdicts[2].industry, "default");
        assert_eq!(verdicts[2].composite.total, 70);
        assert_eq!(verdicts[2].plan, PlanTier::Simple);
        assert_eq!(verdicts[2].roi.estimated_monthly_return, 0);
    }

    #[test]
    fn batch_with_config_file() {
        let config = load_config_file(&fixture_path("config_local_business.yaml")).unwrap();
        assert!(config.auto_detect_industry);
        let engine = VerdictEngine::new(config).unwrap();
        assert!(engine.registry().get("veterinary").is_some());

        let analyses = load_analyses(&fixture_path("batch.json")).unwrap();
        let verdicts: Vec<_> = engine
            .evaluate_batch(&analyses)
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(verdicts[1].opportunities.len(), 3);
        assert_eq!(verdicts[2].industry, "dental_clinic");
        // 70,84,77,84,70 under local-business weights
        assert_eq!(verdicts[2].composite.total, 77);
    }
}

// ============================================================================
// Configuration
// ============================================================================

mod config_files {
    use super::*;

    #[test]
    fn explicit_config_path_is_used() {
        let path = fixture_path("config_local_business.yaml");
        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(config.opportunities.max_results, 3);
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "weights: [not, a, map]\n").unwrap();
        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(config, ScoringConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn invalid_policy_rejected_by_engine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.yaml");
        std::fs::write(
            &path,
            "weights: {performance: 0, mobile: 0, seo: 0, conversion: 0, content: 0}\n",
        )
        .unwrap();
        let config = load_config_file(&path).unwrap();
        assert!(matches!(VerdictEngine::new(config), Err(VerdictError::Config(_))));
    }
}

// ============================================================================
// CLI handlers
// ============================================================================

mod cli_handlers {
    use super::*;

    fn evaluate_config(input: PathBuf, output: PathBuf) -> EvaluateConfig {
        EvaluateConfig {
            input,
            industry: None,
            revenue: None,
            output_file: Some(output),
            compact: false,
            quiet: true,
            scoring: ScoringConfig::default(),
        }
    }

    #[test]
    fn evaluate_batch_writes_array() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("verdicts.json");
        let code =
            run_evaluate(evaluate_config(fixture_path("batch.json"), output.clone())).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(written["verdict"].as_array().map(Vec::len), Some(3));
        assert_eq!(written["verdict"][1]["priority"], "high");
        assert_eq!(written["verdict"][1]["plan"], "premium");
        assert!(written["generated_at"].is_string());
    }

    #[test]
    fn evaluate_industry_override() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("verdict.json");
        let mut config = evaluate_config(fixture_path("restaurant_page.json"), output.clone());
        config.industry = Some("Law Firm".to_string());
        assert_eq!(run_evaluate(config).unwrap(), exit_codes::SUCCESS);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(written["verdict"]["industry"], "law_firm");
    }

    #[test]
    fn evaluate_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = evaluate_config(dir.path().join("absent.json"), dir.path().join("out.json"));
        assert!(run_evaluate(config).is_err());
    }
}
