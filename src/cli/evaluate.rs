//! Evaluate command handler.
//!
//! Implements the `evaluate` subcommand: load collected analyses, score them
//! and emit the verdicts as JSON.

use crate::config::ScoringConfig;
use crate::pipeline::{
    exit_codes, load_analyses, write_output, Envelope, OutputTarget, Verdict, VerdictEngine,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Evaluate command configuration
pub struct EvaluateConfig {
    pub input: PathBuf,
    /// Industry id applied to every page, overriding the analysis
    pub industry: Option<String>,
    /// Monthly revenue applied to every page, overriding the analysis
    pub revenue: Option<i64>,
    pub output_file: Option<PathBuf>,
    pub compact: bool,
    pub quiet: bool,
    pub scoring: ScoringConfig,
}

/// Run the evaluate command, returning the desired exit code.
///
/// A single analysis object yields one verdict; an array yields an array of
/// the verdicts that succeeded. Any failed page makes the exit code
/// [`exit_codes::ERROR`] after the successful verdicts are written.
pub fn run_evaluate(config: EvaluateConfig) -> Result<i32> {
    let engine = VerdictEngine::new(config.scoring).context("invalid scoring configuration")?;

    let mut analyses = load_analyses(&config.input)?;
    for analysis in &mut analyses {
        if let Some(industry) = &config.industry {
            analysis.industry = Some(industry.clone());
        }
        if config.revenue.is_some() {
            analysis.current_monthly_revenue = config.revenue;
        }
    }

    let single = analyses.len() == 1;
    let mut failures = 0usize;
    let verdicts: Vec<Verdict> = engine
        .evaluate_batch(&analyses)
        .into_iter()
        .filter_map(|result| match result {
            Ok(verdict) => Some(verdict),
            Err(err) => {
                tracing::error!("{err}");
                failures += 1;
                None
            }
        })
        .collect();

    let json = if single {
        match verdicts.into_iter().next() {
            Some(verdict) => Envelope::new(verdict).to_json(config.compact)?,
            None => return Ok(exit_codes::ERROR),
        }
    } else {
        Envelope::new(verdicts).to_json(config.compact)?
    };

    write_output(&json, &OutputTarget::from_option(config.output_file), config.quiet)?;

    if failures > 0 {
        tracing::error!("{failures} of {} pages could not be evaluated", analyses.len());
        return Ok(exit_codes::ERROR);
    }
    Ok(exit_codes::SUCCESS)
}
