//! Loading collected page analyses from JSON.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ErrorContext, Result, VerdictError};
use crate::model::PageAnalysis;

/// Either one analysis or a batch of them
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalysisDocument {
    Batch(Vec<PageAnalysis>),
    Single(Box<PageAnalysis>),
}

/// Parse one analysis object or an array of them
pub fn parse_analyses(content: &str) -> Result<Vec<PageAnalysis>> {
    let document: AnalysisDocument = serde_json::from_str(content).map_err(|e| {
        VerdictError::Parse(format!(
            "JSON: expected a page analysis object or an array of them ({e})"
        ))
    })?;
    Ok(match document {
        AnalysisDocument::Batch(analyses) => analyses,
        AnalysisDocument::Single(analysis) => vec![*analysis],
    })
}

/// Read and parse an analysis file
pub fn load_analyses(path: &Path) -> Result<Vec<PageAnalysis>> {
    let content = std::fs::read_to_string(path).map_err(|e| VerdictError::io(path, e))?;
    let analyses = parse_analyses(&content).with_context(|| path.display().to_string())?;
    tracing::info!("Loaded {} page analyses from {}", analyses.len(), path.display());
    Ok(analyses)
}
