//! Configuration module for site-verdict.
//!
//! This module provides the static scoring policy:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named weight presets
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use site_verdict::config::{ScoringConfig, ScoringPreset};
//!
//! // Use defaults
//! let config = ScoringConfig::default();
//!
//! // Use a preset
//! let config = ScoringConfig::from_preset(ScoringPreset::LocalBusiness);
//!
//! // Load from file
//! use site_verdict::config::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.site-verdict.yaml` file in the working directory or
//! `~/.config/site-verdict/`:
//!
//! ```yaml
//! weights:
//!   mobile: 0.3
//! plans:
//!   premium:
//!     name: Premium
//!     monthly_price: 120000
//!     target_score: 90
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ScoringPreset, DEFAULT_MAX_OPPORTUNITIES};
pub use types::{
    GlobalWeights, OpportunityPolicy, PlanCatalog, PlanSpec, ScoringConfig, ScoringConfigBuilder,
    TransportPenalty,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `ScoringConfig` configuration format.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(ScoringConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
