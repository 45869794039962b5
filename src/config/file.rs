//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::ScoringConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".site-verdict.yaml",
    ".site-verdict.yml",
    "site-verdict.yaml",
    "site-verdict.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/site-verdict/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("site-verdict")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load a `ScoringConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<ScoringConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: ScoringConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (ScoringConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (ScoringConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (ScoringConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        "# site-verdict configuration
# Place this file at .site-verdict.yaml in your project root or ~/.config/site-verdict/

{}",
        serde_yaml_ng::to_string(&ScoringConfig::default()).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# site-verdict configuration file
# ================================
#
# Place it at:
#   - .site-verdict.yaml in the working directory
#   - ~/.config/site-verdict/site-verdict.yaml for global config

# Global category weights; normalized by their sum at scoring time
weights:
  performance: 0.25
  mobile: 0.20
  seo: 0.20
  conversion: 0.20
  content: 0.15

# Points subtracted when a page is not served over HTTPS
transport_penalty:
  performance: 10
  seo: 15

opportunities:
  # Length of the ranked opportunity list
  max_results: 10

# Remediation plans
plans:
  simple:
    name: Simple
    monthly_price: 30000
    target_score: 60
  standard:
    name: Standard
    monthly_price: 50000
    target_score: 75
  premium:
    name: Premium
    monthly_price: 100000
    target_score: 90

# Extra industry profiles, or overrides of built-ins by id
# industries:
#   - id: veterinary
#     weight_multipliers: { performance: 1.0, mobile: 1.3, seo: 1.1, conversion: 1.1, content: 1.0 }
#     keywords: [vet, veterinary, pet, animal hospital]
#     average_monthly_revenue: 3500000

# Guess the industry from page text when none is given
auto_detect_industry: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".site-verdict.yaml");
        std::fs::write(&config_path, "auto_detect_industry: true\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        let yaml = r"
weights:
  performance: 0.4
opportunities:
  max_results: 5
industries:
  - id: veterinary
    keywords: [vet, pet]
    average_monthly_revenue: 3500000
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.weights.performance, 0.4);
        assert_eq!(config.opportunities.max_results, 5);
        assert_eq!(config.industries.len(), 1);
        assert_eq!(config.industries[0].weight_multipliers.mobile, 1.0);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/site-verdict.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_on_parse_failure() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "weights: [not, a, map]\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, ScoringConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom.yaml");
        std::fs::write(&config_path, "auto_detect_industry: false\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }

    #[test]
    fn test_example_configs_parse() {
        let defaults = ScoringConfig::default();
        let full: ScoringConfig = serde_yaml_ng::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full.weights, defaults.weights);
        assert_eq!(full.transport_penalty, defaults.transport_penalty);
        assert_eq!(full.opportunities, defaults.opportunities);
        for (tier, spec) in full.plans.iter() {
            assert_eq!(spec.monthly_price, defaults.plans.get(tier).monthly_price);
            assert_eq!(spec.target_score, defaults.plans.get(tier).target_score);
        }

        let generated: ScoringConfig = serde_yaml_ng::from_str(&generate_example_config()).unwrap();
        assert_eq!(generated, ScoringConfig::default());
    }
}
