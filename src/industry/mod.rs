//! Industry Profile Registry.
//!
//! Maps an industry identifier to category weight multipliers, domain
//! keywords and a baseline monthly revenue. Unknown or absent identifiers
//! resolve to the `default` profile, which always exists.
//!
//! ```
//! use site_verdict::industry::IndustryRegistry;
//!
//! let registry = IndustryRegistry::with_builtins();
//! assert_eq!(registry.resolve(Some("beauty_salon")).id, "beauty_salon");
//! assert_eq!(registry.resolve(Some("unheard-of")).id, "default");
//! ```

mod catalog;
mod profile;
mod registry;

pub use catalog::{
    builtin_profiles, default_profile, DEFAULT_AVERAGE_MONTHLY_REVENUE, DEFAULT_INDUSTRY,
};
pub use profile::{normalize_id, IndustryProfile, WeightMultipliers};
pub use registry::IndustryRegistry;
