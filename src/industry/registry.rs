//! Industry Profile Registry.

use indexmap::IndexMap;

use super::catalog::{builtin_profiles, default_profile, DEFAULT_INDUSTRY};
use super::profile::{normalize_id, IndustryProfile};

/// Immutable id → profile mapping with a guaranteed `default` entry.
///
/// Built once at startup and shared by reference; lookups never fail.
#[derive(Debug, Clone)]
pub struct IndustryRegistry {
    default: IndustryProfile,
    /// Non-default profiles keyed by normalized id, in catalogue order
    profiles: IndexMap<String, IndustryProfile>,
}

impl Default for IndustryRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl IndustryRegistry {
    /// Registry holding only the `default` profile
    #[must_use]
    pub fn empty() -> Self {
        Self {
            default: default_profile(),
            profiles: IndexMap::new(),
        }
    }

    /// Registry with the built-in catalogue
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for profile in builtin_profiles() {
            registry.insert(profile);
        }
        registry
    }

    /// Built-ins plus `overrides`; an override replaces the profile with the same id
    #[must_use]
    pub fn with_overrides(overrides: &[IndustryProfile]) -> Self {
        let mut registry = Self::with_builtins();
        for profile in overrides {
            registry.insert(profile.clone());
        }
        registry
    }

    /// Register a profile, replacing any profile with the same normalized id
    pub fn insert(&mut self, mut profile: IndustryProfile) {
        let id = normalize_id(&profile.id);
        profile.id.clone_from(&id);
        if id == DEFAULT_INDUSTRY {
            self.default = profile;
        } else {
            self.profiles.insert(id, profile);
        }
    }

    /// The fallback profile
    #[must_use]
    pub const fn default_profile(&self) -> &IndustryProfile {
        &self.default
    }

    /// Exact lookup; `None` for unknown ids
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&IndustryProfile> {
        let key = normalize_id(id);
        if key == DEFAULT_INDUSTRY {
            return Some(&self.default);
        }
        self.profiles.get(&key)
    }

    /// Get-or-default lookup. Unknown or absent ids resolve to `default`.
    #[must_use]
    pub fn resolve(&self, id: Option<&str>) -> &IndustryProfile {
        match id {
            Some(id) => self.get(id).unwrap_or_else(|| {
                tracing::debug!("Unknown industry '{}', using '{}'", id, DEFAULT_INDUSTRY);
                &self.default
            }),
            None => &self.default,
        }
    }

    /// Ratio of `profile`'s revenue baseline to the default baseline
    #[must_use]
    pub fn revenue_scale(&self, profile: &IndustryProfile) -> f64 {
        let base = self.default.average_monthly_revenue;
        if base <= 0 {
            return 1.0;
        }
        profile.average_monthly_revenue as f64 / base as f64
    }

    /// Guess the industry from page text by keyword hits.
    ///
    /// Highest hit count wins; ties go to the earlier profile. Returns `None`
    /// when no keyword of any profile occurs.
    #[must_use]
    pub fn detect(&self, text: &str) -> Option<&IndustryProfile> {
        let lowered = text.to_lowercase();
        let mut best: Option<(&IndustryProfile, usize)> = None;
        for profile in self.profiles.values() {
            let hits = profile.keyword_hits(&lowered);
            if hits > 0 && best.map_or(true, |(_, h)| hits > h) {
                best = Some((profile, hits));
            }
        }
        best.map(|(profile, _)| profile)
    }

    /// All profiles, `default` first
    pub fn iter(&self) -> impl Iterator<Item = &IndustryProfile> {
        std::iter::once(&self.default).chain(self.profiles.values())
    }

    /// Number of profiles including `default`
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len() + 1
    }

    /// Always false: `default` is always present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}
