//! Built-in industry profiles.
//!
//! Revenue baselines are monthly figures in the implicit currency unit;
//! `default` is the reference scale for revenue normalization.

use super::profile::{IndustryProfile, WeightMultipliers};

/// Id of the fallback profile
pub const DEFAULT_INDUSTRY: &str = "default";

/// Average monthly revenue of the `default` profile
pub const DEFAULT_AVERAGE_MONTHLY_REVENUE: i64 = 2_500_000;

/// The fallback profile: neutral multipliers, no keywords
#[must_use]
pub fn default_profile() -> IndustryProfile {
    IndustryProfile::new(
        DEFAULT_INDUSTRY,
        WeightMultipliers::uniform(1.0),
        &[],
        DEFAULT_AVERAGE_MONTHLY_REVENUE,
    )
}

/// Built-in vertical profiles, in detection tie-break order
#[must_use]
pub fn builtin_profiles() -> Vec<IndustryProfile> {
    vec![
        IndustryProfile::new(
            "restaurant",
            WeightMultipliers::new(1.1, 1.3, 1.1, 1.0, 0.9),
            &["restaurant", "menu", "reservation", "cuisine", "takeout", "dinner", "lunch"],
            3_000_000,
        ),
        // Bookings come almost entirely from phones
        IndustryProfile::new(
            "beauty_salon",
            WeightMultipliers::new(1.0, 1.4, 1.0, 1.2, 0.9),
            &["salon", "hair", "nail", "beauty", "esthetic", "stylist", "booking"],
            1_500_000,
        ),
        IndustryProfile::new(
            "dental_clinic",
            WeightMultipliers::new(1.0, 1.2, 1.1, 1.2, 1.0),
            &["dental", "dentist", "clinic", "orthodontic", "implant", "appointment"],
            4_000_000,
        ),
        IndustryProfile::new(
            "law_firm",
            WeightMultipliers::new(0.9, 0.9, 1.2, 1.1, 1.3),
            &["attorney", "lawyer", "legal", "law firm", "litigation", "consultation"],
            5_000_000,
        ),
        IndustryProfile::new(
            "real_estate",
            WeightMultipliers::new(1.1, 1.1, 1.2, 1.1, 1.0),
            &["real estate", "property", "apartment", "rent", "listing", "mortgage"],
            6_000_000,
        ),
        IndustryProfile::new(
            "retail",
            WeightMultipliers::new(1.3, 1.2, 1.1, 1.3, 0.9),
            &["shop", "store", "cart", "checkout", "product", "shipping", "sale"],
            8_000_000,
        ),
        IndustryProfile::new(
            "fitness",
            WeightMultipliers::new(1.0, 1.3, 1.0, 1.2, 1.0),
            &["gym", "fitness", "workout", "personal training", "membership", "yoga"],
            2_000_000,
        ),
    ]
}
