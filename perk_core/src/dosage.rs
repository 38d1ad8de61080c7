//! Daily caffeine ceiling.
//!
//! The limit starts from a body-mass base and is scaled by a fixed sequence
//! of multiplicative adjustments:
//! - blood pressure (systolic > 130, > 140)
//! - resting heart rate (> 80, > 90)
//! - age (> 50, < 25)
//! - self-reported tolerance
//!
//! Every check compares the raw input against its threshold, so the
//! adjustments stack: a systolic of 145 applies both 0.7 and 0.5.

use crate::units::round_half_up;
use crate::{BloodPressure, PersonProfile, Tolerance};

/// Absolute ceiling before adjustments, in mg/day
pub const MAX_BASE_MG: f64 = 400.0;

/// Base allowance per kilogram of body mass, in mg/day
pub const MG_PER_KG: f64 = 6.0;

/// Unadjusted limit for a body mass
pub fn base_limit(weight_kg: f64) -> f64 {
    MAX_BASE_MG.min(weight_kg * MG_PER_KG)
}

/// Compute the daily limit in milligrams.
///
/// The profile is assumed valid; see [`PersonProfile::validate`]. There is
/// no lower floor: high-risk profiles can end up with very small limits.
pub fn compute_limit(profile: &PersonProfile, bp: &BloodPressure, hr_bpm: i32) -> u32 {
    let mut limit = base_limit(profile.weight_kg);
    tracing::debug!("Base limit {:.1} mg for {} kg", limit, profile.weight_kg);

    let adjustments = [
        (bp.systolic > 130, 0.7, "systolic > 130"),
        (bp.systolic > 140, 0.5, "systolic > 140"),
        (hr_bpm > 80, 0.8, "heart rate > 80"),
        (hr_bpm > 90, 0.6, "heart rate > 90"),
        (profile.age > 50, 0.85, "age > 50"),
        (profile.age < 25, 0.9, "age < 25"),
    ];

    for (applies, factor, reason) in adjustments {
        if applies {
            limit *= factor;
            tracing::debug!("Applied x{} ({}): {:.1} mg", factor, reason, limit);
        }
    }

    let tolerance_factor = match profile.tolerance {
        Tolerance::Low => 0.7,
        Tolerance::Moderate => 1.0,
        Tolerance::High => 1.2,
    };
    limit *= tolerance_factor;
    tracing::debug!(
        "Applied x{} (tolerance {:?}): {:.1} mg",
        tolerance_factor,
        profile.tolerance,
        limit
    );

    round_half_up(limit) as u32
}
