//! Beer limit before productivity drops, just for fun.
//!
//! Widmark formula, solved for the number of standard drinks that reach a
//! target blood alcohol concentration.

use crate::Sex;

/// Grams of alcohol in one standard beer (341 ml, 5% ABV)
pub const ALCOHOL_GRAMS_PER_SERVING: f64 = 14.0;

/// BAC at which productivity noticeably drops
pub const TARGET_BAC: f64 = 0.055;

/// Fewest servings ever reported
pub const MIN_SERVINGS: u32 = 2;

/// Most servings ever reported
pub const MAX_SERVINGS: u32 = 5;

fn body_water_ratio(sex: Sex) -> f64 {
    match sex {
        Sex::Male => 0.68,
        Sex::Female => 0.55,
    }
}

/// Standard beers before reaching [`TARGET_BAC`], clamped to `[2, 5]`.
///
/// `_age` is part of the interface but does not enter the formula.
pub fn compute_beer_limit(weight_kg: f64, sex: Sex, _age: u32) -> u32 {
    let raw = (TARGET_BAC * weight_kg * 1000.0 * body_water_ratio(sex))
        / (ALCOHOL_GRAMS_PER_SERVING * 100.0);
    let servings = raw.floor().max(0.0) as u32;
    servings.clamp(MIN_SERVINGS, MAX_SERVINGS)
}
