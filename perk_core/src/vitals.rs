//! Estimators for vitals the user did not supply.
//!
//! Both are plain population heuristics. They are defined for any finite
//! input and never fail, even where the output is not physiologically
//! sensible.

use crate::units::round_half_up;
use crate::{ActivityLevel, BloodPressure, Sex};

/// BMI above which the blood-pressure estimate is raised
const BMI_OVERWEIGHT: f64 = 25.0;

/// Estimate resting blood pressure from age and body composition
///
/// ## Model
///
/// - systolic `110 + 0.3·age`, diastolic `70 + 0.15·age`
/// - BMI over 25 adds `5 + 0.8·(bmi − 25)` / `3 + 0.5·(bmi − 25)`
/// - male adds 2 to systolic
pub fn estimate_blood_pressure(age: u32, weight_kg: f64, height_cm: f64, sex: Sex) -> BloodPressure {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    let age = f64::from(age);

    let mut systolic = 110.0 + age * 0.3;
    let mut diastolic = 70.0 + age * 0.15;

    if bmi > BMI_OVERWEIGHT {
        systolic += 5.0 + (bmi - BMI_OVERWEIGHT) * 0.8;
        diastolic += 3.0 + (bmi - BMI_OVERWEIGHT) * 0.5;
    }
    if sex == Sex::Male {
        systolic += 2.0;
    }

    let bp = BloodPressure {
        systolic: round_half_up(systolic) as i32,
        diastolic: round_half_up(diastolic) as i32,
    };
    tracing::debug!("Estimated blood pressure {} (bmi {:.1})", bp, bmi);
    bp
}

/// Estimate resting heart rate in beats per minute.
///
/// Not clamped: very old, very active profiles can land below anything
/// plausible.
pub fn estimate_bpm(age: u32, activity_level: ActivityLevel, sex: Sex) -> i32 {
    let mut bpm = 70.0;
    if age > 30 {
        bpm -= f64::from(age - 30) * 0.1;
    }

    bpm += match activity_level {
        ActivityLevel::Sedentary => 5.0,
        ActivityLevel::Moderate => 0.0,
        ActivityLevel::Active => -5.0,
        ActivityLevel::VeryActive => -10.0,
    };
    if sex == Sex::Female {
        bpm += 2.0;
    }

    let bpm = round_half_up(bpm) as i32;
    tracing::debug!("Estimated resting heart rate {} bpm", bpm);
    bpm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bp_normal_bmi_male() {
        // bmi 22.1: no overweight bump
        let bp = estimate_blood_pressure(30, 70.0, 178.0, Sex::Male);
        assert_eq!(bp, BloodPressure { systolic: 121, diastolic: 75 });
    }

    #[test]
    fn test_bp_normal_bmi_female() {
        let bp = estimate_blood_pressure(30, 60.0, 170.0, Sex::Female);
        assert_eq!(bp, BloodPressure { systolic: 119, diastolic: 75 });
    }

    #[test]
    fn test_bp_overweight() {
        // bmi 30: systolic 110 + 12 + 5 + 4 + 2, diastolic 70 + 6 + 3 + 2.5
        let bp = estimate_blood_pressure(40, 120.0, 200.0, Sex::Male);
        assert_eq!(bp, BloodPressure { systolic: 133, diastolic: 82 });
    }

    #[test]
    fn test_bpm_sedentary_female_rounds_half_up() {
        assert_eq!(estimate_bpm(35, ActivityLevel::Sedentary, Sex::Female), 77);
    }

    #[test]
    fn test_bpm_young_ages_are_not_adjusted() {
        assert_eq!(estimate_bpm(20, ActivityLevel::Moderate, Sex::Male), 70);
        assert_eq!(estimate_bpm(30, ActivityLevel::Moderate, Sex::Male), 70);
    }

    #[test]
    fn test_bpm_activity_offsets() {
        assert_eq!(estimate_bpm(25, ActivityLevel::Active, Sex::Male), 65);
        assert_eq!(estimate_bpm(25, ActivityLevel::VeryActive, Sex::Male), 60);
        assert_eq!(estimate_bpm(25, ActivityLevel::VeryActive, Sex::Female), 62);
    }

    #[test]
    fn test_bpm_has_no_lower_clamp() {
        // Known gap: nothing stops the estimate at a plausible floor.
        assert_eq!(estimate_bpm(630, ActivityLevel::VeryActive, Sex::Male), 0);
        assert!(estimate_bpm(900, ActivityLevel::VeryActive, Sex::Male) < 0);
    }
}
