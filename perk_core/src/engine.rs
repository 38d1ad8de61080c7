//! Calculation engine: one profile in, one report out.
//!
//! Pipeline:
//! - Resolve vitals (measured, or estimated when unknown)
//! - Compute the daily limit and unit counts
//! - Resolve the schedule (generated or fallback) and label each slot
//! - Compute the beer limit off the same converted inputs

use crate::consumption::to_unit_counts;
use crate::dosage::compute_limit;
use crate::recreational::compute_beer_limit;
use crate::schedule::{self, RawScheduleEntry};
use crate::vitals::{estimate_blood_pressure, estimate_bpm};
use crate::{DosageResult, PersonProfile, Reading, Report, Result};

/// Compute the dosage result for a profile
///
/// Fails only if the profile violates its invariants, before anything is
/// derived.
pub fn calculate(profile: &PersonProfile) -> Result<DosageResult> {
    profile.validate()?;

    let blood_pressure = match profile.measured_bp {
        Some(bp) => Reading::Measured(bp),
        None => Reading::Estimated(estimate_blood_pressure(
            profile.age,
            profile.weight_kg,
            profile.height_cm,
            profile.sex,
        )),
    };

    let heart_rate = match profile.measured_hr {
        Some(hr) => Reading::Measured(hr),
        None => Reading::Estimated(estimate_bpm(
            profile.age,
            profile.activity_level,
            profile.sex,
        )),
    };

    let max_daily_mg = compute_limit(profile, &blood_pressure.value(), heart_rate.value());

    tracing::info!(
        "Daily limit {} mg (bp {:?}, hr {:?})",
        max_daily_mg,
        blood_pressure,
        heart_rate
    );

    Ok(DosageResult {
        max_daily_mg,
        unit_counts: to_unit_counts(max_daily_mg),
        blood_pressure,
        heart_rate,
    })
}

/// Build the full report
///
/// `schedule_outcome` is whatever the caller got from the schedule
/// generator. A failed outcome is not an error here; the fallback schedule
/// takes its place.
pub fn build_report(
    profile: &PersonProfile,
    schedule_outcome: Result<Vec<RawScheduleEntry>>,
) -> Result<Report> {
    let dosage = calculate(profile)?;

    let (entries, schedule_source) = schedule::resolve(schedule_outcome, dosage.max_daily_mg);
    let schedule = schedule::label(entries);

    let beer_limit = compute_beer_limit(profile.weight_kg, profile.sex, profile.age);

    Ok(Report {
        dosage,
        schedule,
        schedule_source,
        beer_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ActivityLevel, BloodPressure, Error, ScheduleSource, Sex, Tolerance, UnitCounts,
    };

    fn create_test_profile() -> PersonProfile {
        PersonProfile {
            age: 30,
            weight_kg: 70.0,
            height_cm: 178.0,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            tolerance: Tolerance::Moderate,
            measured_bp: Some(BloodPressure {
                systolic: 120,
                diastolic: 80,
            }),
            measured_hr: Some(70),
        }
    }

    #[test]
    fn test_measured_vitals_are_used() {
        let result = calculate(&create_test_profile()).unwrap();

        assert_eq!(result.max_daily_mg, 400);
        assert_eq!(
            result.unit_counts,
            UnitCounts {
                coffee_cups: 4,
                energy_drinks: 2,
                pills: 2
            }
        );
        assert_eq!(result.estimated_bp(), None);
        assert_eq!(result.estimated_hr(), None);
    }

    #[test]
    fn test_high_risk_vitals() {
        let mut profile = create_test_profile();
        profile.measured_bp = Some(BloodPressure {
            systolic: 145,
            diastolic: 90,
        });
        profile.measured_hr = Some(95);

        let result = calculate(&profile).unwrap();
        assert_eq!(result.max_daily_mg, 67);
        assert_eq!(result.unit_counts.coffee_cups, 0);
    }

    #[test]
    fn test_unknown_vitals_are_estimated() {
        let mut profile = create_test_profile();
        profile.measured_bp = None;
        profile.measured_hr = None;

        let result = calculate(&profile).unwrap();
        assert_eq!(
            result.estimated_bp(),
            Some(BloodPressure {
                systolic: 121,
                diastolic: 75
            })
        );
        assert_eq!(result.estimated_hr(), Some(70));
        assert_eq!(result.max_daily_mg, 400);
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let mut profile = create_test_profile();
        profile.height_cm = 0.0;
        assert!(matches!(calculate(&profile), Err(Error::InvalidInput(_))));

        let mut profile = create_test_profile();
        profile.age = 0;
        assert!(matches!(
            build_report(&profile, Ok(vec![])),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_report_with_fallback_schedule() {
        let report = build_report(
            &create_test_profile(),
            Err(Error::UpstreamUnavailable("connection refused".into())),
        )
        .unwrap();

        assert_eq!(report.schedule_source, ScheduleSource::Fallback);
        assert_eq!(report.schedule.len(), 3);
        assert_eq!(report.schedule[0].entry.amount_mg, 160.0);
        assert_eq!(report.beer_limit, 2);
    }

    #[test]
    fn test_report_is_idempotent() {
        let profile = create_test_profile();
        let first = build_report(&profile, Err(Error::UpstreamUnavailable("down".into())));
        let second = build_report(&profile, Err(Error::UpstreamUnavailable("down".into())));
        assert_eq!(first.unwrap(), second.unwrap());
    }
}
