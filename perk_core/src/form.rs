//! Text form input, parsed once into a validated profile.
//!
//! Numeric fields arrive as text. Nothing downstream sees a profile until
//! every field has parsed and passed its range checks.

use crate::units::to_metric;
use crate::{
    ActivityLevel, BloodPressure, Error, PersonProfile, Result, Sex, Tolerance, UnitSystem,
};

/// Raw profile fields as typed by the user
#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub blood_pressure: String,
    pub bpm: String,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub tolerance: Tolerance,
    pub unknown_bp: bool,
    pub unknown_hr: bool,
    pub unit_system: UnitSystem,
}

impl ProfileForm {
    /// Parse and validate every field.
    ///
    /// A vital flagged unknown is left as `None` for the estimator; its text
    /// is ignored. An unflagged vital must parse.
    pub fn parse(&self) -> Result<PersonProfile> {
        let age: u32 = parse_field("age", &self.age)?;
        if age == 0 {
            return Err(Error::invalid("age must be greater than zero"));
        }

        let weight: f64 = parse_field("weight", &self.weight)?;
        let height: f64 = parse_field("height", &self.height)?;
        let (weight_kg, height_cm) = to_metric(weight, height, self.unit_system)?;

        let measured_bp = if self.unknown_bp {
            None
        } else {
            Some(self.blood_pressure.parse::<BloodPressure>()?)
        };

        let measured_hr = if self.unknown_hr {
            None
        } else {
            Some(parse_field::<i32>("resting heart rate", &self.bpm)?)
        };

        let profile = PersonProfile {
            age,
            weight_kg,
            height_cm,
            sex: self.sex,
            activity_level: self.activity_level,
            tolerance: self.tolerance,
            measured_bp,
            measured_hr,
        };
        tracing::debug!("Parsed profile: {:?}", profile);
        Ok(profile)
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, text: &str) -> Result<T> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::invalid(format!("{field} is required")));
    }
    text.parse()
        .map_err(|_| Error::invalid(format!("{field} is not a valid number: {text:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProfileForm {
        ProfileForm {
            age: "30".into(),
            weight: "70".into(),
            height: "178".into(),
            blood_pressure: "120/80".into(),
            bpm: "70".into(),
            ..ProfileForm::default()
        }
    }

    #[test]
    fn test_parse_complete_form() {
        let profile = form().parse().unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.height_cm, 178.0);
        assert_eq!(
            profile.measured_bp,
            Some(BloodPressure { systolic: 120, diastolic: 80 })
        );
        assert_eq!(profile.measured_hr, Some(70));
    }

    #[test]
    fn test_unknown_flags_ignore_text() {
        let profile = ProfileForm {
            blood_pressure: "garbage".into(),
            bpm: String::new(),
            unknown_bp: true,
            unknown_hr: true,
            ..form()
        }
        .parse()
        .unwrap();
        assert_eq!(profile.measured_bp, None);
        assert_eq!(profile.measured_hr, None);
    }

    #[test]
    fn test_missing_vitals_without_flag_are_rejected() {
        let no_bp = ProfileForm {
            blood_pressure: String::new(),
            ..form()
        };
        assert!(matches!(no_bp.parse(), Err(Error::InvalidInput(_))));

        let no_hr = ProfileForm {
            bpm: " ".into(),
            ..form()
        };
        assert!(matches!(no_hr.parse(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        for (age, weight, height) in [
            ("0", "70", "178"),
            ("-5", "70", "178"),
            ("thirty", "70", "178"),
            ("30", "0", "178"),
            ("30", "70", "abc"),
            ("30", "", "178"),
        ] {
            let f = ProfileForm {
                age: age.into(),
                weight: weight.into(),
                height: height.into(),
                ..form()
            };
            assert!(
                matches!(f.parse(), Err(Error::InvalidInput(_))),
                "{age}/{weight}/{height} should be rejected"
            );
        }
    }

    #[test]
    fn test_imperial_units_are_converted() {
        let profile = ProfileForm {
            weight: "154".into(),
            height: "70".into(),
            unit_system: UnitSystem::Imperial,
            ..form()
        }
        .parse()
        .unwrap();
        assert!((profile.weight_kg - 69.853168).abs() < 1e-9);
        assert!((profile.height_cm - 177.8).abs() < 1e-9);
    }
}
