//! Unit conversion into the canonical metric representation.
//!
//! Everything downstream of the form works in kilograms and centimetres.

use crate::{Error, Result, UnitSystem};

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert a weight/height pair to `(weight_kg, height_cm)`.
///
/// Imperial inputs are pounds and inches. Both values must be finite and
/// positive; height ends up as a denominator in the BMI estimate.
pub fn to_metric(weight: f64, height: f64, system: UnitSystem) -> Result<(f64, f64)> {
    ensure_positive("weight", weight)?;
    ensure_positive("height", height)?;

    let converted = match system {
        UnitSystem::Metric => (weight, height),
        UnitSystem::Imperial => (weight * KG_PER_LB, height * CM_PER_INCH),
    };

    tracing::debug!(
        "Converted {:?} weight={} height={} to {:.2} kg / {:.2} cm",
        system,
        weight,
        height,
        converted.0,
        converted.1
    );
    Ok(converted)
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

/// Round to the nearest integer, halves towards positive infinity.
///
/// `f64::round` sends -2.5 to -3; the formulas here expect -2.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_passthrough() {
        let (kg, cm) = to_metric(70.0, 178.0, UnitSystem::Metric).unwrap();
        assert_eq!(kg, 70.0);
        assert_eq!(cm, 178.0);
    }

    #[test]
    fn test_imperial_conversion() {
        let (kg, cm) = to_metric(154.0, 70.0, UnitSystem::Imperial).unwrap();
        assert!((kg - 69.853168).abs() < 1e-9);
        assert!((cm - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            to_metric(0.0, 178.0, UnitSystem::Metric),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            to_metric(70.0, -1.0, UnitSystem::Imperial),
            Err(Error::InvalidInput(_))
        ));
        assert!(to_metric(f64::NAN, 178.0, UnitSystem::Metric).is_err());
        assert!(to_metric(70.0, f64::INFINITY, UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(76.5), 77.0);
        assert_eq!(round_half_up(67.2), 67.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
    }
}
