//! Core domain types for the caffeine limit system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Profile enums (sex, activity, tolerance, unit system)
//! - Vital readings and whether they were measured or estimated
//! - Dosage results and consumption units
//! - Schedule entries, raw and labeled

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex, used by the BP/HR estimators and the beer limit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

/// Self-reported activity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

/// Habitual caffeine consumption
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    Low,
    #[default]
    Moderate,
    High,
}

/// Unit system the weight/height inputs were entered in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(Error::invalid(format!("unknown sex: {other:?}"))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(Error::invalid(format!("unknown activity level: {other:?}"))),
        }
    }
}

impl FromStr for Tolerance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Tolerance::Low),
            "moderate" => Ok(Tolerance::Moderate),
            "high" => Ok(Tolerance::High),
            other => Err(Error::invalid(format!("unknown tolerance: {other:?}"))),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(Error::invalid(format!("unknown unit system: {other:?}"))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Vitals
// ============================================================================

/// A blood-pressure reading, written `"systolic/diastolic"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

impl FromStr for BloodPressure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('/').map(str::trim);
        let systolic = parts.next().and_then(|p| p.parse::<i32>().ok());
        let diastolic = parts.next().and_then(|p| p.parse::<i32>().ok());

        match (systolic, diastolic, parts.next()) {
            (Some(systolic), Some(diastolic), None) => Ok(BloodPressure {
                systolic,
                diastolic,
            }),
            _ => Err(Error::invalid(format!(
                "blood pressure must look like \"120/80\", got {s:?}"
            ))),
        }
    }
}

impl From<BloodPressure> for String {
    fn from(bp: BloodPressure) -> Self {
        bp.to_string()
    }
}

impl TryFrom<String> for BloodPressure {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Whether a vital sign came from the user or from an estimator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Reading<T> {
    Measured(T),
    Estimated(T),
}

impl<T: Copy> Reading<T> {
    /// The value regardless of where it came from
    pub fn value(&self) -> T {
        match self {
            Reading::Measured(v) | Reading::Estimated(v) => *v,
        }
    }

    /// The value only if it was estimated
    pub fn estimated(&self) -> Option<T> {
        match self {
            Reading::Estimated(v) => Some(*v),
            Reading::Measured(_) => None,
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Validated physiological inputs for one calculation.
///
/// Weight and height are always metric here; conversion happens while the
/// form is parsed. A `None` vital means "unknown" and will be estimated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub tolerance: Tolerance,
    pub measured_bp: Option<BloodPressure>,
    pub measured_hr: Option<i32>,
}

impl PersonProfile {
    /// Check the invariants every downstream formula relies on
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(Error::invalid("age must be greater than zero"));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(Error::invalid(format!(
                "weight must be a positive number, got {}",
                self.weight_kg
            )));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(Error::invalid(format!(
                "height must be a positive number, got {}",
                self.height_cm
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Dosage Results
// ============================================================================

/// The three discrete caffeine delivery forms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionUnit {
    Coffee,
    EnergyDrink,
    Pill,
}

impl ConsumptionUnit {
    /// Priority order used for tie-breaks and alternative listings
    pub const ALL: [ConsumptionUnit; 3] = [
        ConsumptionUnit::Coffee,
        ConsumptionUnit::EnergyDrink,
        ConsumptionUnit::Pill,
    ];

    /// Caffeine per serving in milligrams
    pub fn mg(self) -> u32 {
        match self {
            ConsumptionUnit::Coffee => 95,
            ConsumptionUnit::EnergyDrink => 180,
            ConsumptionUnit::Pill => 200,
        }
    }

    /// Bare unit name, without pluralization
    pub fn name(self) -> &'static str {
        match self {
            ConsumptionUnit::Coffee => "coffee",
            ConsumptionUnit::EnergyDrink => "energy drink",
            ConsumptionUnit::Pill => "pill",
        }
    }

    /// Display label with pluralization, e.g. "2 cups coffee"
    pub fn label(self, count: u32) -> String {
        let plural = if count != 1 { "s" } else { "" };
        match self {
            ConsumptionUnit::Coffee => format!("{count} cup{plural} coffee"),
            ConsumptionUnit::EnergyDrink => format!("{count} energy drink{plural}"),
            ConsumptionUnit::Pill => format!("{count} pill{plural}"),
        }
    }
}

/// Whole servings that fit in a budget, one framing per unit.
///
/// The three counts are alternatives, not parts of a sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCounts {
    pub coffee_cups: u32,
    pub energy_drinks: u32,
    pub pills: u32,
}

/// Closest real-world serving for an amount
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMatch {
    pub unit: ConsumptionUnit,
    pub count: u32,
    /// `"<count> <unit>"` for the other units with a non-zero count
    pub alternatives: Vec<String>,
}

impl BestMatch {
    /// Pluralized label for the chosen unit
    pub fn label(&self) -> String {
        self.unit.label(self.count)
    }
}

/// Result of one dosage calculation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DosageResult {
    pub max_daily_mg: u32,
    pub unit_counts: UnitCounts,
    pub blood_pressure: Reading<BloodPressure>,
    pub heart_rate: Reading<i32>,
}

impl DosageResult {
    /// The blood pressure used, if it had to be estimated
    pub fn estimated_bp(&self) -> Option<BloodPressure> {
        self.blood_pressure.estimated()
    }

    /// The resting heart rate used, if it had to be estimated
    pub fn estimated_hr(&self) -> Option<i32> {
        self.heart_rate.estimated()
    }
}

// ============================================================================
// Schedule Types
// ============================================================================

/// One time slot of an intake plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub amount_mg: f64,
    pub reason: String,
}

/// A schedule entry plus the serving suggestion shown next to it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledScheduleEntry {
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    pub suggestion: BestMatch,
}

/// Where the schedule in a report came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleSource {
    Generated,
    Fallback,
}

// ============================================================================
// Report
// ============================================================================

/// Everything computed for one profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub dosage: DosageResult,
    pub schedule: Vec<LabeledScheduleEntry>,
    pub schedule_source: ScheduleSource,
    pub beer_limit: u32,
}
