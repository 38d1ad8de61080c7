#![forbid(unsafe_code)]

//! Core domain model and calculations for the Perk caffeine planner.
//!
//! This crate provides:
//! - Domain types (profile, vitals, dosage results, schedule entries)
//! - Profile form parsing and unit conversion
//! - Vital-sign estimators and the daily limit calculator
//! - Serving matching and schedule reconciliation
//! - The beer limit estimator

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod units;
pub mod form;
pub mod vitals;
pub mod dosage;
pub mod consumption;
pub mod schedule;
pub mod recreational;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use form::ProfileForm;
pub use consumption::{best_match, to_unit_counts};
pub use schedule::{fallback_schedule, RawScheduleEntry, ScheduleRequest};
pub use recreational::compute_beer_limit;
pub use engine::{build_report, calculate};
