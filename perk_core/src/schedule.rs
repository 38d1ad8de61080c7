//! Intake schedule reconciliation.
//!
//! Schedules normally come from an external text generator that the caller
//! talks to. This module only deals with what comes back:
//! - decoding the generator payload into raw entries
//! - coercing amounts to numbers
//! - substituting the fixed fallback when anything about the payload is off
//! - labeling each slot with its closest serving
//!
//! Amounts are advisory. Nothing here checks or forces them to add up to the
//! daily limit.

use crate::consumption::best_match;
use crate::units::round_half_up;
use crate::{
    ActivityLevel, Error, LabeledScheduleEntry, Result, ScheduleEntry, ScheduleSource,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback slots: clock time, share of the daily limit, reason
const FALLBACK_SLOTS: [(&str, f64, &str); 3] = [
    ("7:00 AM", 0.4, "Morning boost"),
    ("11:00 AM", 0.3, "Mid-morning focus"),
    ("2:00 PM", 0.3, "Post-lunch energy"),
];

/// An entry as the generator sent it, before amount coercion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawScheduleEntry {
    #[serde(default)]
    pub time: String,
    /// A JSON number or a numeric string
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub reason: String,
}

/// What the caller asks the schedule generator for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub total_mg: u32,
    pub activity_level: ActivityLevel,
}

impl ScheduleRequest {
    /// Request text for the generator
    pub fn prompt(&self) -> String {
        format!(
            "Create an optimal caffeine intake schedule for someone who can consume \
             {}mg of caffeine per day with {} activity level. Respond ONLY with a JSON \
             array of objects with 'time', 'amount' (as a number), and 'reason' fields. \
             Make sure amount values are numbers, not strings. No preamble, no \
             backticks, just the JSON array.",
            self.total_mg, self.activity_level
        )
    }
}

/// Decode a generator response.
///
/// Accepts either the bare JSON array or a message envelope whose first
/// content block carries the array as text:
///
/// ```json
/// {"content": [{"type": "text", "text": "[{\"time\": ...}]"}]}
/// ```
pub fn parse_generator_response(text: &str) -> Result<Vec<RawScheduleEntry>> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| Error::upstream(format!("response is not JSON: {e}")))?;

    if value.is_array() {
        return decode_entries(value);
    }

    let inner = value
        .get("content")
        .and_then(|c| c.get(0))
        .and_then(|block| block.get("text"))
        .and_then(Value::as_str)
        .ok_or_else(|| Error::upstream("response is neither an array nor an envelope"))?;
    let entries: Value = serde_json::from_str(inner.trim())
        .map_err(|e| Error::upstream(format!("content text is not JSON: {e}")))?;
    if !entries.is_array() {
        return Err(Error::upstream("content text is not a JSON array"));
    }
    decode_entries(entries)
}

fn decode_entries(entries: Value) -> Result<Vec<RawScheduleEntry>> {
    serde_json::from_value(entries)
        .map_err(|e| Error::upstream(format!("unexpected entry shape: {e}")))
}

/// Coerce raw entries into numeric schedule entries.
///
/// `time` and `reason` pass through unchanged.
pub fn reconcile(raw_entries: &[RawScheduleEntry]) -> Result<Vec<ScheduleEntry>> {
    raw_entries
        .iter()
        .map(|raw| {
            Ok(ScheduleEntry {
                time: raw.time.clone(),
                amount_mg: coerce_amount(&raw.amount)?,
                reason: raw.reason.clone(),
            })
        })
        .collect()
}

fn coerce_amount(amount: &Value) -> Result<f64> {
    let mg = match amount {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::upstream(format!("amount {n} is not representable")))?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>()
                    .map_err(|_| Error::upstream(format!("amount {s:?} is not numeric")))?
            }
        }
        other => return Err(Error::upstream(format!("amount {other} is not numeric"))),
    };

    if !mg.is_finite() || mg < 0.0 {
        return Err(Error::upstream(format!(
            "amount must be a non-negative number, got {mg}"
        )));
    }
    Ok(mg)
}

/// The deterministic schedule used when the generator is unavailable.
///
/// Each share is rounded on its own, so the total can drift from
/// `max_daily_mg` by a milligram or two.
pub fn fallback_schedule(max_daily_mg: u32) -> Vec<ScheduleEntry> {
    FALLBACK_SLOTS
        .iter()
        .map(|&(time, share, reason)| ScheduleEntry {
            time: time.to_string(),
            amount_mg: round_half_up(f64::from(max_daily_mg) * share),
            reason: reason.to_string(),
        })
        .collect()
}

/// Turn the caller's generator outcome into a usable schedule.
///
/// Any failure, whether from the fetch itself or from reconciling its
/// payload, is replaced by [`fallback_schedule`].
pub fn resolve(
    outcome: Result<Vec<RawScheduleEntry>>,
    max_daily_mg: u32,
) -> (Vec<ScheduleEntry>, ScheduleSource) {
    match outcome.and_then(|raw| reconcile(&raw)) {
        Ok(entries) => {
            tracing::info!("Using generated schedule with {} entries", entries.len());
            (entries, ScheduleSource::Generated)
        }
        Err(e) => {
            tracing::warn!("Schedule generation failed ({}), using fallback schedule", e);
            (fallback_schedule(max_daily_mg), ScheduleSource::Fallback)
        }
    }
}

/// Attach a serving suggestion to every entry
pub fn label(entries: Vec<ScheduleEntry>) -> Vec<LabeledScheduleEntry> {
    entries
        .into_iter()
        .map(|entry| {
            let suggestion = best_match(entry.amount_mg);
            LabeledScheduleEntry { entry, suggestion }
        })
        .collect()
}
