//! Mapping milligram amounts onto real-world servings.

use crate::units::round_half_up;
use crate::{BestMatch, ConsumptionUnit, UnitCounts};

/// Whole servings of each unit that fit in `mg`.
///
/// Each count is an independent floor division.
pub fn to_unit_counts(mg: u32) -> UnitCounts {
    UnitCounts {
        coffee_cups: mg / ConsumptionUnit::Coffee.mg(),
        energy_drinks: mg / ConsumptionUnit::EnergyDrink.mg(),
        pills: mg / ConsumptionUnit::Pill.mg(),
    }
}

/// Pick the serving whose rounded count lands closest to `mg`.
///
/// Candidates are tried in the order coffee, energy drink, pill:
/// - coffee wins if its deviation is no worse than both others and it rounds
///   to at least one cup
/// - an energy drink wins if it is no worse than the pill and rounds to at
///   least one can
/// - otherwise pills, whose count never drops below one
///
/// Equal deviations therefore favour coffee, then energy drinks.
pub fn best_match(mg: f64) -> BestMatch {
    let counts: Vec<(ConsumptionUnit, u32, f64)> = ConsumptionUnit::ALL
        .iter()
        .map(|&unit| {
            let size = f64::from(unit.mg());
            let mut count = round_half_up(mg / size).max(0.0) as u32;
            if unit == ConsumptionUnit::Pill {
                count = count.max(1);
            }
            let deviation = (f64::from(count) * size - mg).abs();
            (unit, count, deviation)
        })
        .collect();

    let (_, cups, coffee_dev) = counts[0];
    let (_, drinks, drink_dev) = counts[1];
    let (_, pills, pill_dev) = counts[2];

    let (unit, count) = if coffee_dev <= drink_dev && coffee_dev <= pill_dev && cups > 0 {
        (ConsumptionUnit::Coffee, cups)
    } else if drink_dev <= pill_dev && drinks > 0 {
        (ConsumptionUnit::EnergyDrink, drinks)
    } else {
        (ConsumptionUnit::Pill, pills)
    };

    let alternatives = counts
        .iter()
        .filter(|(other, n, _)| *other != unit && *n > 0)
        .map(|(other, n, _)| format!("{} {}", n, other.name()))
        .collect();

    BestMatch {
        unit,
        count,
        alternatives,
    }
}
