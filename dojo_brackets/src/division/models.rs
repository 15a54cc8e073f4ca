//! Division data models.

use super::errors::{DivisionError, DivisionResult};
use crate::config::WeightUpperBound;
use crate::constants::{
    DIVISION_AGE_MAX, DIVISION_AGE_MIN, DIVISION_DURATION_MAX, DIVISION_DURATION_MIN,
    DIVISION_NUM_ROUNDS_MAX, DIVISION_NUM_ROUNDS_MIN, DIVISION_WEIGHT_MAX, DIVISION_WEIGHT_MIN,
};
use crate::entry::{Entry, EntryId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Division ID type
pub type DivisionId = Uuid;

/// A belt/gender/age-band/weight-band cell of competitors.
///
/// Divisions are recomputed from entries on every run. Editing one produces a
/// new value through [`Division::with_timing`], [`Division::with_bounds`] or
/// [`Division::with_category`]. Edits never move entries in or out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: DivisionId,
    pub belt: String,
    pub gender: String,
    /// Inclusive lower age bound
    pub min_age: i64,
    /// Inclusive upper age bound
    pub max_age: i64,
    /// Lower weight bound
    pub min_weight: i64,
    /// Upper weight bound, see [`crate::WeightUpperBound`]
    pub max_weight: i64,
    /// Rounds per match
    pub num_rounds: u32,
    /// Seconds per round
    pub duration: u32,
    /// Member entries in assembly order
    pub entries: Vec<Entry>,
    /// Member entry ids, derived from `entries`
    pub entry_ids: Vec<EntryId>,
}

impl Division {
    /// Return a copy with new round count and round duration.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::InvalidTiming`] when `num_rounds` is outside
    /// 1..=5 or `duration` is outside 1..=180 seconds.
    pub fn with_timing(&self, num_rounds: u32, duration: u32) -> DivisionResult<Self> {
        if !(DIVISION_NUM_ROUNDS_MIN..=DIVISION_NUM_ROUNDS_MAX).contains(&num_rounds) {
            return Err(DivisionError::InvalidTiming {
                field: "num_rounds",
                min: DIVISION_NUM_ROUNDS_MIN,
                max: DIVISION_NUM_ROUNDS_MAX,
                actual: num_rounds,
            });
        }

        if !(DIVISION_DURATION_MIN..=DIVISION_DURATION_MAX).contains(&duration) {
            return Err(DivisionError::InvalidTiming {
                field: "duration",
                min: DIVISION_DURATION_MIN,
                max: DIVISION_DURATION_MAX,
                actual: duration,
            });
        }

        Ok(Self {
            num_rounds,
            duration,
            ..self.clone()
        })
    }

    /// Return a copy with new age and weight bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::InvalidBound`] when an age is outside 1..=99 or
    /// a weight outside 1..=200, and [`DivisionError::InvertedRange`] when a
    /// minimum exceeds its maximum.
    pub fn with_bounds(
        &self,
        min_age: i64,
        max_age: i64,
        min_weight: i64,
        max_weight: i64,
    ) -> DivisionResult<Self> {
        check_bound("min_age", min_age, DIVISION_AGE_MIN, DIVISION_AGE_MAX)?;
        check_bound("max_age", max_age, DIVISION_AGE_MIN, DIVISION_AGE_MAX)?;
        check_bound("min_weight", min_weight, DIVISION_WEIGHT_MIN, DIVISION_WEIGHT_MAX)?;
        check_bound("max_weight", max_weight, DIVISION_WEIGHT_MIN, DIVISION_WEIGHT_MAX)?;

        if min_age > max_age {
            return Err(DivisionError::InvertedRange {
                field: "age",
                lower: min_age,
                upper: max_age,
            });
        }
        if min_weight > max_weight {
            return Err(DivisionError::InvertedRange {
                field: "weight",
                lower: min_weight,
                upper: max_weight,
            });
        }

        Ok(Self {
            min_age,
            max_age,
            min_weight,
            max_weight,
            ..self.clone()
        })
    }

    /// Return a copy with a new belt and gender, both trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionError::MissingField`] when either is blank.
    pub fn with_category(&self, belt: &str, gender: &str) -> DivisionResult<Self> {
        let belt = belt.trim();
        if belt.is_empty() {
            return Err(DivisionError::MissingField("belt"));
        }
        let gender = gender.trim();
        if gender.is_empty() {
            return Err(DivisionError::MissingField("gender"));
        }

        Ok(Self {
            belt: belt.to_string(),
            gender: gender.to_string(),
            ..self.clone()
        })
    }

    /// Display title, e.g. `Male 10-12y · Yellow Belt · 30-33kg`
    pub fn title(&self) -> String {
        let gender = if self.gender.trim().is_empty() {
            "Unknown"
        } else {
            self.gender.trim()
        };
        format!(
            "{} {}-{}y · {} Belt · {}-{}kg",
            gender, self.min_age, self.max_age, self.belt, self.min_weight, self.max_weight
        )
    }

    /// Number of member entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the division has no members
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry satisfies this division's age, weight, belt and gender.
    ///
    /// `convention` must be the one the division was assembled with: under
    /// [`WeightUpperBound::Exclusive`] `max_weight` is a strict ceiling, under
    /// [`WeightUpperBound::Inclusive`] it is the last admitted whole kilogram.
    pub fn admits(&self, entry: &Entry, convention: WeightUpperBound) -> bool {
        let weight_fits = match convention {
            WeightUpperBound::Exclusive => {
                entry.weight >= self.min_weight as f64 && entry.weight < self.max_weight as f64
            }
            WeightUpperBound::Inclusive => {
                let kilograms = entry.weight.floor() as i64;
                kilograms >= self.min_weight && kilograms <= self.max_weight
            }
        };
        entry.belt == self.belt
            && entry.gender == self.gender
            && entry.age >= self.min_age as f64
            && entry.age <= self.max_age as f64
            && weight_fits
    }
}

fn check_bound(field: &'static str, actual: i64, min: i64, max: i64) -> DivisionResult<()> {
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(DivisionError::InvalidBound {
            field,
            min,
            max,
            actual,
        })
    }
}
