//! Competitor entry records.

use crate::constants::{
    ENTRY_AGE_MAX, ENTRY_AGE_MIN, ENTRY_NAME_MAX_LENGTH, ENTRY_WEIGHT_MAX, ENTRY_WEIGHT_MIN,
    MAX_ATTRIBUTE_VALUE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Entry ID type
pub type EntryId = String;

/// A competitor registered for a tournament.
///
/// Entries are owned by the entry source; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique entry identifier
    pub id: EntryId,
    /// Competitor display name
    pub name: String,
    /// Age in years
    pub age: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Belt label (e.g. "Yellow")
    pub belt: String,
    /// Gender label, may be empty when unknown
    #[serde(default)]
    pub gender: String,
    /// Club the competitor represents
    #[serde(default)]
    pub club: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: f64,
        weight: f64,
        belt: impl Into<String>,
        gender: impl Into<String>,
        club: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            weight,
            belt: belt.into(),
            gender: gender.into(),
            club: club.into(),
        }
    }

    /// Structural check applied before partitioning.
    ///
    /// Returns a description of the first violation, if any. Values above
    /// [`MAX_ATTRIBUTE_VALUE`] are violations too.
    pub fn shape_violation(&self) -> Option<String> {
        if !self.age.is_finite() {
            return Some(format!("age {} is not a finite number", self.age));
        }
        if self.age < 0.0 {
            return Some(format!("age {} is negative", self.age));
        }
        if self.age > MAX_ATTRIBUTE_VALUE {
            return Some(format!("age {} exceeds {}", self.age, MAX_ATTRIBUTE_VALUE));
        }
        if !self.weight.is_finite() {
            return Some(format!("weight {} is not a finite number", self.weight));
        }
        if self.weight <= 0.0 {
            return Some(format!("weight {} must be positive", self.weight));
        }
        if self.weight > MAX_ATTRIBUTE_VALUE {
            return Some(format!(
                "weight {} exceeds {}",
                self.weight, MAX_ATTRIBUTE_VALUE
            ));
        }
        None
    }
}

/// Registration limits enforced by the entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryLimits {
    pub age_min: f64,
    pub age_max: f64,
    pub weight_min: f64,
    pub weight_max: f64,
    pub name_max_length: usize,
}

impl Default for EntryLimits {
    fn default() -> Self {
        Self {
            age_min: ENTRY_AGE_MIN,
            age_max: ENTRY_AGE_MAX,
            weight_min: ENTRY_WEIGHT_MIN,
            weight_max: ENTRY_WEIGHT_MAX,
            name_max_length: ENTRY_NAME_MAX_LENGTH,
        }
    }
}

impl EntryLimits {
    /// Check an entry against the registration limits.
    ///
    /// # Returns
    ///
    /// * `Vec<String>` - One message per violated limit, empty when the entry is acceptable
    pub fn check(&self, entry: &Entry) -> Vec<String> {
        let mut problems = Vec::new();

        if entry.name.trim().is_empty() {
            problems.push("name is required".to_string());
        } else if entry.name.chars().count() > self.name_max_length {
            problems.push(format!(
                "name must be at most {} characters",
                self.name_max_length
            ));
        }

        if !(self.age_min..=self.age_max).contains(&entry.age) {
            problems.push(format!(
                "age must be between {} and {}",
                self.age_min, self.age_max
            ));
        }

        if !(self.weight_min..=self.weight_max).contains(&entry.weight) {
            problems.push(format!(
                "weight must be between {} and {}",
                self.weight_min, self.weight_max
            ));
        }

        if entry.belt.trim().is_empty() {
            problems.push("belt is required".to_string());
        }

        problems
    }
}

/// Distinct non-empty values of one entry field, in first-seen order.
///
/// Used to populate belt and club filter options.
pub fn unique_values<'a, F>(entries: &'a [Entry], field: F) -> Vec<String>
where
    F: Fn(&'a Entry) -> &'a str,
{
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
