//! Age and weight extremes of an entry set.

use crate::entry::Entry;

/// Integer extremes of age and weight across a set of entries.
///
/// Lows are floored and highs are ceiled, so every raw value lies inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub lowest_age: i64,
    pub highest_age: i64,
    pub lowest_weight: i64,
    pub highest_weight: i64,
}

impl Boundaries {
    /// Scan entries once.
    ///
    /// Returns `None` for an empty set, which ends the pipeline with no divisions.
    pub fn scan(entries: &[Entry]) -> Option<Self> {
        let first = entries.first()?;
        let mut min_age = first.age;
        let mut max_age = first.age;
        let mut min_weight = first.weight;
        let mut max_weight = first.weight;

        for entry in &entries[1..] {
            min_age = min_age.min(entry.age);
            max_age = max_age.max(entry.age);
            min_weight = min_weight.min(entry.weight);
            max_weight = max_weight.max(entry.weight);
        }

        Some(Self {
            lowest_age: min_age.floor() as i64,
            highest_age: max_age.ceil() as i64,
            lowest_weight: min_weight.floor() as i64,
            highest_weight: max_weight.ceil() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(age: f64, weight: f64) -> Entry {
        Entry::new("id", "name", age, weight, "White", "", "")
    }

    #[test]
    fn test_empty_has_no_boundaries() {
        assert!(Boundaries::scan(&[]).is_none());
    }

    #[test]
    fn test_floor_and_ceil() {
        let b = Boundaries::scan(&[entry(10.4, 30.2), entry(12.6, 41.9)]).unwrap();
        assert_eq!(b.lowest_age, 10);
        assert_eq!(b.highest_age, 13);
        assert_eq!(b.lowest_weight, 30);
        assert_eq!(b.highest_weight, 42);
    }

    #[test]
    fn test_single_entry() {
        let b = Boundaries::scan(&[entry(8.0, 25.0)]).unwrap();
        assert_eq!((b.lowest_age, b.highest_age), (8, 8));
        assert_eq!((b.lowest_weight, b.highest_weight), (25, 25));
    }
}
