//! Contiguous age and weight bands.
//!
//! Bands start at the observed minimum and advance by `span + 1`, so every
//! integer between the minimum and maximum belongs to exactly one band. The
//! band of a value is found arithmetically instead of materializing the whole
//! range, which keeps partitioning linear in the number of entries.

use crate::config::WeightUpperBound;
use crate::entry::Entry;
use std::collections::BTreeMap;

/// A contiguous numeric range and the entries that fell into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// First integer of the band
    pub lower: i64,
    /// Stored upper bound (see [`BandPartitioner`] for the convention)
    pub upper: i64,
    /// Member entries in input order
    pub entries: Vec<Entry>,
}

/// Which entry attribute a partitioner reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandAttribute {
    Age,
    Weight,
}

impl BandAttribute {
    fn value(self, entry: &Entry) -> f64 {
        match self {
            BandAttribute::Age => entry.age,
            BandAttribute::Weight => entry.weight,
        }
    }
}

/// Splits entries into fixed-width bands of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandPartitioner {
    attribute: BandAttribute,
    span: u32,
    upper_offset: i64,
}

impl BandPartitioner {
    /// Age bands store `upper = lower + span`.
    pub fn for_age(span: u32) -> Self {
        Self {
            attribute: BandAttribute::Age,
            span,
            upper_offset: i64::from(span),
        }
    }

    /// Weight bands store `upper = lower + span + 1` under
    /// [`WeightUpperBound::Exclusive`] and `lower + span` otherwise.
    pub fn for_weight(span: u32, convention: WeightUpperBound) -> Self {
        let upper_offset = match convention {
            WeightUpperBound::Exclusive => i64::from(span) + 1,
            WeightUpperBound::Inclusive => i64::from(span),
        };
        Self {
            attribute: BandAttribute::Weight,
            span,
            upper_offset,
        }
    }

    /// Number of integers covered by one band
    pub fn width(&self) -> i64 {
        i64::from(self.span) + 1
    }

    /// Bounds of the band owning the integer `value`, for a range starting at `min`.
    ///
    /// Arithmetic saturates at the `i64` limits.
    pub fn bounds_for(&self, min: i64, value: i64) -> (i64, i64) {
        let width = self.width();
        let offset = value.saturating_sub(min).div_euclid(width).saturating_mul(width);
        let lower = min.saturating_add(offset);
        (lower, lower.saturating_add(self.upper_offset))
    }

    /// Bounds of every band between `min` and `max`, in ascending order,
    /// including bands that would receive no entries.
    pub fn all_bounds(&self, min: i64, max: i64) -> Vec<(i64, i64)> {
        let mut bounds = Vec::new();
        let mut lower = min;
        while lower <= max {
            bounds.push((lower, lower.saturating_add(self.upper_offset)));
            match lower.checked_add(self.width()) {
                Some(next) => lower = next,
                None => break,
            }
        }
        bounds
    }

    /// Bucket entries by the floor of their attribute.
    ///
    /// Bands without members are dropped. Entries whose value lies outside
    /// `[min, max]` are skipped.
    pub fn partition(&self, min: i64, max: i64, entries: &[Entry]) -> Vec<Band> {
        let mut bands: BTreeMap<i64, Band> = BTreeMap::new();

        for entry in entries {
            let value = self.attribute.value(entry).floor() as i64;
            if value < min || value > max {
                log::debug!(
                    "{:?} {} of entry {} outside [{}, {}]",
                    self.attribute,
                    value,
                    entry.id,
                    min,
                    max
                );
                continue;
            }

            let (lower, upper) = self.bounds_for(min, value);
            bands
                .entry(lower)
                .or_insert_with(|| Band {
                    lower,
                    upper,
                    entries: Vec::new(),
                })
                .entries
                .push(entry.clone());
        }

        bands.into_values().collect()
    }
}
