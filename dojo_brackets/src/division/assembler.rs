//! Final division assembly.
//!
//! Belt/weight groups are intersected with age bands and gender. Each entry is
//! looked up by its exact age; entries whose age matches no band (only
//! possible for non-integral ages) are left out of every division.

use super::bands::Band;
use super::combiner::BeltWeightGroup;
use super::models::Division;
use crate::config::IdStrategy;
use crate::constants::{DEFAULT_NUM_ROUNDS, DEFAULT_ROUND_DURATION_SECS};
use std::collections::HashMap;

/// Key identifying one division cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DivisionKey<'a> {
    min_weight: i64,
    belt: &'a str,
    gender: &'a str,
    min_age: i64,
}

impl DivisionKey<'_> {
    fn stable_id_source(&self) -> String {
        format!(
            "division:{}-{}-{}-{}",
            self.min_weight, self.belt, self.gender, self.min_age
        )
    }
}

/// Builds divisions from belt/weight groups and age bands.
#[derive(Debug, Clone, Copy)]
pub struct DivisionAssembler {
    id_strategy: IdStrategy,
}

impl DivisionAssembler {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self { id_strategy }
    }

    /// Assemble divisions in first-creation order.
    pub fn assemble(&self, groups: &[BeltWeightGroup], age_bands: &[Band]) -> Vec<Division> {
        let mut age_lookup: HashMap<i64, &Band> = HashMap::new();
        for band in age_bands {
            for age in band.lower..=band.upper {
                age_lookup.insert(age, band);
            }
        }

        let mut divisions: Vec<Division> = Vec::new();
        let mut index: HashMap<DivisionKey<'_>, usize> = HashMap::new();
        let mut skipped = 0usize;

        for group in groups {
            for entry in &group.entries {
                let Some(age_band) = exact_age(entry.age).and_then(|age| age_lookup.get(&age))
                else {
                    log::debug!(
                        "Entry {} with age {} matches no age band, skipping",
                        entry.id,
                        entry.age
                    );
                    skipped += 1;
                    continue;
                };

                let key = DivisionKey {
                    min_weight: group.min_weight,
                    belt: entry.belt.as_str(),
                    gender: entry.gender.as_str(),
                    min_age: age_band.lower,
                };

                let slot = match index.get(&key) {
                    Some(&slot) => slot,
                    None => {
                        divisions.push(Division {
                            id: self.id_strategy.generate(&key.stable_id_source()),
                            belt: entry.belt.clone(),
                            gender: entry.gender.clone(),
                            min_age: age_band.lower,
                            max_age: age_band.upper,
                            min_weight: group.min_weight,
                            max_weight: group.max_weight,
                            num_rounds: DEFAULT_NUM_ROUNDS,
                            duration: DEFAULT_ROUND_DURATION_SECS,
                            entries: Vec::new(),
                            entry_ids: Vec::new(),
                        });
                        index.insert(key, divisions.len() - 1);
                        divisions.len() - 1
                    }
                };
                divisions[slot].entries.push(entry.clone());
            }
        }

        if skipped > 0 {
            log::debug!("{} entries fell outside every age band", skipped);
        }

        divisions.retain(|division| !division.entries.is_empty());
        for division in &mut divisions {
            division.entry_ids = division.entries.iter().map(|e| e.id.clone()).collect();
        }
        divisions
    }
}

/// Integral ages only; anything else has no exact band entry.
fn exact_age(age: f64) -> Option<i64> {
    (age.fract() == 0.0).then_some(age as i64)
}
