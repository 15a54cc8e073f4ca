//! Division generation: stages one to five of the pipeline.
//!
//! Entries are scanned for their age and weight extremes, split into age
//! bands and weight bands, the weight bands are refined by belt, and finally
//! belt/weight groups are intersected with age bands and gender.
//!
//! ## Example
//!
//! ```
//! use dojo_brackets::division::DivisionGenerator;
//! use dojo_brackets::{EngineConfig, Entry};
//!
//! let entries = vec![
//!     Entry::new("1", "Ana", 10.0, 30.0, "Yellow", "Female", "Tigers"),
//!     Entry::new("2", "Bea", 11.0, 31.0, "Yellow", "Female", "Cranes"),
//! ];
//!
//! let generator = DivisionGenerator::new(EngineConfig::default());
//! let divisions = generator.generate(&entries).unwrap();
//! assert_eq!(divisions.len(), 1);
//! assert_eq!(divisions[0].entry_ids, vec!["1", "2"]);
//! ```

pub mod assembler;
pub mod bands;
pub mod boundaries;
pub mod combiner;
pub mod errors;
pub mod models;

pub use assembler::DivisionAssembler;
pub use bands::{Band, BandAttribute, BandPartitioner};
pub use boundaries::Boundaries;
pub use combiner::{BeltWeightGroup, split_by_belt};
pub use errors::{DivisionError, DivisionResult};
pub use models::{Division, DivisionId};

use crate::config::EngineConfig;
use crate::entry::Entry;
use std::collections::HashSet;

/// Runs the division stages with one configuration.
#[derive(Debug, Clone, Copy)]
pub struct DivisionGenerator {
    config: EngineConfig,
}

impl DivisionGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Partition entries into divisions.
    ///
    /// An empty entry set yields no divisions.
    ///
    /// # Errors
    ///
    /// Fails before any partitioning if the configuration is invalid, an
    /// entry has a non-finite or negative age, a non-positive weight, an age or
    /// weight above [`crate::constants::MAX_ATTRIBUTE_VALUE`], or two entries
    /// share an id.
    pub fn generate(&self, entries: &[Entry]) -> DivisionResult<Vec<Division>> {
        self.config.validate()?;
        validate_entries(entries)?;

        let Some(bounds) = Boundaries::scan(entries) else {
            log::debug!("No entries, no divisions");
            return Ok(Vec::new());
        };

        let partition = self.config.partition;
        let age_bands = BandPartitioner::for_age(partition.age_span).partition(
            bounds.lowest_age,
            bounds.highest_age,
            entries,
        );
        let weight_bands =
            BandPartitioner::for_weight(partition.weight_span, partition.weight_upper).partition(
                bounds.lowest_weight,
                bounds.highest_weight,
                entries,
            );
        log::debug!(
            "{} age bands, {} weight bands",
            age_bands.len(),
            weight_bands.len()
        );

        let groups = split_by_belt(&weight_bands);
        let divisions =
            DivisionAssembler::new(self.config.id_strategy).assemble(&groups, &age_bands);

        let placed: usize = divisions.iter().map(Division::len).sum();
        log::info!(
            "Created {} divisions for {} of {} entries",
            divisions.len(),
            placed,
            entries.len()
        );

        Ok(divisions)
    }
}

/// Fail fast on entries the partitioners cannot handle.
pub fn validate_entries(entries: &[Entry]) -> DivisionResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if let Some(reason) = entry.shape_violation() {
            return Err(DivisionError::InvalidEntry {
                id: entry.id.clone(),
                reason,
            });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(DivisionError::DuplicateEntryId(entry.id.clone()));
        }
    }
    Ok(())
}
