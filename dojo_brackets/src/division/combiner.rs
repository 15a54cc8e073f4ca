//! Belt refinement of weight bands.

use super::bands::Band;
use crate::entry::Entry;
use std::collections::HashMap;

/// Entries sharing one weight band and one belt. May span any age.
#[derive(Debug, Clone, PartialEq)]
pub struct BeltWeightGroup {
    pub belt: String,
    pub min_weight: i64,
    pub max_weight: i64,
    pub entries: Vec<Entry>,
}

/// Regroup every weight band by belt, keyed by `(band lower bound, belt)`.
///
/// Groups come out in weight-band order, then first-seen belt order.
pub fn split_by_belt(weight_bands: &[Band]) -> Vec<BeltWeightGroup> {
    let mut groups: Vec<BeltWeightGroup> = Vec::new();
    let mut index: HashMap<(i64, &str), usize> = HashMap::new();

    for band in weight_bands {
        for entry in &band.entries {
            let slot = *index
                .entry((band.lower, entry.belt.as_str()))
                .or_insert_with(|| {
                    groups.push(BeltWeightGroup {
                        belt: entry.belt.clone(),
                        min_weight: band.lower,
                        max_weight: band.upper,
                        entries: Vec::new(),
                    });
                    groups.len() - 1
                });
            groups[slot].entries.push(entry.clone());
        }
    }

    groups.retain(|group| !group.entries.is_empty());
    groups
}
