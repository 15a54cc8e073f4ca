//! Single-elimination bracket construction.
//!
//! Leaves are formed from consecutive pairs of entries in assembly order.
//! Parent matches are then added by greedy bottom-up pairing: each pass takes
//! every match still lacking a next match, in id order, and pairs them two at
//! a time. An odd match out waits for the following pass. This is not a
//! seeded bracket; byes are not spread out.

use super::models::{Match, MatchId, Participant};
use crate::config::IdStrategy;
use crate::division::Division;
use crate::entry::Entry;

/// Builds the match tree of one division.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketBuilder {
    id_strategy: IdStrategy,
}

impl BracketBuilder {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self { id_strategy }
    }

    /// Build the flat match list: leaves first, then generated rounds.
    ///
    /// A division without entries has no matches.
    pub fn build(&self, division: &Division) -> Vec<Match> {
        let leaf_count = division.entries.len().div_ceil(2);
        let mut matches = Vec::with_capacity(leaf_count.saturating_mul(2));

        for pair in division.entries.chunks(2) {
            let mut leaf = Match::new(matches.len(), 1);
            leaf.participants = pair
                .iter()
                .map(|entry| self.participant(division, entry))
                .collect();
            matches.push(leaf);
        }

        link_rounds(&mut matches);

        log::debug!(
            "Division {}: {} entries, {} leaves, {} matches",
            division.id,
            division.entries.len(),
            leaf_count,
            matches.len()
        );
        matches
    }

    fn participant(&self, division: &Division, entry: &Entry) -> Participant {
        let key = format!("participant:{}:{}", division.id, entry.id);
        Participant {
            id: self.id_strategy.generate(&key).to_string(),
            entry_id: entry.id.clone(),
            name: entry.name.clone(),
            club: entry.club.clone(),
            is_winner: false,
            status: None,
            result_text: None,
        }
    }
}

/// Pair unlinked matches into parents until a single final remains.
fn link_rounds(matches: &mut Vec<Match>) {
    loop {
        let dangling: Vec<MatchId> = matches
            .iter()
            .filter(|m| m.next_match_id.is_none())
            .map(|m| m.id)
            .collect();
        if dangling.len() <= 1 {
            break;
        }

        for pair in dangling.chunks_exact(2) {
            let parent = matches.len();
            let round = 1 + matches[pair[0]].round().max(matches[pair[1]].round());

            matches[pair[0]].next_match_id = Some(parent);
            matches[pair[1]].next_match_id = Some(parent);
            matches.push(Match::new(parent, round));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn division(n: usize) -> Division {
        let entries: Vec<Entry> = (0..n)
            .map(|i| {
                Entry::new(
                    format!("e{i}"),
                    format!("Player {i}"),
                    10.0,
                    30.0,
                    "White",
                    "Male",
                    "Dojo",
                )
            })
            .collect();
        Division {
            id: Uuid::nil(),
            belt: "White".to_string(),
            gender: "Male".to_string(),
            min_age: 10,
            max_age: 12,
            min_weight: 30,
            max_weight: 33,
            num_rounds: 2,
            duration: 90,
            entry_ids: entries.iter().map(|e| e.id.clone()).collect(),
            entries,
        }
    }

    fn finals(matches: &[Match]) -> usize {
        matches.iter().filter(|m| m.is_final()).count()
    }

    #[test]
    fn test_no_entries_no_matches() {
        assert!(BracketBuilder::default().build(&division(0)).is_empty());
    }

    #[test]
    fn test_single_entry_is_a_bye_final() {
        let matches = BracketBuilder::default().build(&division(1));
        assert_eq!(matches.len(), 1);
        assert!(matches[0].is_bye());
        assert!(matches[0].is_final());
    }

    #[test]
    fn test_two_entries_single_final() {
        let matches = BracketBuilder::default().build(&division(2));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].participants.len(), 2);
        assert!(matches[0].is_final());
    }

    #[test]
    fn test_five_entries() {
        let matches = BracketBuilder::default().build(&division(5));

        let sizes: Vec<usize> = matches[..3].iter().map(|m| m.participants.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(matches.len(), 5);
        assert_eq!(finals(&matches), 1);

        // Leaves 0 and 1 meet in match 3; the bye waits and meets that winner.
        assert_eq!(matches[0].next_match_id, Some(3));
        assert_eq!(matches[1].next_match_id, Some(3));
        assert_eq!(matches[2].next_match_id, Some(4));
        assert_eq!(matches[3].next_match_id, Some(4));
        assert_eq!(matches[4].tournament_round_text, "3");
    }

    #[test]
    fn test_round_counts_deepest_feeder() {
        // Five leaves: the carried leaf 4 meets a round-2 winner in round 3,
        // and the final then sits one above that.
        let matches = BracketBuilder::default().build(&division(9));
        let rounds: Vec<u32> = matches.iter().map(Match::round).collect();
        assert_eq!(rounds, vec![1, 1, 1, 1, 1, 2, 2, 3, 4]);
        assert_eq!(matches[4].next_match_id, Some(7));
        assert_eq!(matches[8].tournament_round_text, "4");
    }

    #[test]
    fn test_participants_follow_entry_order() {
        let matches = BracketBuilder::default().build(&division(4));
        let names: Vec<&str> = matches[..2]
            .iter()
            .flat_map(|m| m.participants.iter().map(|p| p.entry_id.as_str()))
            .collect();
        assert_eq!(names, vec!["e0", "e1", "e2", "e3"]);
    }

    #[test]
    fn test_binary_tree_count() {
        for n in 1..=40 {
            let matches = BracketBuilder::default().build(&division(n));
            let leaves = n.div_ceil(2);
            assert_eq!(matches.len(), 2 * leaves - 1, "n = {n}");
            assert_eq!(finals(&matches), 1, "n = {n}");
        }
    }

    #[test]
    fn test_deterministic_participant_ids() {
        let builder = BracketBuilder::new(IdStrategy::Deterministic);
        let first = builder.build(&division(3));
        let second = builder.build(&division(3));
        assert_eq!(first, second);
    }
}
