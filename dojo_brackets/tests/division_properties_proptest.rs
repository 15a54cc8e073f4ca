/// Property-based tests for division assembly, brackets and scheduling
///
/// These tests verify the pipeline invariants across randomly generated
/// entry sets.
use dojo_brackets::{
    EngineConfig, Entry, IdStrategy, PartitionSettings, TournamentPlanner, TournamentSchedule,
    WeightUpperBound, create_divisions, create_matches,
    division::BandPartitioner,
};
use proptest::prelude::*;
use std::collections::HashSet;

const BELTS: [&str; 4] = ["White", "Yellow", "Green", "Black"];
const GENDERS: [&str; 3] = ["Male", "Female", ""];

// Strategy for a single entry with an integral age
fn entry_strategy() -> impl Strategy<Value = (u32, f64, usize, usize)> {
    (4u32..=60, 15.0f64..150.0, 0usize..BELTS.len(), 0usize..GENDERS.len())
}

// Strategy for a whole entry set with unique ids
fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry_strategy(), 0..=max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (age, weight, belt, gender))| {
                Entry::new(
                    format!("entry-{i}"),
                    format!("Competitor {i}"),
                    f64::from(age),
                    weight,
                    BELTS[belt],
                    GENDERS[gender],
                    "Club",
                )
            })
            .collect()
    })
}

// Minutes since midnight of a `9:38 AM` style clock time
fn minutes_of_day(clock: &str) -> u32 {
    let (time, meridiem) = clock.split_once(' ').expect("clock has meridiem");
    let (hours, minutes) = time.split_once(':').expect("clock has colon");
    let hours: u32 = hours.parse().expect("numeric hours");
    let minutes: u32 = minutes.parse().expect("numeric minutes");
    let offset = if meridiem == "PM" { 12 } else { 0 };
    ((hours % 12) + offset) * 60 + minutes
}

proptest! {
    #[test]
    fn test_every_entry_in_exactly_one_division(entries in entries_strategy(40)) {
        let divisions = create_divisions(&entries).unwrap();

        let mut seen = HashSet::new();
        for division in &divisions {
            prop_assert!(!division.entries.is_empty(), "empty division survived");
            for member in &division.entries {
                prop_assert!(seen.insert(member.id.clone()), "entry {} placed twice", member.id);
                prop_assert!(
                    division.admits(member, WeightUpperBound::Exclusive),
                    "entry {} outside its division",
                    member.id
                );
            }
        }

        // Integral ages always find their band, so nothing is lost
        prop_assert_eq!(seen.len(), entries.len());
    }

    #[test]
    fn test_inclusive_members_admitted(entries in entries_strategy(40)) {
        let planner = TournamentPlanner::new(EngineConfig {
            partition: PartitionSettings {
                weight_upper: WeightUpperBound::Inclusive,
                ..PartitionSettings::default()
            },
            ..EngineConfig::default()
        });
        for division in planner.create_divisions(&entries).unwrap() {
            for member in &division.entries {
                prop_assert!(
                    division.admits(member, WeightUpperBound::Inclusive),
                    "entry {} outside its division",
                    member.id
                );
            }
        }
    }

    #[test]
    fn test_fractional_ages_are_only_ever_dropped(
        entries in entries_strategy(30),
        fraction in 0.1f64..0.9,
    ) {
        let shifted: Vec<Entry> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let mut e = e.clone();
                if i % 2 == 0 {
                    e.age += fraction;
                }
                e
            })
            .collect();
        let ids: HashSet<&str> = shifted.iter().map(|e| e.id.as_str()).collect();

        let divisions = create_divisions(&shifted).unwrap();
        let mut placed = HashSet::new();
        for member in divisions.iter().flat_map(|d| d.entries.iter()) {
            prop_assert!(ids.contains(member.id.as_str()));
            prop_assert!(placed.insert(member.id.clone()));
        }
    }

    #[test]
    fn test_age_bands_cover_range_once(min in 0i64..80, len in 0i64..60, span in 0u32..6) {
        let max = min + len;
        let partitioner = BandPartitioner::for_age(span);
        let bounds = partitioner.all_bounds(min, max);

        for pair in bounds.windows(2) {
            prop_assert_eq!(pair[1].0, pair[0].1 + 1, "age bands must touch without overlap");
        }
        for value in min..=max {
            let owners = bounds.iter().filter(|(lo, hi)| *lo <= value && value <= *hi).count();
            prop_assert_eq!(owners, 1, "value {} owned by {} bands", value, owners);
        }
    }

    #[test]
    fn test_weight_bands_half_open(min in 1i64..150, len in 0i64..80, span in 0u32..6) {
        let max = min + len;
        let partitioner = BandPartitioner::for_weight(span, WeightUpperBound::Exclusive);
        let bounds = partitioner.all_bounds(min, max);

        for pair in bounds.windows(2) {
            prop_assert_eq!(pair[1].0, pair[0].1, "weight bands must be half-open and adjacent");
        }
        for value in min..=max {
            let owners = bounds.iter().filter(|(lo, hi)| *lo <= value && value < *hi).count();
            prop_assert_eq!(owners, 1);
        }
    }

    #[test]
    fn test_bracket_is_binary_tree(entries in entries_strategy(40)) {
        for division in create_divisions(&entries).unwrap() {
            let matches = create_matches(&division);
            let leaves = division.entries.len().div_ceil(2);

            let leaf_count = matches.iter().filter(|m| !m.participants.is_empty()).count();
            prop_assert_eq!(leaf_count, leaves);
            prop_assert_eq!(matches.len(), 2 * leaves - 1);
            prop_assert_eq!(matches.iter().filter(|m| m.next_match_id.is_none()).count(), 1);

            for (index, m) in matches.iter().enumerate() {
                prop_assert_eq!(m.id, index);
                if let Some(next) = m.next_match_id {
                    prop_assert!(next > m.id, "winners advance to later matches");
                    let feeders = matches.iter().filter(|o| o.next_match_id == Some(next)).count();
                    prop_assert_eq!(feeders, 2);
                }
            }
        }
    }

    #[test]
    fn test_schedule_strictly_monotonic(entries in entries_strategy(30)) {
        let plan = TournamentPlanner::default()
            .plan(&entries, &TournamentSchedule::starting_at("08:00"))
            .unwrap();

        let times: Vec<u32> = plan
            .ordered_matches()
            .map(|(_, m)| minutes_of_day(&m.start_time))
            .collect();
        for pair in times.windows(2) {
            prop_assert!(pair[1] > pair[0], "{:?} not increasing", pair);
        }

        let names: Vec<usize> = plan
            .ordered_matches()
            .map(|(_, m)| m.name.parse().unwrap())
            .collect();
        let expected: Vec<usize> = (1..=names.len()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn test_membership_idempotent(entries in entries_strategy(40)) {
        let first = create_divisions(&entries).unwrap();
        let second = create_divisions(&entries).unwrap();

        let first_members: Vec<&Vec<String>> = first.iter().map(|d| &d.entry_ids).collect();
        let second_members: Vec<&Vec<String>> = second.iter().map(|d| &d.entry_ids).collect();
        prop_assert_eq!(first_members, second_members);
    }

    #[test]
    fn test_deterministic_ids_idempotent(entries in entries_strategy(20)) {
        let planner = TournamentPlanner::new(EngineConfig {
            id_strategy: IdStrategy::Deterministic,
            ..EngineConfig::default()
        });
        let schedule = TournamentSchedule::default();
        prop_assert_eq!(
            planner.plan(&entries, &schedule).unwrap(),
            planner.plan(&entries, &schedule).unwrap()
        );
    }
}
