//! # Dojo Brackets
//!
//! Division and bracket generation for martial arts tournaments.
//!
//! Given a flat list of competitor entries, the engine partitions them into
//! divisions by age, weight, belt and gender, builds a single-elimination
//! bracket per division, and numbers and times every match for one event day.
//!
//! ## Architecture
//!
//! The pipeline runs strictly forward; no stage mutates the output of an
//! earlier one:
//!
//! - **Boundaries**: lowest and highest integer age and weight
//! - **Bands**: contiguous age bands and weight bands
//! - **Belt split**: weight bands refined into belt-homogeneous groups
//! - **Assembly**: groups intersected with age bands and gender
//! - **Brackets**: greedy bottom-up single-elimination trees
//! - **Schedule**: shared match counter and clock across divisions
//!
//! ## Core Modules
//!
//! - [`division`]: stages up to division assembly
//! - [`bracket`]: match trees
//! - [`schedule`]: numbering and start times
//! - [`planner`]: the whole pipeline behind one call
//! - [`filter`]: narrowing a plan for display
//!
//! ## Example
//!
//! ```
//! use dojo_brackets::{create_divisions, create_matches};
//!
//! let entries = vec![
//!     dojo_brackets::Entry::new("1", "Ana", 10.0, 30.0, "Yellow", "Male", "Tigers"),
//!     dojo_brackets::Entry::new("2", "Bo", 11.0, 31.0, "Yellow", "Male", "Cranes"),
//! ];
//!
//! let divisions = create_divisions(&entries).unwrap();
//! let matches = create_matches(&divisions[0]);
//! assert_eq!(matches.len(), 1);
//! assert!(matches[0].next_match_id.is_none());
//! ```

pub mod bracket;
pub mod config;
pub mod constants;
pub mod division;
pub mod entry;
pub mod filter;
pub mod planner;
pub mod schedule;

pub use bracket::{BracketBuilder, Match, MatchId, MatchState, Participant, ParticipantStatus};
pub use config::{
    ConfigError, EngineConfig, IdStrategy, PartitionSettings, SlotPolicy, WeightUpperBound,
};
pub use division::{Division, DivisionError, DivisionId, DivisionResult};
pub use entry::{Entry, EntryId, EntryLimits};
pub use filter::BracketFilter;
pub use planner::{EngineError, EngineResult, TournamentPlan, TournamentPlanner};
pub use schedule::{MatchesByDivision, ScheduleError, ScheduleResult, TournamentSchedule};

use chrono::NaiveTime;

/// Partition entries into divisions with the default configuration.
pub fn create_divisions(entries: &[Entry]) -> DivisionResult<Vec<Division>> {
    division::DivisionGenerator::new(EngineConfig::default()).generate(entries)
}

/// Build the single-elimination bracket of one division.
pub fn create_matches(division: &Division) -> Vec<Match> {
    BracketBuilder::default().build(division)
}

/// Number and time matches across divisions with the default idle buffer
/// and slot policy.
pub fn schedule_matches(
    start: NaiveTime,
    divisions: &[Division],
    matches: MatchesByDivision,
) -> ScheduleResult<MatchesByDivision> {
    schedule::MatchScheduler::default().schedule(start, divisions, matches)
}
