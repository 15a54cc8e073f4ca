//! Full pipeline: entries to scheduled brackets.

use crate::bracket::{BracketBuilder, Match};
use crate::config::{ConfigError, EngineConfig};
use crate::division::{Division, DivisionError, DivisionGenerator};
use crate::entry::Entry;
use crate::schedule::{MatchScheduler, MatchesByDivision, ScheduleError, TournamentSchedule};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pipeline errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Division error: {0}")]
    Division(#[from] DivisionError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Divisions in processing order and their scheduled matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPlan {
    pub divisions: Vec<Division>,
    pub matches_by_division_id: MatchesByDivision,
}

impl TournamentPlan {
    /// Total number of matches across all divisions
    pub fn match_count(&self) -> usize {
        self.matches_by_division_id.values().map(Vec::len).sum()
    }

    /// Matches of every division in processing order
    pub fn ordered_matches(&self) -> impl Iterator<Item = (&Division, &Match)> {
        self.divisions.iter().flat_map(move |division| {
            self.matches_by_division_id
                .get(&division.id)
                .into_iter()
                .flatten()
                .map(move |m| (division, m))
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the division, bracket and scheduling stages with one configuration.
///
/// # Example
///
/// ```
/// use dojo_brackets::{EngineConfig, Entry, TournamentPlanner, TournamentSchedule};
///
/// let entries = vec![
///     Entry::new("1", "Ana", 10.0, 30.0, "Yellow", "Male", "Tigers"),
///     Entry::new("2", "Bo", 11.0, 31.0, "Yellow", "Male", "Cranes"),
///     Entry::new("3", "Cy", 25.0, 70.0, "Black", "Female", "Tigers"),
/// ];
///
/// let planner = TournamentPlanner::new(EngineConfig::default());
/// let plan = planner
///     .plan(&entries, &TournamentSchedule::starting_at("09:30"))
///     .unwrap();
///
/// assert_eq!(plan.divisions.len(), 2);
/// let first = &plan.matches_by_division_id[&plan.divisions[0].id];
/// assert_eq!(first[0].name, "01");
/// assert_eq!(first[0].start_time, "9:38 AM");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentPlanner {
    config: EngineConfig,
}

impl TournamentPlanner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Partition entries into divisions
    pub fn create_divisions(&self, entries: &[Entry]) -> EngineResult<Vec<Division>> {
        Ok(DivisionGenerator::new(self.config).generate(entries)?)
    }

    /// Build the bracket of one division
    pub fn create_matches(&self, division: &Division) -> Vec<Match> {
        BracketBuilder::new(self.config.id_strategy).build(division)
    }

    /// Build the brackets of all divisions, keyed by division id
    pub fn create_all_matches(&self, divisions: &[Division]) -> MatchesByDivision {
        divisions
            .iter()
            .map(|division| (division.id, self.create_matches(division)))
            .collect()
    }

    /// Number and time matches across divisions in the given order
    pub fn schedule_matches(
        &self,
        start: NaiveTime,
        divisions: &[Division],
        matches: MatchesByDivision,
    ) -> EngineResult<MatchesByDivision> {
        self.config.validate()?;
        let scheduler = MatchScheduler::new(self.config.idle_seconds, self.config.slot_policy);
        Ok(scheduler.schedule(start, divisions, matches)?)
    }

    /// Run the whole pipeline.
    ///
    /// Divisions are processed in assembly order. Callers that need another
    /// order can run the stages separately and pass their own division list to
    /// [`TournamentPlanner::schedule_matches`].
    pub fn plan(
        &self,
        entries: &[Entry],
        schedule: &TournamentSchedule,
    ) -> EngineResult<TournamentPlan> {
        let start = schedule.start_time()?;
        let divisions = self.create_divisions(entries)?;
        let matches = self.create_all_matches(&divisions);
        let matches_by_division_id = self.schedule_matches(start, &divisions, matches)?;

        Ok(TournamentPlan {
            divisions,
            matches_by_division_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("1", "Ana", 10.0, 30.0, "Yellow", "Male", "Tigers"),
            Entry::new("2", "Bo", 11.0, 31.0, "Yellow", "Male", "Cranes"),
            Entry::new("3", "Cy", 25.0, 70.0, "Black", "Female", "Tigers"),
        ]
    }

    #[test]
    fn test_plan_empty_entries() {
        let plan = TournamentPlanner::default()
            .plan(&[], &TournamentSchedule::default())
            .unwrap();
        assert!(plan.divisions.is_empty());
        assert_eq!(plan.match_count(), 0);
    }

    #[test]
    fn test_plan_invalid_start_time() {
        let err = TournamentPlanner::default()
            .plan(&entries(), &TournamentSchedule::starting_at("25:99"))
            .unwrap_err();
        assert!(matches!(err, EngineError::Schedule(ScheduleError::InvalidStartTime(_))));
    }

    #[test]
    fn test_ordered_matches_follow_division_order() {
        let plan = TournamentPlanner::default()
            .plan(&entries(), &TournamentSchedule::default())
            .unwrap();
        let names: Vec<&str> = plan.ordered_matches().map(|(_, m)| m.name.as_str()).collect();
        assert_eq!(names, vec!["01", "02"]);
    }

    #[test]
    fn test_deterministic_plan_is_reproducible() {
        let planner = TournamentPlanner::new(EngineConfig {
            id_strategy: IdStrategy::Deterministic,
            ..EngineConfig::default()
        });
        let first = planner.plan(&entries(), &TournamentSchedule::default()).unwrap();
        let second = planner.plan(&entries(), &TournamentSchedule::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.to_json_pretty().unwrap(),
            second.to_json_pretty().unwrap()
        );
    }
}
