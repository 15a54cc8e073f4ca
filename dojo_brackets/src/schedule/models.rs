//! Scheduling inputs and outputs.

use super::errors::{ScheduleError, ScheduleResult};
use crate::bracket::Match;
use crate::constants::DEFAULT_START_MATCH_TIME;
use crate::division::DivisionId;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Matches of every division, keyed by division id
pub type MatchesByDivision = BTreeMap<DivisionId, Vec<Match>>;

/// Tournament-level scheduling settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSchedule {
    /// Time of day the first match may start, `HH:MM`
    pub start_match_time: Option<String>,
}

impl TournamentSchedule {
    /// Schedule starting at the given `HH:MM` time
    pub fn starting_at(time: impl Into<String>) -> Self {
        Self {
            start_match_time: Some(time.into()),
        }
    }

    /// Parsed start time, `09:30` when unset or blank
    pub fn start_time(&self) -> ScheduleResult<NaiveTime> {
        let raw = self
            .start_match_time
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_START_MATCH_TIME);
        parse_start_time(raw)
    }
}

/// Parse `HH:MM` or `HH:MM:SS`
pub fn parse_start_time(raw: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidStartTime(raw.to_string()))
}
