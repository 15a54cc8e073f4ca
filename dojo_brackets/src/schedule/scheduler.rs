//! Match numbering and start times across all divisions of an event day.

use super::errors::{ScheduleError, ScheduleResult};
use super::models::MatchesByDivision;
use crate::config::SlotPolicy;
use crate::constants::{IDLE_SECONDS_BETWEEN_MATCHES, SECONDS_PER_DAY};
use crate::division::Division;
use chrono::{NaiveTime, TimeDelta, Timelike};

/// Clock format of `Match::start_time`, e.g. `9:38 AM`
pub const START_TIME_FORMAT: &str = "%-I:%M %p";

/// Seconds reserved for one match of `division`, idle buffer included.
///
/// Under [`SlotPolicy::AllRounds`] every match reserves all of its rounds,
/// so schedules for divisions with many rounds grow quickly.
pub fn slot_seconds(division: &Division, idle_seconds: u32, policy: SlotPolicy) -> u64 {
    let playing = match policy {
        SlotPolicy::AllRounds => u64::from(division.num_rounds) * u64::from(division.duration),
        SlotPolicy::SingleRound => u64::from(division.duration),
    };
    playing + u64::from(idle_seconds)
}

/// Assigns display numbers and start times.
#[derive(Debug, Clone, Copy)]
pub struct MatchScheduler {
    idle_seconds: u32,
    slot_policy: SlotPolicy,
}

impl Default for MatchScheduler {
    fn default() -> Self {
        Self::new(IDLE_SECONDS_BETWEEN_MATCHES, SlotPolicy::default())
    }
}

impl MatchScheduler {
    pub fn new(idle_seconds: u32, slot_policy: SlotPolicy) -> Self {
        Self {
            idle_seconds,
            slot_policy,
        }
    }

    /// Number and time every match, walking divisions in the given order.
    ///
    /// The counter and elapsed time are shared by all divisions, so division
    /// order decides both numbering and timing. Each match starts one slot
    /// after the previous one; the first starts one slot after `start`.
    /// Divisions without an entry in `matches` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::ExceedsEventDay`] if a match would start at or
    /// after midnight.
    pub fn schedule(
        &self,
        start: NaiveTime,
        divisions: &[Division],
        mut matches: MatchesByDivision,
    ) -> ScheduleResult<MatchesByDivision> {
        let total: usize = divisions
            .iter()
            .filter_map(|division| matches.get(&division.id))
            .map(Vec::len)
            .sum();
        let width = total.to_string().len() + 1;
        let day_remaining = u64::from(SECONDS_PER_DAY - start.num_seconds_from_midnight());

        let mut counter = 0usize;
        let mut elapsed = 0u64;

        for division in divisions {
            let Some(division_matches) = matches.get_mut(&division.id) else {
                log::debug!("Division {} has no matches to schedule", division.id);
                continue;
            };
            let slot = slot_seconds(division, self.idle_seconds, self.slot_policy);

            for m in division_matches.iter_mut() {
                counter += 1;
                elapsed += slot;
                m.name = format!("{counter:0width$}");

                if elapsed >= day_remaining {
                    return Err(ScheduleError::ExceedsEventDay {
                        match_name: m.name.clone(),
                        elapsed_secs: elapsed,
                    });
                }

                let (time, _) = start.overflowing_add_signed(TimeDelta::seconds(elapsed as i64));
                m.start_time = time.format(START_TIME_FORMAT).to_string();
            }
        }

        log::info!(
            "Scheduled {} matches over {} divisions, last slot ends {}s after start",
            counter,
            divisions.len(),
            elapsed
        );
        Ok(matches)
    }
}
