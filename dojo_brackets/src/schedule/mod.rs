//! Event-day scheduling of every bracket.
//!
//! Matches are numbered with one counter shared by all divisions and placed
//! back to back from the tournament start time. Match slot length comes from
//! the division's round count and round duration plus an idle buffer.

pub mod errors;
pub mod models;
pub mod scheduler;

pub use errors::{ScheduleError, ScheduleResult};
pub use models::{MatchesByDivision, TournamentSchedule, parse_start_time};
pub use scheduler::{MatchScheduler, START_TIME_FORMAT, slot_seconds};
