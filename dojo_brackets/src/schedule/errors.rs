//! Error types for match scheduling

use thiserror::Error;

/// Result type for scheduling operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Scheduling errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Start time is not `HH:MM` or `HH:MM:SS`
    #[error("Invalid start time: {0}")]
    InvalidStartTime(String),

    /// The schedule runs past midnight
    #[error("Match {match_name} would start {elapsed_secs}s after the start time, past the end of the event day")]
    ExceedsEventDay {
        match_name: String,
        elapsed_secs: u64,
    },
}
