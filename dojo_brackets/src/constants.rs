//! Engine-wide defaults and registration limits.

/// Default band span. A span of 2 produces bands three integers wide.
pub const DEFAULT_BAND_SPAN: u32 = 2;

/// Largest band span accepted by [`crate::EngineConfig::validate`].
pub const MAX_BAND_SPAN: u32 = 1000;

/// Idle buffer added after every match when scheduling (5 minutes).
pub const IDLE_SECONDS_BETWEEN_MATCHES: u32 = 5 * 60;

/// Start time used when the tournament does not specify one.
pub const DEFAULT_START_MATCH_TIME: &str = "09:30";

/// Rounds per match for a freshly assembled division.
pub const DEFAULT_NUM_ROUNDS: u32 = 2;

/// Seconds per round for a freshly assembled division.
pub const DEFAULT_ROUND_DURATION_SECS: u32 = 90;

pub const ENTRY_AGE_MIN: f64 = 1.0;
pub const ENTRY_AGE_MAX: f64 = 99.0;
pub const ENTRY_WEIGHT_MIN: f64 = 1.0;
pub const ENTRY_WEIGHT_MAX: f64 = 200.0;
pub const ENTRY_NAME_MAX_LENGTH: usize = 100;

/// Largest age or weight the partitioner accepts. Band bounds are integers
/// derived from these values, so anything larger is rejected as malformed.
pub const MAX_ATTRIBUTE_VALUE: f64 = 1_000_000.0;

pub const DIVISION_NUM_ROUNDS_MIN: u32 = 1;
pub const DIVISION_NUM_ROUNDS_MAX: u32 = 5;
pub const DIVISION_DURATION_MIN: u32 = 1;
pub const DIVISION_DURATION_MAX: u32 = 180;
pub const DIVISION_AGE_MIN: i64 = 1;
pub const DIVISION_AGE_MAX: i64 = 99;
pub const DIVISION_WEIGHT_MIN: i64 = 1;
pub const DIVISION_WEIGHT_MAX: i64 = 200;

/// Seconds in one event day; schedules may not run past it.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;
