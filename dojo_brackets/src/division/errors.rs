//! Error types for division assembly

use crate::config::ConfigError;
use thiserror::Error;

/// Result type for division operations
pub type DivisionResult<T> = Result<T, DivisionError>;

/// Division assembly errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DivisionError {
    /// Entry attributes cannot be partitioned
    #[error("Invalid entry {id}: {reason}")]
    InvalidEntry { id: String, reason: String },

    /// Two entries share an identifier
    #[error("Duplicate entry id: {0}")]
    DuplicateEntryId(String),

    /// Division edit outside the allowed ranges
    #[error("Invalid division timing: {field} must be between {min} and {max}, got {actual}")]
    InvalidTiming {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },

    /// Edited age or weight bound outside the allowed range
    #[error("Invalid division bound: {field} must be between {min} and {max}, got {actual}")]
    InvalidBound {
        field: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },

    /// Edited lower bound above its upper bound
    #[error("Invalid division {field} range: {lower} is above {upper}")]
    InvertedRange {
        field: &'static str,
        lower: i64,
        upper: i64,
    },

    /// Edited belt or gender left blank
    #[error("Division {0} is required")]
    MissingField(&'static str),

    /// Engine configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}
