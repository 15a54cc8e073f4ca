//! Competitor entries as supplied by the entry source.

pub mod models;

pub use models::{Entry, EntryId, EntryLimits, unique_values};
