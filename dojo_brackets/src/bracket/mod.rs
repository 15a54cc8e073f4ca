//! Single-elimination brackets, one per division.

pub mod builder;
pub mod models;

pub use builder::BracketBuilder;
pub use models::{Match, MatchId, MatchState, Participant, ParticipantStatus};
