//! Match and participant models as consumed by the bracket renderer.

use serde::{Deserialize, Serialize};

/// Match ID type, dense from 0 within one bracket
pub type MatchId = usize;

/// Match state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchState {
    /// Waiting for its slot
    #[default]
    Scheduled,
    /// On the mat
    Running,
    /// Finished, result not yet confirmed
    Played,
    /// Finished and confirmed
    Done,
    /// Score entered and confirmed
    ScoreDone,
    /// A participant did not show up
    NoShow,
    /// A participant advanced uncontested
    WalkOver,
    /// No participants reached this match
    NoParty,
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchState::Scheduled => write!(f, "SCHEDULED"),
            MatchState::Running => write!(f, "RUNNING"),
            MatchState::Played => write!(f, "PLAYED"),
            MatchState::Done => write!(f, "DONE"),
            MatchState::ScoreDone => write!(f, "SCORE_DONE"),
            MatchState::NoShow => write!(f, "NO_SHOW"),
            MatchState::WalkOver => write!(f, "WALK_OVER"),
            MatchState::NoParty => write!(f, "NO_PARTY"),
        }
    }
}

/// Participant status within a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantStatus {
    Played,
    NoShow,
    WalkOver,
    NoParty,
}

/// One competitor slot of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    /// Entry this participant was seeded from
    pub entry_id: String,
    pub name: String,
    pub club: String,
    pub is_winner: bool,
    pub status: Option<ParticipantStatus>,
    pub result_text: Option<String>,
}

/// A single-elimination match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// Display number, assigned by the scheduler
    pub name: String,
    /// Match the winner advances to; `None` for the final
    pub next_match_id: Option<MatchId>,
    /// Round label, `"1"` for leaf matches
    pub tournament_round_text: String,
    /// Formatted clock time, assigned by the scheduler
    pub start_time: String,
    pub state: MatchState,
    pub participants: Vec<Participant>,
}

impl Match {
    /// New unscheduled match without participants
    pub fn new(id: MatchId, round: u32) -> Self {
        Self {
            id,
            name: String::new(),
            next_match_id: None,
            tournament_round_text: round.to_string(),
            start_time: String::new(),
            state: MatchState::Scheduled,
            participants: Vec::new(),
        }
    }

    /// Round number parsed back from the label
    pub fn round(&self) -> u32 {
        self.tournament_round_text.parse().unwrap_or(1)
    }

    /// Leaf match holding a single entrant
    pub fn is_bye(&self) -> bool {
        self.participants.len() == 1
    }

    /// Whether the winner of this match wins the bracket
    pub fn is_final(&self) -> bool {
        self.next_match_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_like_renderer() {
        let json = serde_json::to_string(&MatchState::WalkOver).unwrap();
        assert_eq!(json, "\"WALK_OVER\"");
        assert_eq!(MatchState::ScoreDone.to_string(), "SCORE_DONE");
    }

    #[test]
    fn test_match_serializes_camel_case() {
        let m = Match::new(3, 2);
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["nextMatchId"], serde_json::Value::Null);
        assert_eq!(value["tournamentRoundText"], "2");
        assert_eq!(value["state"], "SCHEDULED");
    }

    #[test]
    fn test_new_match_is_final_until_linked() {
        let mut m = Match::new(0, 1);
        assert!(m.is_final());
        m.next_match_id = Some(4);
        assert!(!m.is_final());
        assert_eq!(m.round(), 1);
    }
}
