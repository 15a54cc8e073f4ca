//! Narrowing a tournament plan for display.

use crate::bracket::Match;
use crate::division::Division;
use crate::planner::TournamentPlan;
use serde::{Deserialize, Serialize};

/// Display filter over divisions and matches.
///
/// Blank criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BracketFilter {
    /// Match number or participant name fragment
    pub search_query: String,
    /// Belt of the division
    pub belt: String,
    /// Club of at least one participant
    pub club: String,
}

impl BracketFilter {
    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.search_query.trim().is_empty()
            && self.belt.trim().is_empty()
            && self.club.trim().is_empty()
    }

    pub fn accepts_division(&self, division: &Division) -> bool {
        let belt = self.belt.trim();
        belt.is_empty() || division.belt.trim().eq_ignore_ascii_case(belt)
    }

    pub fn accepts_match(&self, m: &Match) -> bool {
        let club = self.club.trim();
        let club_ok = club.is_empty()
            || m
                .participants
                .iter()
                .any(|p| p.club.trim().eq_ignore_ascii_case(club));

        let query = self.search_query.trim().to_lowercase();
        let query_ok = query.is_empty()
            || m.name.to_lowercase().contains(&query)
            || m
                .participants
                .iter()
                .any(|p| p.name.to_lowercase().contains(&query));

        club_ok && query_ok
    }

    /// Filtered copy of `plan`. Divisions left without matches are dropped.
    pub fn apply(&self, plan: &TournamentPlan) -> TournamentPlan {
        if self.is_empty() {
            return plan.clone();
        }

        let mut filtered = TournamentPlan::default();
        for division in plan.divisions.iter().filter(|d| self.accepts_division(d)) {
            let Some(matches) = plan.matches_by_division_id.get(&division.id) else {
                continue;
            };
            let kept: Vec<Match> = matches
                .iter()
                .filter(|m| self.accepts_match(m))
                .cloned()
                .collect();
            if kept.is_empty() {
                continue;
            }
            filtered.divisions.push(division.clone());
            filtered.matches_by_division_id.insert(division.id, kept);
        }
        filtered
    }
}
