//! Match state: scores that persist across rounds.
//!
//! Like `RoundState`, `MatchState` is a value. `apply_round` returns the
//! next value; the history uses `im::Vector` so snapshots share structure
//! with the live state instead of copying every past round.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};
use crate::round::{RoundKind, RoundOutcome};

/// Points needed to win the match. Scores never exceed it.
pub const MATCH_POINTS: u8 = 12;

/// One finished round, as kept in the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub number: u32,
    pub starter: Side,
    pub kind: RoundKind,
    pub outcome: RoundOutcome,
    /// Scores after the round's points were applied.
    pub scores: SideMap<u8>,
}

/// Cumulative state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub scores: SideMap<u8>,
    /// Side leading the next round.
    pub starter: Side,
    pub rounds_played: u32,
    /// Set once a side reaches `MATCH_POINTS`.
    pub winner: Option<Side>,
    pub history: Vector<RoundRecord>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Scores at zero, the human leading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scores: SideMap::with_value(0),
            starter: Side::Player,
            rounds_played: 0,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Start from arbitrary scores, e.g. to resume at a hand of eleven.
    /// A score at (or clamped to) 12 records that side as the winner.
    #[must_use]
    pub fn with_scores(player: u8, cpu: u8) -> Self {
        let scores = SideMap::from_pair(player.min(MATCH_POINTS), cpu.min(MATCH_POINTS));
        let winner = scores.iter().find(|&(_, &s)| s == MATCH_POINTS).map(|(side, _)| side);
        Self {
            scores,
            winner,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether either score has reached 12, winner recorded or not.
    #[must_use]
    pub fn has_finished_score(&self) -> bool {
        self.scores.iter().any(|(_, &s)| s >= MATCH_POINTS)
    }

    /// Number of the next round to deal (1-based).
    #[must_use]
    pub fn next_round_number(&self) -> u32 {
        self.rounds_played + 1
    }

    /// Apply a finished round: award points (clamped), flip the starter,
    /// and detect the match winner. A drawn round scores nothing but still
    /// passes the lead.
    #[must_use]
    pub fn apply_round(&self, number: u32, kind: RoundKind, outcome: RoundOutcome) -> MatchState {
        let mut next = self.clone();
        if let Some(side) = outcome.winner {
            let score = &mut next.scores[side];
            *score = score.saturating_add(outcome.points).min(MATCH_POINTS);
            if *score == MATCH_POINTS {
                next.winner = Some(side);
            }
        }
        next.history.push_back(RoundRecord {
            number,
            starter: self.starter,
            kind,
            outcome,
            scores: next.scores,
        });
        next.starter = self.starter.opponent();
        next.rounds_played += 1;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::EndReason;

    fn won(side: Side, points: u8) -> RoundOutcome {
        RoundOutcome {
            winner: Some(side),
            points,
            reason: EndReason::Tricks,
        }
    }

    #[test]
    fn test_round_win_flips_starter() {
        let state = MatchState::new().apply_round(1, RoundKind::Normal, won(Side::Player, 1));
        assert_eq!(state.scores, SideMap::from_pair(1, 0));
        assert_eq!(state.starter, Side::Cpu);
        assert_eq!(state.rounds_played, 1);
        assert_eq!(state.history.len(), 1);
        assert!(!state.is_over());
    }

    #[test]
    fn test_draw_scores_nothing_but_passes_lead() {
        let draw = RoundOutcome {
            winner: None,
            points: 0,
            reason: EndReason::Tricks,
        };
        let state = MatchState::with_scores(4, 7).apply_round(1, RoundKind::Normal, draw);
        assert_eq!(state.scores, SideMap::from_pair(4, 7));
        assert_eq!(state.starter, Side::Cpu);
    }

    #[test]
    fn test_clamp_and_match_end() {
        let state = MatchState::with_scores(11, 3).apply_round(
            1,
            RoundKind::HandOfEleven(Side::Player),
            won(Side::Player, 3),
        );
        assert_eq!(state.scores[Side::Player], MATCH_POINTS);
        assert_eq!(state.winner, Some(Side::Player));

        let big = MatchState::with_scores(2, 10).apply_round(1, RoundKind::Normal, won(Side::Cpu, 12));
        assert_eq!(big.scores[Side::Cpu], MATCH_POINTS);
        assert_eq!(big.winner, Some(Side::Cpu));
    }

    #[test]
    fn test_with_scores_at_twelve_records_winner() {
        let done = MatchState::with_scores(12, 5);
        assert_eq!(done.winner, Some(Side::Player));
        assert!(done.is_over());

        let clamped = MatchState::with_scores(3, 40);
        assert_eq!(clamped.scores[Side::Cpu], MATCH_POINTS);
        assert_eq!(clamped.winner, Some(Side::Cpu));

        let open = MatchState::with_scores(11, 11);
        assert_eq!(open.winner, None);
        assert!(!open.has_finished_score());

        let hand_built = MatchState { scores: SideMap::from_pair(0, 12), ..MatchState::new() };
        assert!(!hand_built.is_over());
        assert!(hand_built.has_finished_score());
    }

    #[test]
    fn test_history_is_shared_not_mutated() {
        let before = MatchState::new();
        let after = before.apply_round(1, RoundKind::Normal, won(Side::Cpu, 3));
        assert!(before.history.is_empty());
        assert_eq!(after.history[0].scores, SideMap::from_pair(0, 3));
        assert_eq!(after.history[0].starter, Side::Player);
    }
}
