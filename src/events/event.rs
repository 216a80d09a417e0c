//! Notifications emitted to the presentation layer.
//!
//! Every engine entry point returns the ordered list of `Event`s its
//! transition produced. Payloads are plain read-only snapshots; nothing in
//! them refers back into engine state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::{Side, SideMap};
use crate::game::{OpponentTask, ResponseWindow};
use crate::round::{EndReason, HandOfElevenChoice, PendingRaise, RaiseResponse, RoundKind, TrickOutcome};

/// State of the table when a round is dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStartSnapshot {
    /// 1-based round number within the match.
    pub round: u32,
    pub kind: RoundKind,
    pub starter: Side,
    pub trump_indicator: Card,
    pub trump_rank: Rank,
    pub hand_sizes: SideMap<usize>,
    /// Whether each hand is hidden from its own holder.
    pub face_down: SideMap<bool>,
    /// The human's cards, unless dealt face down.
    pub player_hand: Option<Vec<Card>>,
    pub scores: SideMap<u8>,
}

/// A card leaving a hand for the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySnapshot {
    pub side: Side,
    pub card: Card,
    pub is_trump: bool,
    /// Side to act next, before any trick resolution.
    pub turn: Side,
}

/// A completed trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub outcome: TrickOutcome,
    /// All tricks so far, for the history dots.
    pub history: Vec<TrickOutcome>,
    /// Side leading the next trick, or `None` if the round is over.
    pub next_turn: Option<Side>,
}

/// The wager and who may raise it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerSnapshot {
    pub value: u8,
    pub pending: Option<PendingRaise>,
    pub may_raise: SideMap<bool>,
    /// Value the next raise would ask for.
    pub next_value: Option<u8>,
    /// Button label for the next raise; `None` once the ceiling is reached.
    pub label: Option<String>,
}

/// A finished round, after points were applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResultSnapshot {
    pub round: u32,
    /// `None` for a drawn round.
    pub winner: Option<Side>,
    pub points: u8,
    pub reason: EndReason,
    pub scores: SideMap<u8>,
    /// Who leads the next round.
    pub next_starter: Side,
}

/// The final result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEndSnapshot {
    pub winner: Side,
    pub player_won: bool,
    pub scores: SideMap<u8>,
    pub rounds_played: u32,
}

/// Something the presentation layer should render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    RoundStarted(RoundStartSnapshot),
    CardPlayed(PlaySnapshot),
    TrickResolved(TrickSnapshot),
    WagerChanged(WagerSnapshot),
    /// A side answered a raise.
    RaiseAnswered { side: Side, response: RaiseResponse },
    /// A side answered its hand of eleven.
    HandOfElevenDecided { side: Side, choice: HandOfElevenChoice },
    /// A human window opened; start its countdown.
    InputRequested(ResponseWindow),
    /// The opponent is deliberating; call back after `delay`.
    OpponentThinking { task: OpponentTask, delay: Duration },
    RoundResolved(RoundResultSnapshot),
    MatchEnded(MatchEndSnapshot),
}

impl Event {
    /// Short name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::RoundStarted(_) => "round_started",
            Event::CardPlayed(_) => "card_played",
            Event::TrickResolved(_) => "trick_resolved",
            Event::WagerChanged(_) => "wager_changed",
            Event::RaiseAnswered { .. } => "raise_answered",
            Event::HandOfElevenDecided { .. } => "hand_of_eleven_decided",
            Event::InputRequested(_) => "input_requested",
            Event::OpponentThinking { .. } => "opponent_thinking",
            Event::RoundResolved(_) => "round_resolved",
            Event::MatchEnded(_) => "match_ended",
        }
    }
}
