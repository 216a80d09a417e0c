//! Whole-table views for redrawing from scratch.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Side, SideMap};
use crate::game::Suspension;
use crate::round::{RoundKind, TrickOutcome};

use super::event::WagerSnapshot;

/// The current deal as the human may see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub number: u32,
    pub kind: RoundKind,
    pub starter: Side,
    pub trump_indicator: Card,
    pub hand_sizes: SideMap<usize>,
    pub face_down: SideMap<bool>,
    /// The human's cards, unless face down.
    pub player_hand: Option<Vec<Card>>,
    pub table: SideMap<Option<Card>>,
    pub tricks: Vec<TrickOutcome>,
    pub turn: Side,
    pub wager: WagerSnapshot,
    pub resolved: bool,
}

/// Everything the presentation layer needs to render the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub scores: SideMap<u8>,
    /// Side leading the next round to be dealt.
    pub next_starter: Side,
    pub rounds_played: u32,
    pub winner: Option<Side>,
    /// `None` before the first deal.
    pub round: Option<RoundView>,
    pub suspension: Suspension,
}
