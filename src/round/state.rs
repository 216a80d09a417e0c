//! Round state: one deal, up to three tricks.
//!
//! `RoundState` is a plain value. Transitions (see `transition.rs`) borrow
//! the current value and return the next one, so a rejected action leaves
//! the caller's state exactly as it was.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Deck, Rank};
use crate::core::{EngineError, GameRng, RuleViolation, Side, SideMap};
use crate::events::{Event, RoundStartSnapshot, RoundView, WagerSnapshot};

use super::tricks::TrickOutcome;
use super::wager::{Raiser, Wager};

/// Cards dealt to each side.
pub const HAND_SIZE: usize = 3;

/// Score that triggers the hand-of-eleven rules.
pub const ELEVEN: u8 = 11;

/// A side's cards, in deal order.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// Outcomes of the tricks played so far.
pub type TrickHistory = SmallVec<[TrickOutcome; HAND_SIZE]>;

/// Which special rules govern the round, fixed at the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundKind {
    Normal,
    /// This side is at eleven and must choose to play for 3 or concede 1.
    HandOfEleven(Side),
    /// Both sides at eleven: blind hands, wager fixed at 1.
    IronHand,
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Decided by the trick history.
    Tricks,
    /// A side folded, either to a raise or voluntarily.
    Fold,
    /// A side at eleven declined to play.
    HandOfElevenDeclined,
    /// A human response window elapsed.
    Timeout,
}

/// Winner and points of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// `None` for a drawn round.
    pub winner: Option<Side>,
    pub points: u8,
    pub reason: EndReason,
}

/// Where the round is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for this side's hand-of-eleven decision.
    AwaitingHandOfEleven(Side),
    /// Tricks are being played (possibly with a raise pending).
    Playing,
    Resolved(RoundOutcome),
}

/// Next state plus the events the transition produced.
#[derive(Clone, Debug)]
pub struct Step {
    pub state: RoundState,
    pub events: Vec<Event>,
}

/// Everything about one deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// 1-based round number within the match.
    pub number: u32,
    /// Match scores when the round was dealt.
    pub scores: SideMap<u8>,
    /// Side leading the first trick.
    pub starter: Side,
    pub kind: RoundKind,
    pub trump_indicator: Card,
    pub hands: SideMap<Hand>,
    /// Cards face up in the current trick.
    pub table: SideMap<Option<Card>>,
    pub tricks: TrickHistory,
    pub turn: Side,
    pub wager: Wager,
    pub phase: RoundPhase,
}

impl RoundState {
    /// Shuffle a fresh deck and deal.
    pub fn deal(
        number: u32,
        scores: SideMap<u8>,
        starter: Side,
        rng: &mut GameRng,
    ) -> Result<Self, EngineError> {
        Self::deal_from(number, scores, starter, Deck::shuffled(rng))
    }

    /// Deal from a prepared deck: three to the player, three to the cpu,
    /// then the trump indicator.
    pub fn deal_from(
        number: u32,
        scores: SideMap<u8>,
        starter: Side,
        mut deck: Deck,
    ) -> Result<Self, EngineError> {
        let player: Hand = deck.deal(HAND_SIZE)?.into_iter().collect();
        let cpu: Hand = deck.deal(HAND_SIZE)?.into_iter().collect();
        let trump_indicator = deck.draw_one()?;

        let kind = match (scores[Side::Player] == ELEVEN, scores[Side::Cpu] == ELEVEN) {
            (true, true) => RoundKind::IronHand,
            (true, false) => RoundKind::HandOfEleven(Side::Player),
            (false, true) => RoundKind::HandOfEleven(Side::Cpu),
            (false, false) => RoundKind::Normal,
        };
        let phase = match kind {
            RoundKind::HandOfEleven(side) => RoundPhase::AwaitingHandOfEleven(side),
            RoundKind::Normal | RoundKind::IronHand => RoundPhase::Playing,
        };

        Ok(Self {
            number,
            scores,
            starter,
            kind,
            trump_indicator,
            hands: SideMap::from_pair(player, cpu),
            table: SideMap::with_value(None),
            tricks: TrickHistory::new(),
            turn: starter,
            wager: Wager::new(),
            phase,
        })
    }

    /// Rank that decides the trump rank this round.
    #[must_use]
    pub fn indicator_rank(&self) -> Rank {
        self.trump_indicator.rank
    }

    #[must_use]
    pub fn is_iron_hand(&self) -> bool {
        self.kind == RoundKind::IronHand
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.outcome().is_some()
    }

    /// Whether `side`'s hand is hidden from `side` itself.
    ///
    /// Both hands are blind during an iron hand. While the cpu weighs its
    /// hand of eleven the human's cards stay down too.
    #[must_use]
    pub fn face_down(&self, side: Side) -> bool {
        match (self.kind, self.phase) {
            (RoundKind::IronHand, _) => true,
            (_, RoundPhase::AwaitingHandOfEleven(Side::Cpu)) => side == Side::Player,
            _ => false,
        }
    }

    /// Side whose answer a pending raise awaits.
    #[must_use]
    pub fn raise_responder(&self) -> Option<Side> {
        self.wager.pending.map(|p| p.responder())
    }

    /// Whether `side` is the recorded last raiser.
    #[must_use]
    pub fn is_last_raiser(&self, side: Side) -> bool {
        self.wager.last_raiser == Raiser::Side(side)
    }

    /// Fail unless tricks are being played.
    pub(crate) fn ensure_playing(&self) -> Result<(), RuleViolation> {
        match self.phase {
            RoundPhase::Playing => Ok(()),
            RoundPhase::Resolved(_) => Err(RuleViolation::RoundResolved),
            RoundPhase::AwaitingHandOfEleven(_) => Err(RuleViolation::WrongDecision),
        }
    }

    /// Whether `side` may call a raise right now.
    pub fn check_raise(&self, side: Side) -> Result<(), RuleViolation> {
        self.ensure_playing()?;
        if self.is_iron_hand() {
            return Err(RuleViolation::IronHand);
        }
        if self.scores.iter().any(|(_, &score)| score == ELEVEN) {
            return Err(RuleViolation::HandOfEleven);
        }
        self.wager.check_raise(side)?;
        if self.turn != side {
            return Err(RuleViolation::OutOfTurn);
        }
        Ok(())
    }

    #[must_use]
    pub fn wager_snapshot(&self) -> WagerSnapshot {
        WagerSnapshot {
            value: self.wager.value,
            pending: self.wager.pending,
            may_raise: SideMap::new(|side| self.check_raise(side).is_ok()),
            next_value: self.wager.next_value(),
            label: self.wager.label().map(str::to_string),
        }
    }

    #[must_use]
    pub fn start_snapshot(&self) -> RoundStartSnapshot {
        let face_down = SideMap::new(|side| self.face_down(side));
        RoundStartSnapshot {
            round: self.number,
            kind: self.kind,
            starter: self.starter,
            trump_indicator: self.trump_indicator,
            trump_rank: self.indicator_rank().trump(),
            hand_sizes: self.hands.map(|_, hand| hand.len()),
            player_hand: (!face_down[Side::Player]).then(|| self.hands[Side::Player].to_vec()),
            face_down,
            scores: self.scores,
        }
    }

    /// The deal as the human may see it right now.
    #[must_use]
    pub fn view(&self) -> RoundView {
        let face_down = SideMap::new(|side| self.face_down(side));
        RoundView {
            number: self.number,
            kind: self.kind,
            starter: self.starter,
            trump_indicator: self.trump_indicator,
            hand_sizes: self.hands.map(|_, hand| hand.len()),
            player_hand: (!face_down[Side::Player]).then(|| self.hands[Side::Player].to_vec()),
            face_down,
            table: self.table,
            tricks: self.tricks.to_vec(),
            turn: self.turn,
            wager: self.wager_snapshot(),
            resolved: self.is_resolved(),
        }
    }
}
