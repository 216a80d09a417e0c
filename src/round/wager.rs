//! The escalating wager ("truco").
//!
//! A round starts worth 1 point. The side in turn may ask to raise it along
//! the ladder `1 → 3 → 6 → 9 → 12`; the other side accepts, raises again,
//! or folds. Whoever asked last may not ask for the next step.

use serde::{Deserialize, Serialize};

use crate::core::{RuleViolation, Side};

/// Starting value of every round.
pub const BASE_WAGER: u8 = 1;

/// Highest value the wager can reach.
pub const WAGER_CEILING: u8 = 12;

/// Value of an accepted hand of eleven.
pub const HAND_OF_ELEVEN_WAGER: u8 = 3;

/// The next value on the ladder.
#[must_use]
pub fn next_wager(value: u8) -> u8 {
    match value {
        1 => 3,
        3 => 6,
        6 => 9,
        v if v >= 9 => WAGER_CEILING,
        _ => 3,
    }
}

/// Who asked for the last raise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Raiser {
    /// Nobody has raised this round.
    #[default]
    Nobody,
    /// This side asked last and may not ask again.
    Side(Side),
    /// The wager is fixed; nobody may raise.
    Locked,
}

/// A raise waiting for the other side's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRaise {
    pub caller: Side,
    pub offered: u8,
}

impl PendingRaise {
    /// The side that must answer.
    #[must_use]
    pub fn responder(self) -> Side {
        self.caller.opponent()
    }
}

/// Answer to a raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaiseResponse {
    /// Take the offered value and resume play.
    Accept,
    /// Take the offered value and immediately ask for the next one.
    RaiseAgain,
    /// Concede the round at the value in force before the raise.
    Fold,
}

/// Answer to a hand of eleven.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOfElevenChoice {
    /// Play the round for a locked 3 points.
    Play,
    /// Concede 1 point without playing.
    Fold,
}

/// Wager state for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    pub value: u8,
    pub last_raiser: Raiser,
    pub pending: Option<PendingRaise>,
}

impl Default for Wager {
    fn default() -> Self {
        Self::new()
    }
}

impl Wager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: BASE_WAGER,
            last_raiser: Raiser::Nobody,
            pending: None,
        }
    }

    /// A wager fixed at `value` that nobody may raise.
    #[must_use]
    pub fn locked(value: u8) -> Self {
        Self {
            value,
            last_raiser: Raiser::Locked,
            pending: None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Value a raise would ask for now, if the ceiling allows one.
    #[must_use]
    pub fn next_value(&self) -> Option<u8> {
        (self.value < WAGER_CEILING).then(|| next_wager(self.value))
    }

    /// Button label for the next raise, or `None` at the ceiling.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self.next_value()? {
            3 => Some("TRUCO"),
            6 => Some("6"),
            9 => Some("9"),
            _ => Some("12"),
        }
    }

    /// Wager-local legality of `side` asking for a raise.
    pub fn check_raise(&self, side: Side) -> Result<(), RuleViolation> {
        if self.last_raiser == Raiser::Locked {
            return Err(RuleViolation::WagerLocked);
        }
        if self.value >= WAGER_CEILING {
            return Err(RuleViolation::WagerCeiling);
        }
        if self.pending.is_some() {
            return Err(RuleViolation::RaisePending);
        }
        if self.last_raiser == Raiser::Side(side) {
            return Err(RuleViolation::RepeatRaiser);
        }
        Ok(())
    }

    /// Record `side` asking for the next value.
    pub(crate) fn open_raise(&mut self, side: Side) {
        self.pending = Some(PendingRaise {
            caller: side,
            offered: next_wager(self.value),
        });
        self.last_raiser = Raiser::Side(side);
    }
}
