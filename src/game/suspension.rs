//! Suspension points: where the engine waits for the outside world.
//!
//! At any moment the engine waits for exactly one thing:
//!
//! - a human decision inside a bounded `ResponseWindow`, or
//! - the end of the opponent's cosmetic deliberation delay.
//!
//! Windows are numbered. Opening a new one (including at round start or
//! match end) supersedes the old id, so a late timeout for a closed window
//! is rejected instead of mutating a newer state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Identifier of a response window, unique within a match engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Window({})", self.0)
    }
}

/// What a human response window is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContext {
    /// Play a card, call a raise, or fold. Timeout forfeits the round.
    Turn,
    /// Answer a raise to `offered`. Timeout folds.
    RaiseResponse { offered: u8 },
    /// Play or decline the hand of eleven. Timeout declines.
    HandOfEleven,
}

/// A bounded wait for a human decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseWindow {
    pub id: WindowId,
    pub context: WindowContext,
    pub duration: Duration,
}

/// Which opponent decision is being deliberated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentTask {
    /// Play a card or call a raise.
    Turn,
    /// Answer the human's raise.
    RaiseResponse,
    /// Play or decline its hand of eleven.
    HandOfEleven,
}

/// What the engine is currently waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suspension {
    /// No match has been started.
    Idle,
    /// Waiting for the human, with a timeout.
    AwaitingHuman(ResponseWindow),
    /// Waiting out the opponent's deliberation before applying its decision.
    OpponentThinking { task: OpponentTask, delay: Duration },
    /// The match is over.
    MatchOver { winner: Side },
}

impl Suspension {
    /// The open human window, if any.
    #[must_use]
    pub fn window(&self) -> Option<ResponseWindow> {
        match self {
            Suspension::AwaitingHuman(window) => Some(*window),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_opponent_thinking(&self) -> bool {
        matches!(self, Suspension::OpponentThinking { .. })
    }
}
