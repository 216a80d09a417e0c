//! # truco-engine
//!
//! Rules engine for heads-up Truco against a scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Round and match state are plain values. Every
//!    transition borrows the current value and returns the next one, so a
//!    rejected action can never leave a half-applied state behind.
//!
//! 2. **Explicit suspensions**: The engine never sleeps. It announces a
//!    numbered response window or an opponent delay and waits for the
//!    presentation layer to report back.
//!
//! 3. **Injectable randomness**: Deck shuffles and opponent bluffs draw from
//!    seeded streams (`GameRng`) behind the `RandomSource` trait, so whole
//!    matches replay exactly.
//!
//! ## Modules
//!
//! - `core`: Sides, per-side storage, RNG, configuration, errors
//! - `cards`: Ranks, suits, trump power, the 40-card deck
//! - `opponent`: The opponent policy trait and the stock heuristic
//! - `round`: One deal: tricks, the wager ladder, hand of eleven, iron hand
//! - `events`: Notifications and read-only snapshots for rendering
//! - `game`: Match scores and the suspension-driven `MatchEngine`

pub mod core;
pub mod cards;
pub mod opponent;
pub mod round;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{EngineConfig, EngineError, GameRng, RandomSource, RuleViolation, Side, SideMap};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::opponent::{HeuristicOpponent, OpponentPolicy, PolicyConfig};

pub use crate::round::{
    EndReason, HandOfElevenChoice, RaiseResponse, RoundKind, RoundOutcome, RoundState, TrickOutcome,
    Wager,
};

pub use crate::events::{Event, TableSnapshot};

pub use crate::game::{MatchEngine, MatchState, ResponseWindow, Suspension, WindowContext, WindowId};
