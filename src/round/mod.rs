//! The round engine: one deal, resolved by best-of-three tricks.
//!
//! ## Life cycle
//!
//! `deal → (hand of eleven decision)? → playing ⇄ trick resolved → resolved`
//!
//! A wager overlay runs alongside play: a raise suspends trick flow until
//! the other side accepts, raises again, or folds.
//!
//! All transitions are pure functions on `RoundState`; see `transition.rs`.

pub mod wager;
pub mod tricks;
pub mod state;
pub mod transition;

pub use state::{
    EndReason, Hand, RoundKind, RoundOutcome, RoundPhase, RoundState, Step, TrickHistory, ELEVEN, HAND_SIZE,
};
pub use transition::HAND_OF_ELEVEN_FORFEIT;
pub use tricks::{round_verdict, RoundVerdict, TrickOutcome};
pub use wager::{
    next_wager, HandOfElevenChoice, PendingRaise, RaiseResponse, Raiser, Wager, BASE_WAGER,
    HAND_OF_ELEVEN_WAGER, WAGER_CEILING,
};
