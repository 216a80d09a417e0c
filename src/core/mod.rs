//! Core engine types: sides, RNG, configuration, errors.
//!
//! Everything here is independent of Truco's card and wager rules.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use config::EngineConfig;
pub use error::{EngineError, RuleViolation};
