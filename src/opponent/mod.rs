//! The scripted opponent.
//!
//! `OpponentPolicy` is the seam the match engine calls whenever the cpu side
//! has to act; `HeuristicOpponent` is the stock implementation.

pub mod config;
pub mod policy;

pub use config::PolicyConfig;
pub use policy::{HeuristicOpponent, OpponentPolicy};
