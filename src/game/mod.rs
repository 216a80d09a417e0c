//! The match: cumulative scores, lead alternation, and the engine that
//! drives rounds between the human and the opponent policy.
//!
//! ## Suspensions
//!
//! The engine never sleeps or spawns timers. Each call leaves it parked on
//! a single [`Suspension`]: a numbered human [`ResponseWindow`] whose
//! timeout the presentation layer reports back, or an opponent deliberation
//! delay after which it calls [`MatchEngine::resume_opponent`].

pub mod suspension;
pub mod state;
pub mod engine;

pub use engine::MatchEngine;
pub use state::{MatchState, RoundRecord, MATCH_POINTS};
pub use suspension::{OpponentTask, ResponseWindow, Suspension, WindowContext, WindowId};
