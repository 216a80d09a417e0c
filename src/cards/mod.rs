//! Cards and the deck.
//!
//! ## Card
//!
//! `Card` is an immutable rank/suit pair. Its power is only meaningful
//! relative to the round's trump indicator; see [`Card::power`].
//!
//! ## Deck
//!
//! `Deck` is the round-scoped 40-card set: reset, deal 3 + 3, draw the
//! indicator, discard.

pub mod card;
pub mod deck;

pub use card::{hand_strength, Card, Rank, Suit, TRUMP_BASE_POWER};
pub use deck::{Deck, DECK_SIZE};
