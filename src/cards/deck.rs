//! The 40-card Truco deck (no 8, 9 or 10).
//!
//! A deck lives for exactly one round: it is rebuilt and shuffled, three
//! cards go to each side, one more is turned up as the trump indicator and
//! the rest is discarded with the round.

use crate::core::{EngineError, GameRng};

use super::card::{Card, Rank, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();

/// A shuffled deck, dealt from the front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An unshuffled full deck in rank-major order.
    #[must_use]
    pub fn ordered() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A full deck, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck whose front is exactly `cards`, in order.
    ///
    /// Used to stage deals in tests and replays.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Rebuild all 40 cards and shuffle uniformly.
    pub fn reset(&mut self, rng: &mut GameRng) {
        *self = Self::shuffled(rng);
    }

    /// Remove and return `n` cards from the front.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if n > self.cards.len() {
            return Err(EngineError::invalid_argument(format!(
                "cannot deal {n} cards from a deck of {}",
                self.cards.len()
            )));
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Remove and return one card: the trump indicator.
    pub fn draw_one(&mut self) -> Result<Card, EngineError> {
        if self.cards.is_empty() {
            return Err(EngineError::invalid_argument("cannot draw from an empty deck"));
        }
        Ok(self.cards.remove(0))
    }

    /// Cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ordered_deck_is_complete() {
        let deck = Deck::ordered();
        assert_eq!(deck.remaining(), DECK_SIZE);
        let unique: HashSet<_> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 40);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(5));
        let b = Deck::shuffled(&mut GameRng::new(5));
        let c = Deck::shuffled(&mut GameRng::new(6));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deal_and_draw_without_replacement() {
        let mut deck = Deck::shuffled(&mut GameRng::new(1));
        let player = deck.deal(3).unwrap();
        let cpu = deck.deal(3).unwrap();
        let indicator = deck.draw_one().unwrap();

        let mut seen: HashSet<Card> = HashSet::new();
        for card in player.iter().chain(cpu.iter()).chain(std::iter::once(&indicator)) {
            assert!(seen.insert(*card), "{card} dealt twice");
        }
        assert_eq!(deck.remaining(), 33);
    }

    #[test]
    fn test_deal_too_many_fails_without_mutation() {
        let mut deck = Deck::stacked(vec![Card::new(Rank::Ace, Suit::Clubs)]);
        assert!(matches!(deck.deal(2), Err(EngineError::InvalidArgument { .. })));
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn test_draw_from_empty_fails() {
        let mut deck = Deck::stacked(Vec::new());
        assert!(deck.draw_one().is_err());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_reset_restores_full_deck() {
        let mut rng = GameRng::new(8);
        let mut deck = Deck::shuffled(&mut rng);
        deck.deal(7).unwrap();
        deck.reset(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);
    }
}
