//! Ranks, suits and card power.
//!
//! ## Power
//!
//! A card's combat power depends on the trump indicator ("vira") turned up
//! after the deal. The rank immediately after the indicator's rank, wrapping
//! from 3 back to 4, is the trump rank ("manilha"):
//!
//! - trump cards score `100 + suit order`, so they beat everything else and
//!   never tie among themselves
//! - every other card scores its index in the base rank order, so equal
//!   ranks of different suits tie
//!
//! ```
//! use truco_engine::cards::{Card, Rank, Suit};
//!
//! let indicator = Rank::Seven;
//! assert_eq!(indicator.trump(), Rank::Queen);
//! assert_eq!(Card::new(Rank::Queen, Suit::Clubs).power(indicator), 103);
//! assert_eq!(Card::new(Rank::Three, Suit::Hearts).power(indicator), 9);
//! ```

use serde::{Deserialize, Serialize};

/// Card rank, in base strength order (weakest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    /// All ranks in base strength order.
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// Position in the base strength order (0..=9).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The trump rank when `self` is the indicator: the next rank, cyclically.
    #[must_use]
    pub const fn trump(self) -> Rank {
        Rank::ALL[(self.index() + 1) % Rank::ALL.len()]
    }

    /// Face symbol as printed on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
        }
    }
}

/// Card suit. Declaration order is the trump tiebreak order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    /// All suits in tiebreak order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    /// Tiebreak weight among trump cards (♦ 0 < ♠ 1 < ♥ 2 < ♣ 3).
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
        }
    }

    /// Red suits, for presentation.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// Power score of every trump card before the suit tiebreak is added.
pub const TRUMP_BASE_POWER: u8 = 100;

/// An immutable rank/suit pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Whether this card is trump for the given indicator rank.
    #[must_use]
    pub fn is_trump(self, indicator: Rank) -> bool {
        self.rank == indicator.trump()
    }

    /// Combat power relative to the given indicator rank.
    #[must_use]
    pub fn power(self, indicator: Rank) -> u8 {
        if self.is_trump(indicator) {
            TRUMP_BASE_POWER + self.suit.order()
        } else {
            self.rank.index() as u8
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Summed power of a hand and how many trumps it holds.
#[must_use]
pub fn hand_strength(hand: &[Card], indicator: Rank) -> (u32, usize) {
    hand.iter().fold((0u32, 0usize), |(sum, trumps), card| {
        let power = card.power(indicator);
        (sum + u32::from(power), trumps + usize::from(card.is_trump(indicator)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trump_wraps_around() {
        assert_eq!(Rank::Four.trump(), Rank::Five);
        assert_eq!(Rank::Seven.trump(), Rank::Queen);
        assert_eq!(Rank::Two.trump(), Rank::Three);
        assert_eq!(Rank::Three.trump(), Rank::Four);
    }

    #[test]
    fn test_base_power_follows_rank_order() {
        let indicator = Rank::Three; // trump is Four
        for pair in Rank::ALL[1..].windows(2) {
            let lo = Card::new(pair[0], Suit::Clubs).power(indicator);
            let hi = Card::new(pair[1], Suit::Diamonds).power(indicator);
            assert!(lo < hi, "{:?} should be weaker than {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_trump_outranks_strongest_plain_card() {
        let indicator = Rank::Four; // trump is Five
        let weakest_trump = Card::new(Rank::Five, Suit::Diamonds);
        let three = Card::new(Rank::Three, Suit::Clubs);
        assert!(weakest_trump.power(indicator) > three.power(indicator));
        assert!(weakest_trump.is_trump(indicator));
        assert!(!three.is_trump(indicator));
    }

    #[test]
    fn test_trump_suit_tiebreak() {
        let indicator = Rank::King; // trump is Ace
        let powers: Vec<u8> = Suit::ALL
            .iter()
            .map(|&s| Card::new(Rank::Ace, s).power(indicator))
            .collect();
        assert_eq!(powers, vec![100, 101, 102, 103]);
    }

    #[test]
    fn test_plain_cards_tie_across_suits() {
        let indicator = Rank::Four;
        let a = Card::new(Rank::King, Suit::Hearts);
        let b = Card::new(Rank::King, Suit::Spades);
        assert_eq!(a.power(indicator), b.power(indicator));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Q♥");
    }

    #[test]
    fn test_hand_strength() {
        let indicator = Rank::Six; // trump is Seven
        let hand = [
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Three, Suit::Diamonds),
            Card::new(Rank::Four, Suit::Hearts),
        ];
        assert_eq!(hand_strength(&hand, indicator), (103 + 9, 1));
    }
}
