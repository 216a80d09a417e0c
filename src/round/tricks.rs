//! Trick comparison and the best-of-three round verdict.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::Side;

/// Result of a single trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickOutcome {
    Won(Side),
    /// Equal power ("cangou").
    Draw,
}

impl TrickOutcome {
    /// Compare the two cards on the table.
    #[must_use]
    pub fn compare(player: Card, cpu: Card, indicator: Rank) -> Self {
        let p = player.power(indicator);
        let c = cpu.power(indicator);
        match p.cmp(&c) {
            std::cmp::Ordering::Greater => TrickOutcome::Won(Side::Player),
            std::cmp::Ordering::Less => TrickOutcome::Won(Side::Cpu),
            std::cmp::Ordering::Equal => TrickOutcome::Draw,
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            TrickOutcome::Won(side) => Some(side),
            TrickOutcome::Draw => None,
        }
    }

    #[must_use]
    pub fn is_draw(self) -> bool {
        self == TrickOutcome::Draw
    }
}

/// How a round's tricks came out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundVerdict {
    Winner(Side),
    Draw,
}

impl RoundVerdict {
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundVerdict::Winner(side) => Some(side),
            RoundVerdict::Draw => None,
        }
    }
}

/// Decide the round from the trick history, or `None` to keep playing.
///
/// Checks run in a fixed precedence; the order matters for histories that
/// several rules could describe.
#[must_use]
pub fn round_verdict(history: &[TrickOutcome]) -> Option<RoundVerdict> {
    let wins = |side| history.iter().filter(|t| **t == TrickOutcome::Won(side)).count();
    if wins(Side::Player) >= 2 {
        return Some(RoundVerdict::Winner(Side::Player));
    }
    if wins(Side::Cpu) >= 2 {
        return Some(RoundVerdict::Winner(Side::Cpu));
    }

    let first = *history.first()?;
    let second = history.get(1).copied();
    let third = history.get(2).copied();

    // Drawn first trick: the next decisive second trick settles it.
    if first.is_draw() {
        if let Some(TrickOutcome::Won(side)) = second {
            return Some(RoundVerdict::Winner(side));
        }
        if third == Some(TrickOutcome::Draw) {
            return Some(RoundVerdict::Draw);
        }
    }

    // Decisive first trick: a later draw hands the round to its winner.
    if let TrickOutcome::Won(side) = first {
        if second == Some(TrickOutcome::Draw) || third == Some(TrickOutcome::Draw) {
            return Some(RoundVerdict::Winner(side));
        }
    }

    // Two drawn tricks, third decisive.
    if let Some(TrickOutcome::Won(side)) = third {
        return Some(RoundVerdict::Winner(side));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use super::TrickOutcome::{Draw, Won};

    const P: TrickOutcome = Won(Side::Player);
    const C: TrickOutcome = Won(Side::Cpu);

    #[test]
    fn test_compare() {
        let indicator = Rank::Four; // trump is Five
        let five = Card::new(Rank::Five, Suit::Diamonds);
        let three = Card::new(Rank::Three, Suit::Clubs);
        let other_three = Card::new(Rank::Three, Suit::Hearts);

        assert_eq!(TrickOutcome::compare(five, three, indicator), P);
        assert_eq!(TrickOutcome::compare(three, five, indicator), C);
        assert_eq!(TrickOutcome::compare(three, other_three, indicator), Draw);
    }

    #[test]
    fn test_undecided_histories() {
        assert_eq!(round_verdict(&[]), None);
        assert_eq!(round_verdict(&[P]), None);
        assert_eq!(round_verdict(&[Draw]), None);
        assert_eq!(round_verdict(&[P, C]), None);
        assert_eq!(round_verdict(&[C, P]), None);
        assert_eq!(round_verdict(&[Draw, Draw]), None);
    }

    #[test]
    fn test_two_wins() {
        assert_eq!(round_verdict(&[P, P]), Some(RoundVerdict::Winner(Side::Player)));
        assert_eq!(round_verdict(&[C, P, C]), Some(RoundVerdict::Winner(Side::Cpu)));
        assert_eq!(round_verdict(&[P, C, P]), Some(RoundVerdict::Winner(Side::Player)));
    }

    #[test]
    fn test_draw_first_then_decisive() {
        assert_eq!(round_verdict(&[Draw, P]), Some(RoundVerdict::Winner(Side::Player)));
        assert_eq!(round_verdict(&[Draw, C]), Some(RoundVerdict::Winner(Side::Cpu)));
    }

    #[test]
    fn test_decisive_then_draw() {
        assert_eq!(round_verdict(&[P, Draw]), Some(RoundVerdict::Winner(Side::Player)));
        assert_eq!(round_verdict(&[C, Draw]), Some(RoundVerdict::Winner(Side::Cpu)));
    }

    #[test]
    fn test_split_then_draw_goes_to_first() {
        assert_eq!(round_verdict(&[P, C, Draw]), Some(RoundVerdict::Winner(Side::Player)));
        assert_eq!(round_verdict(&[C, P, Draw]), Some(RoundVerdict::Winner(Side::Cpu)));
    }

    #[test]
    fn test_three_draws() {
        assert_eq!(round_verdict(&[Draw, Draw, Draw]), Some(RoundVerdict::Draw));
    }

    #[test]
    fn test_two_draws_then_decisive() {
        assert_eq!(round_verdict(&[Draw, Draw, C]), Some(RoundVerdict::Winner(Side::Cpu)));
    }

    #[test]
    fn test_every_full_history_is_decided() {
        let outcomes = [P, C, Draw];
        for a in outcomes {
            for b in outcomes {
                for c in outcomes {
                    assert!(round_verdict(&[a, b, c]).is_some(), "{:?}", [a, b, c]);
                }
            }
        }
    }
}
