//! Opponent decision policies.
//!
//! A policy only returns choices; the match engine applies them. Every
//! random draw goes through the `RandomSource` it is handed, so decisions
//! replay exactly under a seeded or scripted source.

use crate::cards::{hand_strength, Card, Rank};
use crate::core::RandomSource;
use crate::round::RaiseResponse;

use super::config::PolicyConfig;

/// How the scripted side decides.
pub trait OpponentPolicy: Send + Sync {
    /// Index of the card to play, given the card already on the table (if
    /// the opponent is following). `hand` is never empty.
    fn choose_card(&self, hand: &[Card], indicator: Rank, table: Option<Card>) -> usize;

    /// Index of the card to play when the hand is face down.
    fn choose_blind_card(&self, hand: &[Card], rng: &mut dyn RandomSource) -> usize {
        rng.below(hand.len())
    }

    /// Whether to call a raise on its turn. `score_gap` is cpu minus player.
    fn decide_call_raise(
        &self,
        hand: &[Card],
        indicator: Rank,
        score_gap: i32,
        rng: &mut dyn RandomSource,
    ) -> bool;

    /// How to answer a raise to `offered`.
    fn decide_raise_response(
        &self,
        hand: &[Card],
        indicator: Rank,
        offered: u8,
        rng: &mut dyn RandomSource,
    ) -> RaiseResponse;

    /// Whether to play its hand of eleven for 3 rather than concede 1.
    fn decide_hand_of_eleven(&self, hand: &[Card], indicator: Rank, rng: &mut dyn RandomSource) -> bool;
}

/// Hand-strength heuristics with bounded bluffing.
#[derive(Clone, Debug, Default)]
pub struct HeuristicOpponent {
    config: PolicyConfig,
}

impl HeuristicOpponent {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}

impl OpponentPolicy for HeuristicOpponent {
    /// Leading: the strongest card. Following: the cheapest card that still
    /// wins, else the weakest card.
    ///
    /// Ties go to the later card when leading and the earlier card when
    /// following.
    fn choose_card(&self, hand: &[Card], indicator: Rank, table: Option<Card>) -> usize {
        let powers = hand.iter().map(|c| c.power(indicator)).enumerate();
        let pick = match table {
            None => powers.max_by_key(|&(_, p)| p),
            Some(card) => {
                let to_beat = card.power(indicator);
                let cheapest_winner = powers.clone().filter(|&(_, p)| p > to_beat).min_by_key(|&(_, p)| p);
                cheapest_winner.or_else(|| powers.min_by_key(|&(_, p)| p))
            }
        };
        pick.map(|(i, _)| i).unwrap_or(0)
    }

    fn decide_call_raise(
        &self,
        hand: &[Card],
        indicator: Rank,
        score_gap: i32,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let (power, trumps) = hand_strength(hand, indicator);
        if power > self.config.raise_power || trumps > 0 {
            return true;
        }
        let bluff = if score_gap < -self.config.trailing_gap {
            self.config.trailing_bluff
        } else {
            self.config.raise_bluff
        };
        rng.chance(bluff)
    }

    fn decide_raise_response(
        &self,
        hand: &[Card],
        indicator: Rank,
        offered: u8,
        rng: &mut dyn RandomSource,
    ) -> RaiseResponse {
        let (power, _) = hand_strength(hand, indicator);
        let c = &self.config;

        if power > c.strong_power {
            if offered < crate::round::WAGER_CEILING && rng.chance(c.counter_raise_chance) {
                return RaiseResponse::RaiseAgain;
            }
            return RaiseResponse::Accept;
        }
        if power > c.fair_power && rng.chance(c.fair_accept) {
            return RaiseResponse::Accept;
        }
        if rng.chance(c.weak_accept) {
            return RaiseResponse::Accept;
        }
        RaiseResponse::Fold
    }

    fn decide_hand_of_eleven(&self, hand: &[Card], indicator: Rank, rng: &mut dyn RandomSource) -> bool {
        let (power, trumps) = hand_strength(hand, indicator);
        trumps > 0 || power > self.config.eleven_power || rng.chance(self.config.eleven_bluff)
    }
}
