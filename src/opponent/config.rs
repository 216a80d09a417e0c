//! Tuning for the heuristic opponent.

use serde::{Deserialize, Serialize};

/// Thresholds (on summed hand power) and probabilities for each decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Hand of eleven: play when summed power exceeds this.
    pub eleven_power: u32,
    /// Hand of eleven: otherwise play with this probability.
    pub eleven_bluff: f64,

    /// Raise call: call when summed power exceeds this.
    pub raise_power: u32,
    /// Raise call: otherwise call with this probability.
    pub raise_bluff: f64,
    /// Raise call: bluff probability when trailing by more than `trailing_gap`.
    pub trailing_bluff: f64,
    pub trailing_gap: i32,

    /// Raise response: always accept above this power.
    pub strong_power: u32,
    /// Raise response: chance a strong hand raises again instead.
    pub counter_raise_chance: f64,
    /// Raise response: above this power accept with `fair_accept`.
    pub fair_power: u32,
    pub fair_accept: f64,
    /// Raise response: last-resort accept probability.
    pub weak_accept: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            eleven_power: 30,
            eleven_bluff: 0.3,
            raise_power: 150,
            raise_bluff: 0.15,
            trailing_bluff: 0.35,
            trailing_gap: 3,
            strong_power: 100,
            counter_raise_chance: 0.4,
            fair_power: 50,
            fair_accept: 0.5,
            weak_accept: 0.15,
        }
    }
}

impl PolicyConfig {
    /// A policy that never bluffs or gambles: only hand strength decides.
    #[must_use]
    pub fn cautious() -> Self {
        Self {
            eleven_bluff: 0.0,
            raise_bluff: 0.0,
            trailing_bluff: 0.0,
            counter_raise_chance: 0.0,
            fair_accept: 0.0,
            weak_accept: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() {
        let config = PolicyConfig::cautious();
        let json = serde_json::to_string(&config).unwrap();
        let back: PolicyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
