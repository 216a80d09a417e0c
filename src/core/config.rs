//! Engine configuration.
//!
//! Response windows and opponent deliberation are timing parameters only:
//! the engine never sleeps. It announces a window or a delay and the
//! presentation layer reports back when it elapsed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and seeding parameters for a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How long the human has to play a card (or raise/fold) on their turn.
    /// Elapsing forfeits the round.
    pub turn_window: Duration,

    /// How long the human has to answer a raise. Elapsing folds.
    pub raise_response_window: Duration,

    /// How long the human has to answer a hand of eleven. Elapsing declines.
    pub hand_of_eleven_window: Duration,

    /// Shortest opponent deliberation delay.
    pub opponent_delay_min: Duration,

    /// Longest opponent deliberation delay.
    pub opponent_delay_max: Duration,

    /// Seed for deck shuffling and opponent decisions.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_window: Duration::from_secs(15),
            raise_response_window: Duration::from_secs(12),
            hand_of_eleven_window: Duration::from_secs(10),
            opponent_delay_min: Duration::from_millis(1000),
            opponent_delay_max: Duration::from_millis(3000),
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the human turn window.
    #[must_use]
    pub fn with_turn_window(mut self, window: Duration) -> Self {
        self.turn_window = window;
        self
    }

    /// Set the raise response window.
    #[must_use]
    pub fn with_raise_response_window(mut self, window: Duration) -> Self {
        self.raise_response_window = window;
        self
    }

    /// Set the hand-of-eleven decision window.
    #[must_use]
    pub fn with_hand_of_eleven_window(mut self, window: Duration) -> Self {
        self.hand_of_eleven_window = window;
        self
    }

    /// Set the opponent deliberation delay range. Bounds are reordered if
    /// given backwards.
    #[must_use]
    pub fn with_opponent_delay(mut self, min: Duration, max: Duration) -> Self {
        self.opponent_delay_min = min.min(max);
        self.opponent_delay_max = max.max(min);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.turn_window, Duration::from_secs(15));
        assert_eq!(config.raise_response_window, Duration::from_secs(12));
        assert_eq!(config.hand_of_eleven_window, Duration::from_secs(10));
        assert!(config.opponent_delay_min <= config.opponent_delay_max);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_seed(7)
            .with_turn_window(Duration::from_secs(5))
            .with_opponent_delay(Duration::from_millis(900), Duration::from_millis(100));

        assert_eq!(config.seed, 7);
        assert_eq!(config.turn_window, Duration::from_secs(5));
        assert_eq!(config.opponent_delay_min, Duration::from_millis(100));
        assert_eq!(config.opponent_delay_max, Duration::from_millis(900));
    }

    #[test]
    fn test_serde() {
        let config = EngineConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
