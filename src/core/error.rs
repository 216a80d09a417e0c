//! Engine error types.
//!
//! Two classes exist. A `RuleViolation` is an action that is illegal in the
//! current state; `InvalidArgument` is an input of the wrong shape. Neither
//! is fatal and neither mutates state. Elapsed response windows are not
//! errors at all: they resolve to their default action.

use thiserror::Error;

/// An action that is illegal in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("it is not this side's turn")]
    OutOfTurn,
    #[error("only the human side can act through this entry point")]
    NotHumanSide,
    #[error("the wager is already at its ceiling")]
    WagerCeiling,
    #[error("the last raiser cannot raise again")]
    RepeatRaiser,
    #[error("the wager is locked for this round")]
    WagerLocked,
    #[error("raising is disabled during an iron hand")]
    IronHand,
    #[error("raising is disabled while a side is at eleven points")]
    HandOfEleven,
    #[error("a raise is already awaiting a response")]
    RaisePending,
    #[error("no raise is awaiting a response")]
    NoRaisePending,
    #[error("the engine is waiting for the opponent")]
    AwaitingOpponent,
    #[error("the engine is not waiting for this decision")]
    WrongDecision,
    #[error("the response window has already closed")]
    StaleWindow,
    #[error("the round is already resolved")]
    RoundResolved,
    #[error("no match is running")]
    MatchNotRunning,
}

/// Error returned by every engine entry point.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("rule violation: {0}")]
    Rule(#[from] RuleViolation),
    #[error("invalid argument: {detail}")]
    InvalidArgument { detail: String },
}

impl EngineError {
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            detail: detail.into(),
        }
    }

    /// The rule violated, if this is a rule violation.
    #[must_use]
    pub fn rule(&self) -> Option<RuleViolation> {
        match self {
            EngineError::Rule(v) => Some(*v),
            EngineError::InvalidArgument { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::from(RuleViolation::RepeatRaiser);
        assert_eq!(err.to_string(), "rule violation: the last raiser cannot raise again");

        let err = EngineError::invalid_argument("card index 5 out of range");
        assert_eq!(err.to_string(), "invalid argument: card index 5 out of range");
    }

    #[test]
    fn test_rule_accessor() {
        assert_eq!(
            EngineError::from(RuleViolation::WagerCeiling).rule(),
            Some(RuleViolation::WagerCeiling)
        );
        assert_eq!(EngineError::invalid_argument("x").rule(), None);
    }
}
