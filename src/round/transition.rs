//! Pure round transitions.
//!
//! Each transition validates against `&self` first and only then builds the
//! next state from a clone, returning it with the events it produced.

use tracing::debug;

use crate::core::{EngineError, RuleViolation, Side, SideMap};
use crate::events::{Event, PlaySnapshot, TrickSnapshot};

use super::state::{EndReason, RoundOutcome, RoundPhase, RoundState, Step};
use super::tricks::{round_verdict, TrickOutcome};
use super::wager::{
    next_wager, HandOfElevenChoice, PendingRaise, RaiseResponse, Wager, HAND_OF_ELEVEN_WAGER,
    WAGER_CEILING,
};

/// Points a declined hand of eleven concedes.
pub const HAND_OF_ELEVEN_FORFEIT: u8 = 1;

impl RoundState {
    /// `side` answers its hand of eleven.
    pub fn choose_hand_of_eleven(
        &self,
        side: Side,
        choice: HandOfElevenChoice,
    ) -> Result<Step, EngineError> {
        self.ensure_hand_of_eleven(side)?;
        debug!(round = self.number, %side, ?choice, "hand of eleven decided");

        let mut next = self.clone();
        let mut events = vec![Event::HandOfElevenDecided { side, choice }];
        match choice {
            HandOfElevenChoice::Play => {
                next.wager = Wager::locked(HAND_OF_ELEVEN_WAGER);
                next.phase = RoundPhase::Playing;
                events.push(Event::WagerChanged(next.wager_snapshot()));
            }
            HandOfElevenChoice::Fold => {
                next.end(side.opponent(), HAND_OF_ELEVEN_FORFEIT, EndReason::HandOfElevenDeclined);
            }
        }
        Ok(Step { state: next, events })
    }

    /// `side` plays the card at `index` of its hand.
    pub fn play_card(&self, side: Side, index: usize) -> Result<Step, EngineError> {
        self.ensure_playing()?;
        if self.wager.is_pending() {
            return Err(RuleViolation::RaisePending.into());
        }
        if self.turn != side {
            return Err(RuleViolation::OutOfTurn.into());
        }
        let hand_len = self.hands[side].len();
        if index >= hand_len {
            return Err(EngineError::invalid_argument(format!(
                "card index {index} out of range for a hand of {hand_len}"
            )));
        }

        let mut next = self.clone();
        let card = next.hands[side].remove(index);
        next.table[side] = Some(card);
        next.turn = side.opponent();
        debug!(round = self.number, %side, %card, "card played");

        let mut events = vec![Event::CardPlayed(PlaySnapshot {
            side,
            card,
            is_trump: card.is_trump(self.indicator_rank()),
            turn: next.turn,
        })];
        if let (Some(player), Some(cpu)) = (next.table[Side::Player], next.table[Side::Cpu]) {
            let outcome = TrickOutcome::compare(player, cpu, next.indicator_rank());
            events.push(next.close_trick(outcome));
        }
        Ok(Step { state: next, events })
    }

    /// `side` asks to raise the wager.
    pub fn call_raise(&self, side: Side) -> Result<Step, EngineError> {
        self.check_raise(side)?;
        let mut next = self.clone();
        next.wager.open_raise(side);
        debug!(round = self.number, %side, offered = next_wager(self.wager.value), "raise called");
        let events = vec![Event::WagerChanged(next.wager_snapshot())];
        Ok(Step { state: next, events })
    }

    /// `side` answers the pending raise.
    pub fn respond_to_raise(&self, side: Side, response: RaiseResponse) -> Result<Step, EngineError> {
        let pending = self.pending_for(side)?;
        if response == RaiseResponse::RaiseAgain && pending.offered >= WAGER_CEILING {
            return Err(RuleViolation::WagerCeiling.into());
        }
        debug!(round = self.number, %side, ?response, offered = pending.offered, "raise answered");

        let mut next = self.clone();
        let mut events = vec![Event::RaiseAnswered { side, response }];
        match response {
            RaiseResponse::Accept => {
                next.wager.value = pending.offered;
                next.wager.pending = None;
                events.push(Event::WagerChanged(next.wager_snapshot()));
            }
            RaiseResponse::RaiseAgain => {
                next.wager.value = pending.offered;
                next.wager.pending = None;
                next.wager.open_raise(side);
                events.push(Event::WagerChanged(next.wager_snapshot()));
            }
            RaiseResponse::Fold => {
                next.wager.pending = None;
                next.end(pending.caller, self.wager.value, EndReason::Fold);
            }
        }
        Ok(Step { state: next, events })
    }

    /// `side` concedes the round on its own turn at the current value.
    pub fn fold(&self, side: Side) -> Result<Step, EngineError> {
        self.ensure_can_concede(side)?;
        debug!(round = self.number, %side, value = self.wager.value, "folded");
        let mut next = self.clone();
        next.end(side.opponent(), self.wager.value, EndReason::Fold);
        Ok(Step { state: next, events: Vec::new() })
    }

    /// `side` let its response window elapse.
    ///
    /// Resolves to the default for whatever `side` was being asked: decline
    /// a hand of eleven, fold to a raise, or forfeit its turn.
    pub fn time_out(&self, side: Side) -> Result<Step, EngineError> {
        let mut next = self.clone();
        let mut events = Vec::new();
        match self.phase {
            RoundPhase::AwaitingHandOfEleven(s) if s == side => {
                events.push(Event::HandOfElevenDecided {
                    side,
                    choice: HandOfElevenChoice::Fold,
                });
                next.end(side.opponent(), HAND_OF_ELEVEN_FORFEIT, EndReason::Timeout);
            }
            RoundPhase::Playing if self.wager.is_pending() => {
                let pending = self.pending_for(side)?;
                events.push(Event::RaiseAnswered {
                    side,
                    response: RaiseResponse::Fold,
                });
                next.wager.pending = None;
                next.end(pending.caller, self.wager.value, EndReason::Timeout);
            }
            _ => {
                self.ensure_can_concede(side)?;
                next.end(side.opponent(), self.wager.value, EndReason::Timeout);
            }
        }
        debug!(round = self.number, %side, "response window elapsed");
        Ok(Step { state: next, events })
    }

    fn ensure_hand_of_eleven(&self, side: Side) -> Result<(), RuleViolation> {
        match self.phase {
            RoundPhase::AwaitingHandOfEleven(s) if s == side => Ok(()),
            RoundPhase::Resolved(_) => Err(RuleViolation::RoundResolved),
            _ => Err(RuleViolation::WrongDecision),
        }
    }

    fn ensure_can_concede(&self, side: Side) -> Result<(), RuleViolation> {
        self.ensure_playing()?;
        if self.wager.is_pending() {
            return Err(RuleViolation::RaisePending);
        }
        if self.turn != side {
            return Err(RuleViolation::OutOfTurn);
        }
        Ok(())
    }

    fn pending_for(&self, side: Side) -> Result<PendingRaise, RuleViolation> {
        self.ensure_playing()?;
        let pending = self.wager.pending.ok_or(RuleViolation::NoRaisePending)?;
        if pending.responder() != side {
            return Err(RuleViolation::OutOfTurn);
        }
        Ok(pending)
    }

    /// Record a finished trick and either end the round or pick the next
    /// leader: the trick's winner, or after a draw the side that followed.
    fn close_trick(&mut self, outcome: TrickOutcome) -> Event {
        self.table = SideMap::with_value(None);
        self.tricks.push(outcome);
        debug!(round = self.number, ?outcome, tricks = self.tricks.len(), "trick resolved");

        let next_turn = match round_verdict(&self.tricks) {
            Some(verdict) => {
                let points = if verdict.winner().is_some() { self.wager.value } else { 0 };
                self.phase = RoundPhase::Resolved(RoundOutcome {
                    winner: verdict.winner(),
                    points,
                    reason: EndReason::Tricks,
                });
                None
            }
            None => {
                self.turn = match outcome {
                    TrickOutcome::Won(side) => side,
                    TrickOutcome::Draw => self.turn.opponent(),
                };
                Some(self.turn)
            }
        };

        Event::TrickResolved(TrickSnapshot {
            outcome,
            history: self.tricks.to_vec(),
            next_turn,
        })
    }

    fn end(&mut self, winner: Side, points: u8, reason: EndReason) {
        self.phase = RoundPhase::Resolved(RoundOutcome {
            winner: Some(winner),
            points,
            reason,
        });
    }
}
