//! The match engine.
//!
//! `MatchEngine` strings rounds together and decides who acts next. It
//! never blocks: after every call it is parked on exactly one
//! [`Suspension`], and the presentation layer answers it through one of the
//! entry points below.
//!
//! ```text
//! start_match ──► AwaitingHuman(window) ──submit_* / notify_response_timeout──┐
//!                 OpponentThinking{delay} ──resume_opponent───────────────────┤
//!                 MatchOver ◄── settle ◄──────────────────────────────────────┘
//! ```
//!
//! Every entry point runs against a copy of the session and commits only
//! on success, so a rejected call leaves the engine exactly as it was.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info};

use crate::cards::Deck;
use crate::core::{EngineConfig, EngineError, GameRng, RuleViolation, Side};
use crate::events::{Event, MatchEndSnapshot, RoundResultSnapshot, TableSnapshot};
use crate::opponent::{HeuristicOpponent, OpponentPolicy};
use crate::round::{HandOfElevenChoice, RaiseResponse, RoundPhase, RoundState, Step};

use super::state::MatchState;
use super::suspension::{OpponentTask, ResponseWindow, Suspension, WindowContext, WindowId};

/// Everything an entry point may change.
#[derive(Clone, Debug)]
struct Session {
    state: MatchState,
    round: Option<RoundState>,
    suspension: Suspension,
    last_window: u64,
    deck_rng: GameRng,
    policy_rng: GameRng,
    delay_rng: GameRng,
    stacked: VecDeque<Deck>,
}

/// Drives a match between the human side and an `OpponentPolicy`.
///
/// ## Example
///
/// ```
/// use truco_engine::core::EngineConfig;
/// use truco_engine::game::{MatchEngine, Suspension};
///
/// let mut engine = MatchEngine::new(EngineConfig::default().with_seed(7));
/// let events = engine.start_match().unwrap();
/// assert!(!events.is_empty());
/// assert!(!matches!(engine.suspension(), Suspension::Idle));
/// ```
pub struct MatchEngine<P: OpponentPolicy = HeuristicOpponent> {
    config: EngineConfig,
    policy: P,
    session: Session,
}

impl MatchEngine<HeuristicOpponent> {
    /// Engine with the stock heuristic opponent.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_policy(config, HeuristicOpponent::default())
    }
}

impl<P: OpponentPolicy> MatchEngine<P> {
    #[must_use]
    pub fn with_policy(config: EngineConfig, policy: P) -> Self {
        let root = GameRng::new(config.seed);
        let session = Session {
            state: MatchState::new(),
            round: None,
            suspension: Suspension::Idle,
            last_window: 0,
            deck_rng: root.for_context("deck"),
            policy_rng: root.for_context("policy"),
            delay_rng: root.for_context("delay"),
            stacked: VecDeque::new(),
        };
        Self {
            config,
            policy,
            session,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// What the engine is waiting for.
    #[must_use]
    pub fn suspension(&self) -> Suspension {
        self.session.suspension
    }

    pub fn match_state(&self) -> &MatchState {
        &self.session.state
    }

    /// The current (or, after the match, last) round, unfiltered.
    ///
    /// This exposes both hands, including face-down ones, and is meant for
    /// debugging and tests. Presentation code should read [`Self::snapshot`],
    /// which hides what the human may not see.
    pub fn round(&self) -> Option<&RoundState> {
        self.session.round.as_ref()
    }

    /// Read-only view of the whole table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let state = &self.session.state;
        TableSnapshot {
            scores: state.scores,
            next_starter: state.starter,
            rounds_played: state.rounds_played,
            winner: state.winner,
            round: self.session.round.as_ref().map(RoundState::view),
            suspension: self.session.suspension,
        }
    }

    /// Use `deck` for the next deal instead of shuffling. Decks queue up in
    /// the order given.
    pub fn stack_deck(&mut self, deck: Deck) {
        self.session.stacked.push_back(deck);
    }

    /// Reset scores to 0–0 with the human leading, and deal.
    pub fn start_match(&mut self) -> Result<Vec<Event>, EngineError> {
        self.start_match_from(MatchState::new())
    }

    /// Start play from a prepared match state, and deal. A state that is
    /// already won, or holds a score of 12, is rejected.
    pub fn start_match_from(&mut self, state: MatchState) -> Result<Vec<Event>, EngineError> {
        if state.is_over() {
            return Err(EngineError::invalid_argument("match state already has a winner"));
        }
        if state.has_finished_score() {
            return Err(EngineError::invalid_argument("match state has a finished score"));
        }
        self.transact(|tx| {
            info!(
                player = state.scores[Side::Player],
                cpu = state.scores[Side::Cpu],
                starter = %state.starter,
                "match started"
            );
            tx.session.state = state;
            tx.session.round = None;
            tx.deal_round()?;
            tx.settle()
        })
    }

    /// The human plays the card at `index` of their hand.
    pub fn submit_card_play(&mut self, side: Side, index: usize) -> Result<Vec<Event>, EngineError> {
        self.transact(|tx| {
            tx.human_window(side)?;
            let step = tx.round()?.play_card(Side::Player, index)?;
            tx.apply(step);
            tx.settle()
        })
    }

    /// The human asks to raise the wager.
    pub fn submit_raise_call(&mut self, side: Side) -> Result<Vec<Event>, EngineError> {
        self.transact(|tx| {
            tx.human_window(side)?;
            let step = tx.round()?.call_raise(Side::Player)?;
            tx.apply(step);
            tx.settle()
        })
    }

    /// The human answers the opponent's raise.
    pub fn submit_raise_response(&mut self, response: RaiseResponse) -> Result<Vec<Event>, EngineError> {
        self.transact(|tx| {
            tx.human_window(Side::Player)?;
            let step = tx.round()?.respond_to_raise(Side::Player, response)?;
            tx.apply(step);
            tx.settle()
        })
    }

    /// The human plays or declines their hand of eleven.
    pub fn submit_hand_of_eleven_choice(
        &mut self,
        choice: HandOfElevenChoice,
    ) -> Result<Vec<Event>, EngineError> {
        self.transact(|tx| {
            tx.human_window(Side::Player)?;
            let step = tx.round()?.choose_hand_of_eleven(Side::Player, choice)?;
            tx.apply(step);
            tx.settle()
        })
    }

    /// The human concedes the round at the current wager.
    pub fn submit_fold(&mut self) -> Result<Vec<Event>, EngineError> {
        self.transact(|tx| {
            tx.human_window(Side::Player)?;
            let step = tx.round()?.fold(Side::Player)?;
            tx.apply(step);
            tx.settle()
        })
    }

    /// The countdown for window `id` ran out.
    ///
    /// Applies the window's default: forfeit the turn, fold to the raise, or
    /// decline the hand of eleven. Any window other than the open one is
    /// stale and rejected.
    pub fn notify_response_timeout(&mut self, id: WindowId) -> Result<Vec<Event>, EngineError> {
        self.transact(|tx| {
            match tx.session.suspension {
                Suspension::AwaitingHuman(window) if window.id == id => {}
                Suspension::Idle => return Err(RuleViolation::MatchNotRunning.into()),
                _ => {
                    debug!(%id, "stale timeout ignored");
                    return Err(RuleViolation::StaleWindow.into());
                }
            }
            let step = tx.round()?.time_out(Side::Player)?;
            tx.apply(step);
            tx.settle()
        })
    }

    /// The announced deliberation delay has elapsed: apply the opponent's
    /// decision.
    pub fn resume_opponent(&mut self) -> Result<Vec<Event>, EngineError> {
        self.transact(|tx| {
            let task = match tx.session.suspension {
                Suspension::OpponentThinking { task, .. } => task,
                Suspension::AwaitingHuman(_) => return Err(RuleViolation::WrongDecision.into()),
                Suspension::Idle | Suspension::MatchOver { .. } => {
                    return Err(RuleViolation::MatchNotRunning.into())
                }
            };
            tx.opponent_act(task)?;
            tx.settle()
        })
    }

    fn transact(
        &mut self,
        f: impl FnOnce(&mut Transaction<'_, P>) -> Result<(), EngineError>,
    ) -> Result<Vec<Event>, EngineError> {
        let mut tx = Transaction {
            config: &self.config,
            policy: &self.policy,
            session: self.session.clone(),
            events: Vec::new(),
        };
        f(&mut tx)?;
        let Transaction { session, events, .. } = tx;
        self.session = session;
        Ok(events)
    }
}

/// A working copy of the session plus the events produced so far.
struct Transaction<'a, P> {
    config: &'a EngineConfig,
    policy: &'a P,
    session: Session,
    events: Vec<Event>,
}

impl<P: OpponentPolicy> Transaction<'_, P> {
    fn round(&self) -> Result<&RoundState, EngineError> {
        self.session
            .round
            .as_ref()
            .ok_or_else(|| RuleViolation::MatchNotRunning.into())
    }

    fn apply(&mut self, step: Step) {
        self.events.extend(step.events);
        self.session.round = Some(step.state);
    }

    /// The open human window, if `side` is the human and one is open.
    fn human_window(&self, side: Side) -> Result<ResponseWindow, EngineError> {
        if side != Side::Player {
            return Err(RuleViolation::NotHumanSide.into());
        }
        match self.session.suspension {
            Suspension::AwaitingHuman(window) => Ok(window),
            Suspension::OpponentThinking { .. } => Err(RuleViolation::AwaitingOpponent.into()),
            Suspension::Idle | Suspension::MatchOver { .. } => Err(RuleViolation::MatchNotRunning.into()),
        }
    }

    fn deal_round(&mut self) -> Result<(), EngineError> {
        let session = &mut self.session;
        let number = session.state.next_round_number();
        let deck = match session.stacked.pop_front() {
            Some(deck) => deck,
            None => Deck::shuffled(&mut session.deck_rng),
        };
        let round = RoundState::deal_from(number, session.state.scores, session.state.starter, deck)?;
        info!(
            round = number,
            kind = ?round.kind,
            starter = %round.starter,
            indicator = %round.trump_indicator,
            "round dealt"
        );
        self.events.push(Event::RoundStarted(round.start_snapshot()));
        self.events.push(Event::WagerChanged(round.wager_snapshot()));
        session.round = Some(round);
        Ok(())
    }

    /// Fold finished rounds into the match, deal the next one, and park on
    /// whatever comes next.
    fn settle(&mut self) -> Result<(), EngineError> {
        loop {
            let round = self.round()?;
            let Some(outcome) = round.outcome() else {
                self.suspend();
                return Ok(());
            };

            let number = round.number;
            let next = self.session.state.apply_round(number, round.kind, outcome);
            info!(
                round = number,
                winner = ?outcome.winner,
                points = outcome.points,
                reason = ?outcome.reason,
                player = next.scores[Side::Player],
                cpu = next.scores[Side::Cpu],
                "round resolved"
            );
            self.events.push(Event::RoundResolved(RoundResultSnapshot {
                round: number,
                winner: outcome.winner,
                points: outcome.points,
                reason: outcome.reason,
                scores: next.scores,
                next_starter: next.starter,
            }));
            self.session.state = next;

            if let Some(winner) = self.session.state.winner {
                let state = &self.session.state;
                info!(%winner, rounds = state.rounds_played, "match over");
                self.events.push(Event::MatchEnded(MatchEndSnapshot {
                    winner,
                    player_won: winner == Side::Player,
                    scores: state.scores,
                    rounds_played: state.rounds_played,
                }));
                self.session.suspension = Suspension::MatchOver { winner };
                return Ok(());
            }
            self.deal_round()?;
        }
    }

    /// Park on the decision the current round is waiting for.
    fn suspend(&mut self) {
        let Some((side, context)) = self.session.round.as_ref().and_then(awaited) else {
            return;
        };
        match side {
            Side::Player => {
                let duration = match context {
                    WindowContext::Turn => self.config.turn_window,
                    WindowContext::RaiseResponse { .. } => self.config.raise_response_window,
                    WindowContext::HandOfEleven => self.config.hand_of_eleven_window,
                };
                self.session.last_window += 1;
                let window = ResponseWindow {
                    id: WindowId(self.session.last_window),
                    context,
                    duration,
                };
                debug!(id = %window.id, ?context, "awaiting human");
                self.session.suspension = Suspension::AwaitingHuman(window);
                self.events.push(Event::InputRequested(window));
            }
            Side::Cpu => {
                let task = match context {
                    WindowContext::Turn => OpponentTask::Turn,
                    WindowContext::RaiseResponse { .. } => OpponentTask::RaiseResponse,
                    WindowContext::HandOfEleven => OpponentTask::HandOfEleven,
                };
                let delay = self.sample_delay();
                debug!(?task, ?delay, "opponent thinking");
                self.session.suspension = Suspension::OpponentThinking { task, delay };
                self.events.push(Event::OpponentThinking { task, delay });
            }
        }
    }

    fn sample_delay(&mut self) -> Duration {
        let millis = |d: Duration| u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        let min = millis(self.config.opponent_delay_min);
        let max = millis(self.config.opponent_delay_max).max(min);
        Duration::from_millis(self.session.delay_rng.gen_range_inclusive(min..=max))
    }

    fn opponent_act(&mut self, task: OpponentTask) -> Result<(), EngineError> {
        let policy = self.policy;
        let session = &mut self.session;
        let rng = &mut session.policy_rng;
        let round = session
            .round
            .as_ref()
            .ok_or(EngineError::Rule(RuleViolation::MatchNotRunning))?;
        let cpu = Side::Cpu;
        let hand = round.hands[cpu].as_slice();
        let indicator = round.indicator_rank();

        let step = match task {
            OpponentTask::HandOfEleven => {
                let choice = if policy.decide_hand_of_eleven(hand, indicator, rng) {
                    HandOfElevenChoice::Play
                } else {
                    HandOfElevenChoice::Fold
                };
                debug!(?choice, "opponent answered hand of eleven");
                round.choose_hand_of_eleven(cpu, choice)?
            }
            OpponentTask::RaiseResponse => {
                let offered = round
                    .wager
                    .pending
                    .map(|p| p.offered)
                    .ok_or(EngineError::Rule(RuleViolation::NoRaisePending))?;
                let response = policy.decide_raise_response(hand, indicator, offered, rng);
                debug!(?response, offered, "opponent answered raise");
                round.respond_to_raise(cpu, response)?
            }
            OpponentTask::Turn if round.is_iron_hand() => {
                let index = policy.choose_blind_card(hand, rng);
                round.play_card(cpu, index)?
            }
            OpponentTask::Turn => {
                let gap = i32::from(round.scores[cpu]) - i32::from(round.scores[Side::Player]);
                if round.check_raise(cpu).is_ok() && policy.decide_call_raise(hand, indicator, gap, rng) {
                    debug!(gap, "opponent calls a raise");
                    round.call_raise(cpu)?
                } else {
                    let index = policy.choose_card(hand, indicator, round.table[Side::Player]);
                    round.play_card(cpu, index)?
                }
            }
        };
        self.apply(step);
        Ok(())
    }
}

/// Who the round is waiting for, and for what. `None` once resolved.
fn awaited(round: &RoundState) -> Option<(Side, WindowContext)> {
    match round.phase {
        RoundPhase::AwaitingHandOfEleven(side) => Some((side, WindowContext::HandOfEleven)),
        RoundPhase::Playing => Some(match round.wager.pending {
            Some(pending) => (
                pending.responder(),
                WindowContext::RaiseResponse {
                    offered: pending.offered,
                },
            ),
            None => (round.turn, WindowContext::Turn),
        }),
        RoundPhase::Resolved(_) => None,
    }
}
