//! Property-based tests for card power, dealing, and whole matches.

mod common;

use std::collections::HashSet;

use proptest::prelude::*;

use truco_engine::cards::{Card, Deck, Rank, Suit, DECK_SIZE, TRUMP_BASE_POWER};
use truco_engine::core::{EngineConfig, GameRng, Side, SideMap};
use truco_engine::events::Event;
use truco_engine::game::{MatchEngine, Suspension, WindowContext, MATCH_POINTS};
use truco_engine::round::{HandOfElevenChoice, RaiseResponse, RoundState};

use common::init_logging;

fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// Drive a match to its end: the human always plays its first card,
/// accepts raises, and plays its hands of eleven.
fn play_out(engine: &mut MatchEngine) -> Vec<Event> {
    init_logging();
    let mut events = engine.start_match().unwrap();
    for _ in 0..5_000 {
        let step = match engine.suspension() {
            Suspension::MatchOver { .. } => return events,
            Suspension::OpponentThinking { .. } => engine.resume_opponent(),
            Suspension::AwaitingHuman(window) => match window.context {
                WindowContext::Turn => engine.submit_card_play(Side::Player, 0),
                WindowContext::RaiseResponse { .. } => engine.submit_raise_response(RaiseResponse::Accept),
                WindowContext::HandOfEleven => engine.submit_hand_of_eleven_choice(HandOfElevenChoice::Play),
            },
            Suspension::Idle => panic!("engine idle after start"),
        };
        events.extend(step.unwrap());
    }
    panic!("match did not finish");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: exactly one rank is trump, the one after the indicator.
    #[test]
    fn prop_single_trump_rank(indicator in rank()) {
        let trumps: Vec<Rank> = Rank::ALL
            .into_iter()
            .filter(|&r| Card::new(r, Suit::Clubs).power(indicator) >= TRUMP_BASE_POWER)
            .collect();
        let next = Rank::ALL[(indicator.index() + 1) % Rank::ALL.len()];
        prop_assert_eq!(trumps, vec![next]);
    }

    /// Property: trumps never tie and always beat plain cards; plain cards
    /// of equal rank tie.
    #[test]
    fn prop_power_ordering(indicator in rank(), a in (rank(), suit()), b in (rank(), suit())) {
        let (a, b) = (Card::new(a.0, a.1), Card::new(b.0, b.1));
        let (pa, pb) = (a.power(indicator), b.power(indicator));
        match (a.is_trump(indicator), b.is_trump(indicator)) {
            (true, true) => prop_assert_eq!(pa == pb, a == b),
            (true, false) => prop_assert!(pa > pb),
            (false, true) => prop_assert!(pa < pb),
            (false, false) => prop_assert_eq!(pa == pb, a.rank == b.rank),
        }
    }

    /// Property: a shuffled deck holds each of the 40 cards once.
    #[test]
    fn prop_shuffled_deck_complete(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(deck.remaining(), DECK_SIZE);
        let cards = deck.deal(DECK_SIZE).unwrap();
        let unique: HashSet<Card> = cards.iter().copied().collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
        prop_assert!(deck.is_empty());
    }

    /// Property: a deal never repeats a card.
    #[test]
    fn prop_deal_has_no_repeats(seed in any::<u64>()) {
        init_logging();
        let round = RoundState::deal(1, SideMap::with_value(0), Side::Player, &mut GameRng::new(seed)).unwrap();
        let mut seen: HashSet<Card> = HashSet::new();
        for (_, hand) in round.hands.iter() {
            prop_assert_eq!(hand.len(), 3);
            seen.extend(hand.iter().copied());
        }
        seen.insert(round.trump_indicator);
        prop_assert_eq!(seen.len(), 7);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: every match ends with one side at exactly 12, no score
    /// ever exceeds 12, and wagers stay on the ladder.
    #[test]
    fn prop_match_invariants(seed in any::<u64>()) {
        let mut engine = MatchEngine::new(EngineConfig::default().with_seed(seed));
        let events = play_out(&mut engine);

        let state = engine.match_state();
        let winner = state.winner.unwrap();
        prop_assert_eq!(state.scores[winner], MATCH_POINTS);
        prop_assert!(state.scores[winner.opponent()] < MATCH_POINTS);
        prop_assert_eq!(state.history.len() as u32, state.rounds_played);

        let mut previous_value = 0;
        let mut previous_scores = SideMap::with_value(0u8);
        for event in &events {
            match event {
                Event::RoundStarted(_) => previous_value = 0,
                Event::WagerChanged(w) => {
                    prop_assert!([1, 3, 6, 9, 12].contains(&w.value));
                    prop_assert!(w.value >= previous_value);
                    previous_value = w.value;
                }
                Event::RoundResolved(r) => {
                    for side in Side::ALL {
                        prop_assert!(r.scores[side] <= MATCH_POINTS);
                        prop_assert!(r.scores[side] >= previous_scores[side]);
                    }
                    previous_scores = r.scores;
                }
                _ => {}
            }
        }
    }

    /// Property: the same seed replays the same match.
    #[test]
    fn prop_seeded_replay(seed in any::<u64>()) {
        let config = EngineConfig::default().with_seed(seed);
        let first = play_out(&mut MatchEngine::new(config.clone()));
        let second = play_out(&mut MatchEngine::new(config));
        prop_assert_eq!(first, second);
    }
}
