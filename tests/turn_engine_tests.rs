//! Turn engine session tests.
//!
//! These drive `TurnEngine` through its public commands only, the way a
//! renderer would.

use monster_duel::{
    Actor, Card, GreedyOpponent, Hand, LogSource, MatchConfig, OpponentPolicy, Outcome, Rejection,
    SessionState, TurnEngine, DECK_SIZE,
};

/// Play one full player turn with a simple script: summon if the field is
/// empty, play every support card, attack if possible, end the turn.
///
/// Returns `None` if the player is left without a legal way to end the turn.
fn autoplay_turn<P: OpponentPolicy>(engine: &mut TurnEngine<P>) -> Option<Outcome> {
    summon_first_monster(engine);

    while let Some(index) = engine.snapshot().player_hand.iter().position(Card::is_support) {
        engine.play_card(index).expect("support cards are always playable");
    }

    // Scout may have drawn a monster for an empty field.
    summon_first_monster(engine);

    let snap = engine.snapshot();
    if snap.player_field.is_some() && snap.computer_field.is_some() && !snap.has_attacked {
        let outcome = engine.attack().expect("attack with both fields occupied");
        if outcome.is_match_over() {
            return Some(outcome);
        }
    }

    if !engine.can_end_turn() {
        return None;
    }
    Some(engine.end_turn().expect("end turn with a monster on the field"))
}

fn summon_first_monster<P: OpponentPolicy>(engine: &mut TurnEngine<P>) {
    let snap = engine.snapshot();
    if snap.player_field.is_none() {
        if let Some(index) = snap.player_hand.iter().position(Card::is_monster) {
            engine.play_card(index).expect("summon onto an empty field");
        }
    }
}

/// Test the opening deal of a new session.
#[test]
fn test_new_engine_deals_opening_hands() {
    let engine = TurnEngine::with_seed(42);
    let snap = engine.snapshot();

    assert_eq!(snap.match_number, 1);
    assert_eq!(snap.active, Actor::Player);
    assert_eq!(snap.player_hand.len(), 6);
    assert_eq!(snap.computer_hand_size, 5);
    assert_eq!(snap.deck_size, DECK_SIZE - 11);
    assert_eq!(engine.seed(), 42);

    // Alternating deal: player, computer, player, ...
    let sources: Vec<_> = engine.log().iter().take(4).map(|e| e.source).collect();
    assert_eq!(
        sources,
        vec![
            LogSource::Player,
            LogSource::Computer,
            LogSource::Player,
            LogSource::Computer,
        ]
    );
    assert!(engine
        .log()
        .iter()
        .filter(|e| e.source == LogSource::Computer)
        .all(|e| e.message == "Computer drew a card"));
}

/// Test that a seed fully determines a session.
#[test]
fn test_same_seed_same_session() {
    let mut first = TurnEngine::with_seed(1234);
    let mut second = TurnEngine::with_seed(1234);

    for _ in 0..40 {
        let a = autoplay_turn(&mut first);
        let b = autoplay_turn(&mut second);
        assert_eq!(a, b);
        if a.is_none() {
            break;
        }
    }

    assert_eq!(first.snapshot(), second.snapshot());
    let first_log: Vec<_> = first.log().messages().collect();
    let second_log: Vec<_> = second.log().messages().collect();
    assert_eq!(first_log, second_log);
}

/// Test that different seeds deal different hands.
#[test]
fn test_different_seeds_differ() {
    let a = TurnEngine::with_seed(1).snapshot();
    let b = TurnEngine::with_seed(2).snapshot();

    assert_ne!(a.player_hand, b.player_hand);
}

/// Test that matches finish, report a result and restart cleanly.
#[test]
fn test_matches_complete_and_restart() {
    let mut finished = 0;

    for seed in 0..20 {
        let mut engine = TurnEngine::with_seed(seed);

        for _ in 0..300 {
            let Some(outcome) = autoplay_turn(&mut engine) else {
                break;
            };
            let Outcome::MatchOver(result) = outcome else {
                continue;
            };
            finished += 1;

            let winning_count = match result.winner {
                Actor::Player => result.defeated_by_player,
                Actor::Computer => result.defeated_by_computer,
            };
            assert_eq!(winning_count, 3);
            assert!(result.is_winner(result.winner));
            assert!(!result.is_winner(result.winner.opponent()));

            let snap = engine.snapshot();
            assert_eq!(snap.match_number, result.match_number + 1);
            assert_eq!(snap.active, Actor::Player);
            assert_eq!(snap.defeated_by_player, 0);
            assert_eq!(snap.defeated_by_computer, 0);
            assert!(snap.player_field.is_none());
            assert!(snap.computer_field.is_none());
            assert_eq!(snap.player_hand.len(), 6);
            assert_eq!(snap.computer_hand_size, 5);
            assert_eq!(snap.deck_size, DECK_SIZE - 11);
        }

        let wins = engine.wins();
        assert_eq!(
            wins[Actor::Player] + wins[Actor::Computer],
            engine.match_number() - 1
        );
    }

    assert!(finished > 0, "no match finished across 20 seeds");
}

/// Test that a lower win threshold ends matches sooner.
#[test]
fn test_custom_win_threshold() {
    let config = MatchConfig::new().with_seed(9).with_win_threshold(1);
    let mut engine = TurnEngine::new(config);

    for _ in 0..100 {
        match autoplay_turn(&mut engine) {
            Some(Outcome::MatchOver(result)) => {
                assert_eq!(result.defeated_by_player.max(result.defeated_by_computer), 1);
                return;
            }
            Some(Outcome::Continue) => {}
            None => break,
        }
    }
    panic!("no monster was defeated");
}

/// Test the serialized snapshot hides the computer's hand.
#[test]
fn test_snapshot_serializes_to_json() {
    let engine = TurnEngine::with_seed(5);
    let value = serde_json::to_value(engine.snapshot()).unwrap();

    assert_eq!(value["match_number"], 1);
    assert_eq!(value["active"], "Player");
    assert_eq!(value["player_hand"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["computer_hand_size"], 5);
    assert!(value.get("computer_hand").is_none());
    assert!(value["player_field"].is_null());
}

/// Test reading only the entries a command produced.
#[test]
fn test_log_since_returns_new_entries() {
    let mut engine = TurnEngine::with_seed(77);
    let Some(index) = engine.snapshot().player_hand.iter().position(Card::is_monster) else {
        return;
    };
    engine.play_card(index).unwrap();

    let mark = engine.log().len() as u64;
    engine.end_turn().unwrap();

    let new: Vec<_> = engine.log().since(mark).collect();
    assert!(!new.is_empty());
    assert_eq!(new[0].message, "Computer drew a card");
    assert!(new.iter().all(|e| e.sequence >= mark));
    // Every turn handoff ends with the player's draw, even across a restart.
    assert!(new.last().is_some_and(|e| e.message.starts_with("You drew ")));
}

/// Opponent that never summons.
#[derive(Clone, Debug)]
struct Pacifist;

impl OpponentPolicy for Pacifist {
    fn choose_summon(&self, _hand: &Hand) -> Option<usize> {
        None
    }

    fn choose_support(&self, hand: &Hand) -> Option<usize> {
        GreedyOpponent.choose_support(hand)
    }
}

/// Test plugging in a custom opponent policy.
#[test]
fn test_custom_policy() {
    let mut engine = TurnEngine::with_policy(MatchConfig::new().with_seed(3), Pacifist);

    for _ in 0..10 {
        assert!(engine.side(Actor::Computer).field.is_empty());
        if autoplay_turn(&mut engine).is_none() {
            break;
        }
        assert_eq!(engine.attack(), Err(Rejection::NoDefender));
    }
    assert_eq!(engine.score().defeated_by(Actor::Player), 0);
    assert_eq!(engine.score().defeated_by(Actor::Computer), 0);
}

/// Test that rejected commands leave the engine untouched.
#[test]
fn test_rejections_leave_state_untouched() {
    let mut engine = TurnEngine::with_seed(11);
    let before = engine.snapshot();
    let log_len = engine.log().len();
    let hand_size = before.player_hand.len();

    assert_eq!(engine.end_turn(), Err(Rejection::NoMonsterSummoned));
    assert_eq!(engine.attack(), Err(Rejection::NoAttacker));
    assert_eq!(
        engine.play_card(hand_size + 3),
        Err(Rejection::InvalidHandIndex { index: hand_size + 3, hand_size })
    );

    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.log().len(), log_len);
}

/// Test the second summon in one turn is refused.
#[test]
fn test_second_summon_refused() {
    let mut engine = TurnEngine::with_seed(21);
    let monsters: Vec<_> = engine
        .snapshot()
        .player_hand
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_monster())
        .map(|(i, _)| i)
        .collect();
    if monsters.len() < 2 {
        return;
    }

    engine.play_card(monsters[0]).unwrap();
    // Indices after the removed card shift down by one.
    let second = monsters[1] - 1;
    assert_eq!(engine.play_card(second), Err(Rejection::FieldOccupied));
    assert_eq!(engine.snapshot().field_prompt(), "Your Monster (Click to Attack)");
}

/// Test that a saved session resumes exactly, reshuffles included.
#[test]
fn test_saved_session_resumes_identically() {
    let mut engine = TurnEngine::with_seed(2024);
    for _ in 0..8 {
        if autoplay_turn(&mut engine).is_none() {
            return;
        }
    }

    let json = serde_json::to_string(&engine.save()).unwrap();
    let saved: SessionState = serde_json::from_str(&json).unwrap();
    assert_eq!(saved, engine.save());

    let mut resumed = TurnEngine::restore(saved, GreedyOpponent);
    assert_eq!(resumed.snapshot(), engine.snapshot());
    assert_eq!(resumed.seed(), 2024);

    // Long enough to empty the deck at least once.
    for _ in 0..40 {
        let a = autoplay_turn(&mut engine);
        let b = autoplay_turn(&mut resumed);
        assert_eq!(a, b);
        if a.is_none() {
            break;
        }
    }

    assert_eq!(resumed.snapshot(), engine.snapshot());
    assert_eq!(resumed.log(), engine.log());
}

/// Test that a zero win threshold cannot be loaded from JSON.
#[test]
fn test_zero_win_threshold_rejected_from_json() {
    let parsed = serde_json::from_str::<MatchConfig>(r#"{"seed": 1, "win_threshold": 0}"#);
    assert!(parsed.is_err());
}
