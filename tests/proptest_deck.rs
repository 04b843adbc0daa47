// Property-based tests for deck construction and shuffling determinism
use monster_duel::cards::{template, COPIES_PER_TEMPLATE, TEMPLATES};
use monster_duel::core::GameRng;
use monster_duel::zones::{Deck, DECK_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn proptest_built_deck_has_every_template_three_times(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::build(&mut rng);

        prop_assert_eq!(deck.len(), DECK_SIZE);
        let counts = deck.composition();
        prop_assert_eq!(counts.len(), TEMPLATES.len());
        for t in &TEMPLATES {
            prop_assert_eq!(counts.get(t.name).copied(), Some(COPIES_PER_TEMPLATE));
        }
    }

    #[test]
    fn proptest_cards_carry_printed_stats(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::build(&mut rng);

        for card in deck.iter() {
            let t = template(&card.name).expect("every card comes from a template");
            prop_assert_eq!(card.attack, t.attack);
            prop_assert_eq!(card.health, t.health);
            prop_assert_eq!(card.kind, t.kind);
            prop_assert_eq!(card.effect, t.effect);
        }
    }

    #[test]
    fn proptest_same_seed_same_order(seed in any::<u64>()) {
        let a: Vec<_> = Deck::build(&mut GameRng::new(seed)).iter().cloned().collect();
        let b: Vec<_> = Deck::build(&mut GameRng::new(seed)).iter().cloned().collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_rng_state_resumes_deck_order(seed in any::<u64>(), rebuilds in 0usize..8) {
        let mut rng = GameRng::new(seed);
        for _ in 0..rebuilds {
            let _ = Deck::build(&mut rng);
        }
        let mut restored = GameRng::from_state(&rng.state());

        let a: Vec<_> = Deck::build(&mut rng).iter().cloned().collect();
        let b: Vec<_> = Deck::build(&mut restored).iter().cloned().collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_draining_deck(seed in any::<u64>(), draws in 0usize..=DECK_SIZE) {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::build(&mut rng);

        for _ in 0..draws {
            prop_assert!(deck.draw().is_ok());
        }
        prop_assert_eq!(deck.len(), DECK_SIZE - draws);
        prop_assert_eq!(deck.draw().is_err(), draws == DECK_SIZE);
    }
}
