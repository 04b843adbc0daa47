//! The shared draw deck.
//!
//! Both actors draw from one deck. It is ordered, drawn from the top (the
//! end of the backing `Vec`), and never recycles played cards: when it runs
//! dry it is rebuilt from the templates and reshuffled.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, COPIES_PER_TEMPLATE, TEMPLATES};
use crate::core::{EngineError, GameRng};

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = TEMPLATES.len() * COPIES_PER_TEMPLATE;

/// Ordered draw pile.
///
/// ## Usage
///
/// ```
/// use monster_duel::core::GameRng;
/// use monster_duel::zones::{Deck, DECK_SIZE};
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::build(&mut rng);
/// assert_eq!(deck.len(), DECK_SIZE);
///
/// let top = deck.draw().unwrap();
/// assert_eq!(deck.len(), DECK_SIZE - 1);
/// assert!(!top.name.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a shuffled deck: every template, `COPIES_PER_TEMPLATE` times.
    #[must_use]
    pub fn build(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..COPIES_PER_TEMPLATE {
            cards.extend(TEMPLATES.iter().map(|t| t.instantiate()));
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// A deck with exactly these cards, last element on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Replace the contents with a newly built, newly shuffled deck.
    pub fn reshuffle(&mut self, rng: &mut GameRng) {
        *self = Self::build(rng);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Copies remaining per card name.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_composition() {
        let mut rng = GameRng::new(42);
        let deck = Deck::build(&mut rng);

        assert_eq!(deck.len(), 30);
        let counts = deck.composition();
        assert_eq!(counts.len(), 10);
        for t in &TEMPLATES {
            assert_eq!(counts.get(t.name), Some(&3), "{} count", t.name);
        }
    }

    #[test]
    fn test_builds_are_shuffled_independently() {
        let mut rng = GameRng::new(42);
        let first: Vec<_> = Deck::build(&mut rng).iter().map(|c| c.name.clone()).collect();
        let second: Vec<_> = Deck::build(&mut rng).iter().map(|c| c.name.clone()).collect();

        assert_ne!(first, second);
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::from_cards(vec![
            Card::monster("Goblin", 3, 2),
            Card::monster("Dragon", 7, 6),
        ]);

        assert_eq!(deck.draw().unwrap().name, "Dragon");
        assert_eq!(deck.draw().unwrap().name, "Goblin");
        assert_eq!(deck.draw(), Err(EngineError::EmptyDeck));
    }

    #[test]
    fn test_reshuffle_regenerates_full_deck() {
        let mut rng = GameRng::new(7);
        let mut deck = Deck::build(&mut rng);
        for _ in 0..25 {
            deck.draw().unwrap();
        }
        assert_eq!(deck.len(), 5);

        deck.reshuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.composition().values().all(|&n| n == COPIES_PER_TEMPLATE));
    }

    #[test]
    fn test_empty_reshuffle() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::default();
        assert!(deck.is_empty());

        deck.reshuffle(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
    }
}
