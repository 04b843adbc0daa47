//! A held hand of cards.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Cards an actor holds but has not committed.
///
/// Draws append; plays remove by index. Order is the draw order and is what
/// the scripted opponent scans for its first-match choices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawn card to the end.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take the card at `index`, shifting later cards down.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Index of the first card matching `pred`, in hand order.
    #[must_use]
    pub fn position(&self, pred: impl Fn(&Card) -> bool) -> Option<usize> {
        self.cards.iter().position(pred)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
