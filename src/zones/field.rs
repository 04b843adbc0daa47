//! The single-slot combat field.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Combat zone holding at most one monster.
///
/// Backed by an `Option`, so more than one occupant is unrepresentable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    slot: Option<Card>,
}

impl Field {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `card` in the slot.
    ///
    /// Returns the card back if the slot is taken or the card is not a
    /// monster.
    pub fn place(&mut self, card: Card) -> Result<(), Card> {
        if self.slot.is_some() || !card.is_monster() {
            return Err(card);
        }
        self.slot = Some(card);
        Ok(())
    }

    /// Empty the slot, returning whatever was there.
    pub fn clear(&mut self) -> Option<Card> {
        self.slot.take()
    }

    #[must_use]
    pub fn monster(&self) -> Option<&Card> {
        self.slot.as_ref()
    }

    pub fn monster_mut(&mut self) -> Option<&mut Card> {
        self.slot.as_mut()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.slot.is_some())
    }
}
