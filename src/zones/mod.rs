//! Card collections.
//!
//! - `Deck`: shared ordered draw pile, rebuilt from templates when empty
//! - `Hand`: per-actor held cards, indexable
//! - `Field`: per-actor single combat slot
//! - `Side`: one actor's hand and field together

pub mod deck;
pub mod field;
pub mod hand;

pub use deck::{Deck, DECK_SIZE};
pub use field::Field;
pub use hand::Hand;

use serde::{Deserialize, Serialize};

/// One actor's cards on the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub hand: Hand,
    pub field: Field,
}
