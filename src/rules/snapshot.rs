//! Read-only view of the engine for renderers.

use serde::Serialize;

use crate::cards::Card;
use crate::core::{Actor, ActorMap};

/// Everything a renderer may show after a command.
///
/// The computer's hand is reduced to a count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    /// Current match (1-based).
    pub match_number: u32,

    /// Whose turn it is.
    pub active: Actor,

    pub player_hand: Vec<Card>,
    pub computer_hand_size: usize,

    pub player_field: Option<Card>,
    pub computer_field: Option<Card>,

    /// Computer monsters destroyed by the player this match.
    pub defeated_by_player: u32,
    /// Player monsters destroyed by the computer this match.
    pub defeated_by_computer: u32,

    /// `end_turn` would be accepted.
    pub can_end_turn: bool,

    pub needs_new_monster: bool,
    pub has_played_monster: bool,
    pub has_attacked: bool,

    /// Cards left in the shared deck.
    pub deck_size: usize,

    /// Matches won per actor this session.
    pub wins: ActorMap<u32>,
}

impl MatchSnapshot {
    /// Prompt for the player's field area.
    #[must_use]
    pub fn field_prompt(&self) -> &'static str {
        if self.needs_new_monster {
            "Place a new monster!"
        } else if self.player_field.is_some() {
            "Your Monster (Click to Attack)"
        } else {
            "Summon a monster"
        }
    }
}
