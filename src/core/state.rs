//! Turn and match bookkeeping.
//!
//! ## TurnState
//!
//! Whose turn it is plus the player's per-turn quota flags.
//!
//! ## MatchState
//!
//! Defeat counters for the current match.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorMap};

/// Per-turn flags.
///
/// Only the player is quota-limited; the scripted opponent's turn is a
/// single atomic sequence and never consults these flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Actor whose turn it is.
    pub active: Actor,

    /// The player has used their one monster summon this turn.
    pub has_played_monster: bool,

    /// The player has attacked this turn.
    pub has_attacked: bool,

    /// The player's monster was defeated and must be replaced. Lifts the
    /// one-summon quota for the replacement.
    pub needs_new_monster: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            active: Actor::Player,
            has_played_monster: false,
            has_attacked: false,
            needs_new_monster: false,
        }
    }
}

impl TurnState {
    /// Roll the flags over for the start of a player turn.
    ///
    /// A pending replacement keeps `has_played_monster` as it is, so the
    /// obligation survives the rollover.
    pub fn begin_player_turn(&mut self) {
        self.active = Actor::Player;
        self.has_attacked = false;
        if !self.needs_new_monster {
            self.has_played_monster = false;
        }
    }

    /// Record that the player's monster left the field in combat.
    pub fn player_monster_lost(&mut self) {
        self.needs_new_monster = true;
        self.has_played_monster = false;
    }

    /// Record a successful player summon.
    pub fn player_monster_placed(&mut self) {
        self.has_played_monster = true;
        self.needs_new_monster = false;
    }

    /// Whether a monster summon is within the quota.
    #[must_use]
    pub fn may_summon(&self) -> bool {
        !self.has_played_monster || self.needs_new_monster
    }
}

/// Defeat counters for one match.
///
/// `defeated_by[actor]` counts enemy monsters that `actor` has destroyed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    defeated_by: ActorMap<u32>,
}

impl MatchState {
    /// Fresh counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enemy monsters destroyed by `actor`.
    #[must_use]
    pub fn defeated_by(&self, actor: Actor) -> u32 {
        self.defeated_by[actor]
    }

    /// Credit `actor` with one destroyed monster.
    pub fn record_defeat(&mut self, actor: Actor) {
        self.defeated_by[actor] += 1;
    }

    /// The winner, if either counter has reached `threshold`.
    ///
    /// The computer's counter is checked first, so a simultaneous finish
    /// goes to the computer.
    #[must_use]
    pub fn winner(&self, threshold: u32) -> Option<Actor> {
        [Actor::Computer, Actor::Player]
            .into_iter()
            .find(|&actor| self.defeated_by[actor] >= threshold)
    }
}
