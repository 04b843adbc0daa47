//! Actor identification and per-actor data storage.
//!
//! ## Actor
//!
//! The two seats at the table: the human `Player` and the scripted
//! `Computer`.
//!
//! ## ActorMap
//!
//! Fixed two-slot storage indexed by `Actor`, with a split borrow for
//! code that needs both sides mutably at once (combat).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// The human player, driven by presentation-layer commands.
    Player,
    /// The scripted opponent.
    Computer,
}

impl Actor {
    /// Both actors in seat order.
    pub const ALL: [Actor; 2] = [Actor::Player, Actor::Computer];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Actor::Player => Actor::Computer,
            Actor::Computer => Actor::Player,
        }
    }

    /// Possessive label used in event log messages.
    #[must_use]
    pub const fn possessive(self) -> &'static str {
        match self {
            Actor::Player => "Your",
            Actor::Computer => "Computer's",
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Player => write!(f, "Player"),
            Actor::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-actor data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use monster_duel::core::{Actor, ActorMap};
///
/// let mut wins: ActorMap<u32> = ActorMap::default();
/// wins[Actor::Computer] += 1;
///
/// assert_eq!(wins[Actor::Player], 0);
/// assert_eq!(wins[Actor::Computer], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorMap<T> {
    player: T,
    computer: T,
}

impl<T> ActorMap<T> {
    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            computer: value,
        }
    }

    /// Get a reference to an actor's data.
    #[must_use]
    pub fn get(&self, actor: Actor) -> &T {
        match actor {
            Actor::Player => &self.player,
            Actor::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to an actor's data.
    pub fn get_mut(&mut self, actor: Actor) -> &mut T {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Computer => &mut self.computer,
        }
    }

    /// Borrow both entries mutably, `first` side first.
    pub fn split_mut(&mut self, first: Actor) -> (&mut T, &mut T) {
        match first {
            Actor::Player => (&mut self.player, &mut self.computer),
            Actor::Computer => (&mut self.computer, &mut self.player),
        }
    }

    /// Iterate over (Actor, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Actor, &T)> {
        [(Actor::Player, &self.player), (Actor::Computer, &self.computer)].into_iter()
    }
}

impl<T> Index<Actor> for ActorMap<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &Self::Output {
        self.get(actor)
    }
}

impl<T> IndexMut<Actor> for ActorMap<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut Self::Output {
        self.get_mut(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Actor::Player.opponent(), Actor::Computer);
        assert_eq!(Actor::Computer.opponent(), Actor::Player);
        assert_eq!(format!("{}", Actor::Computer), "Computer");
    }

    #[test]
    fn test_actor_map_index_mut() {
        let mut map = ActorMap::with_value(1);
        map[Actor::Computer] = 2;

        assert_eq!(map[Actor::Player], 1);
        assert_eq!(map[Actor::Computer], 2);
    }

    #[test]
    fn test_actor_map_split_mut() {
        let mut map: ActorMap<Vec<i32>> = ActorMap::default();

        let (computer, player) = map.split_mut(Actor::Computer);
        computer.push(7);
        player.push(3);

        assert_eq!(map[Actor::Player], vec![3]);
        assert_eq!(map[Actor::Computer], vec![7]);
    }

    #[test]
    fn test_actor_map_iter() {
        let map = ActorMap::with_value(5u8);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Actor::Player, &5), (Actor::Computer, &5)]);
    }

    #[test]
    fn test_actor_map_serialization() {
        let mut map = ActorMap::with_value(false);
        map[Actor::Computer] = true;
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ActorMap<bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
