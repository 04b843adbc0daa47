//! Saved sessions.
//!
//! A `SessionState` is everything a `TurnEngine` needs to carry on where it
//! left off, including the RNG position so later reshuffles match. The
//! opponent policy is code, not data, and is supplied again on restore.

use serde::{Deserialize, Serialize};

use crate::core::{ActorMap, GameRngState, MatchConfig, MatchState, TurnState};
use crate::log::EventLog;
use crate::zones::{Deck, Side};

/// Serializable engine state.
///
/// ## Example
///
/// ```
/// use monster_duel::{GreedyOpponent, TurnEngine};
///
/// let engine = TurnEngine::with_seed(3);
/// let saved = engine.save();
///
/// let resumed = TurnEngine::restore(saved, GreedyOpponent);
/// assert_eq!(resumed.snapshot(), engine.snapshot());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub config: MatchConfig,
    pub rng: GameRngState,
    pub deck: Deck,
    pub sides: ActorMap<Side>,
    pub turn: TurnState,
    pub score: MatchState,
    pub log: EventLog,
    pub match_number: u32,
    pub wins: ActorMap<u32>,
}
