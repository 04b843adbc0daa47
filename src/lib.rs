//! # monster-duel
//!
//! Rules engine for a two-seat monster card duel: a human player against a
//! scripted computer opponent, sharing one 30-card deck.
//!
//! ## Game Loop
//!
//! 1. **Deal**: each side receives five cards, then the player's first turn
//!    draws one more.
//!
//! 2. **Player Turn**: summon at most one monster onto the single-slot
//!    field, play any number of support cards, attack at most once.
//!
//! 3. **Computer Turn**: draw, summon if the field is empty, play every
//!    support card held, attack.
//!
//! 4. **Win**: the first side to destroy three enemy monsters wins, and a
//!    fresh match is dealt at once.
//!
//! ## Example
//!
//! ```
//! use monster_duel::{Actor, TurnEngine};
//!
//! let mut engine = TurnEngine::with_seed(7);
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.active, Actor::Player);
//!
//! if let Some(index) = snapshot.player_hand.iter().position(|c| c.is_monster()) {
//!     engine.play_card(index).unwrap();
//!     assert!(engine.snapshot().can_end_turn);
//!     engine.end_turn().unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: actors, RNG, configuration, turn and score state, errors
//! - `cards`: card templates and instances
//! - `zones`: deck, hands and fields
//! - `effects`: support card effects
//! - `combat`: attack resolution
//! - `log`: the human-readable event log
//! - `rules`: the turn engine, opponent policy, snapshots and saved sessions

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod combat;
pub mod log;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorMap,
    GameRng, GameRngState,
    MatchConfig, MatchState, TurnState,
    EngineError, Rejection,
};

pub use crate::cards::{Card, CardKind, CardTemplate, TEMPLATES};

pub use crate::zones::{Deck, Field, Hand, Side, DECK_SIZE};

pub use crate::effects::{EffectResolver, EffectResult, Stat, StatChange, SupportEffect};

pub use crate::combat::{CombatReport, CombatResolver, DamageReport};

pub use crate::log::{EventLog, LogEntry, LogSource};

pub use crate::rules::{
    GreedyOpponent, MatchResult, MatchSnapshot, OpponentPolicy, Outcome, SessionState,
    TurnEngine,
};
