//! Core engine types: actors, RNG, configuration, turn state, errors.
//!
//! These are the building blocks the zones, effects and rules layers share.

pub mod actor;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use actor::{Actor, ActorMap};
pub use rng::{GameRng, GameRngState};
pub use config::MatchConfig;
pub use state::{MatchState, TurnState};
pub use error::{EngineError, Rejection, Result};
