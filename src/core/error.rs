//! Command rejections and internal engine errors.
//!
//! Two tiers:
//! - `Rejection`: an illegal command. Recoverable, reported to the user,
//!   engine state untouched.
//! - `EngineError`: a broken internal invariant. Unreachable through the
//!   state machine; the engine logs it and carries on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for player commands.
pub type Result<T> = std::result::Result<T, Rejection>;

/// Why a player command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("it is not your turn")]
    NotYourTurn,

    #[error("no card at hand index {index} (hand holds {hand_size})")]
    InvalidHandIndex { index: usize, hand_size: usize },

    #[error("you can only have one monster on the field")]
    FieldOccupied,

    #[error("you can only play one monster per turn")]
    MonsterAlreadyPlayed,

    #[error("you must summon a monster before ending your turn")]
    NoMonsterSummoned,

    #[error("you have already attacked this turn")]
    AlreadyAttackedThisTurn,

    #[error("you have no monster on the field to attack with")]
    NoAttacker,

    #[error("the computer has no monster on the field to attack")]
    NoDefender,
}

/// Internal invariant failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}
