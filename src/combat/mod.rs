//! Monster combat.
//!
//! `CombatResolver` is a pure computation over two cards; the turn engine
//! decides what a defeat means for fields and score.

pub mod resolver;

pub use resolver::{CombatReport, CombatResolver, DamageReport};
