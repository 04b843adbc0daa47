//! Effect resolution against an actor's field.
//!
//! `EffectResolver` applies the stat effects directly and hands Draw back to
//! the caller, which owns the deck and the reshuffle rule.

use smallvec::SmallVec;

use super::effect::{Stat, StatChange, SupportEffect};
use crate::core::MatchConfig;
use crate::zones::Field;

/// Result of resolving a support effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectResult {
    /// Stat changes applied, one per affected monster (zero or one).
    Stats(SmallVec<[StatChange; 1]>),
    /// The caster must draw one card.
    Draw,
}

/// Resolves support effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `effect` to the monsters on `field`.
    ///
    /// Heal and Boost with an empty field resolve to an empty change list.
    pub fn resolve(effect: SupportEffect, field: &mut Field, config: &MatchConfig) -> EffectResult {
        match effect {
            SupportEffect::Heal => {
                EffectResult::Stats(Self::modify(field, Stat::Health, config.heal_amount))
            }
            SupportEffect::Boost => {
                EffectResult::Stats(Self::modify(field, Stat::Attack, config.boost_amount))
            }
            SupportEffect::Draw => EffectResult::Draw,
        }
    }

    fn modify(field: &mut Field, stat: Stat, delta: i64) -> SmallVec<[StatChange; 1]> {
        field
            .monster_mut()
            .into_iter()
            .map(|card| {
                let value = match stat {
                    Stat::Attack => &mut card.attack,
                    Stat::Health => &mut card.health,
                };
                let before = *value;
                *value += delta;
                StatChange {
                    card: card.name.clone(),
                    stat,
                    before,
                    after: *value,
                }
            })
            .collect()
    }
}
