//! Support effect definitions.
//!
//! Support cards carry exactly one of three one-shot effects. Heal and Boost
//! touch the monster in the caster's field slot; Draw pulls one card from the
//! shared deck.

use serde::{Deserialize, Serialize};

/// A one-shot support effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportEffect {
    /// Caster's field monster gains health.
    Heal,
    /// Caster's field monster gains attack.
    Boost,
    /// Caster draws one card.
    Draw,
}

impl SupportEffect {
    /// Card text, e.g. `"Heal +2 HP"`.
    #[must_use]
    pub fn description(self, heal: i64, boost: i64) -> String {
        match self {
            SupportEffect::Heal => format!("Heal +{heal} HP"),
            SupportEffect::Boost => format!("Boost +{boost} ATK"),
            SupportEffect::Draw => "Draw a card".to_string(),
        }
    }
}

/// A monster stat that effects can change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Attack,
    Health,
}

impl Stat {
    /// Short unit label used in log messages.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Stat::Attack => "ATK",
            Stat::Health => "HP",
        }
    }
}

/// Before/after record of a single stat change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    /// Name of the affected card.
    pub card: String,
    pub stat: Stat,
    pub before: i64,
    pub after: i64,
}
