//! Card instances - runtime card state.
//!
//! A `Card` is one physical copy in a match. It starts with its template's
//! printed stats; combat lowers `health` and support effects raise `health`
//! or `attack`. Cards are moved between collections by value, so a card is
//! never referenced from two places at once.

use serde::{Deserialize, Serialize};

use super::definition::CardKind;
use crate::core::MatchConfig;
use crate::effects::SupportEffect;

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Template name.
    pub name: String,

    /// Current attack.
    pub attack: i64,

    /// Current health. At or below zero the card is defeated.
    pub health: i64,

    /// Monster or support.
    pub kind: CardKind,

    /// Effect for support cards.
    pub effect: Option<SupportEffect>,
}

impl Card {
    /// Create a monster card with the given stats.
    #[must_use]
    pub fn monster(name: impl Into<String>, attack: i64, health: i64) -> Self {
        Self {
            name: name.into(),
            attack,
            health,
            kind: CardKind::Monster,
            effect: None,
        }
    }

    /// Create a support card.
    #[must_use]
    pub fn support(name: impl Into<String>, effect: SupportEffect) -> Self {
        Self {
            name: name.into(),
            attack: 0,
            health: 0,
            kind: CardKind::Support,
            effect: Some(effect),
        }
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.kind == CardKind::Monster
    }

    #[must_use]
    pub fn is_support(&self) -> bool {
        self.kind == CardKind::Support
    }

    /// Health at or below zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Renderer text for the card's effect, empty for monsters.
    #[must_use]
    pub fn effect_text(&self, config: &MatchConfig) -> String {
        self.effect
            .map(|e| e.description(config.heal_amount, config.boost_amount))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Monster => write!(f, "{} ({}/{})", self.name, self.attack, self.health),
            CardKind::Support => write!(f, "{}", self.name),
        }
    }
}
