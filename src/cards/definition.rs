//! Card templates - static card data.
//!
//! `CardTemplate` holds the printed stats of a card type. A deck is built
//! from the ten entries of [`TEMPLATES`], three copies each. Instance
//! state (damage taken, boosts) lives in `Card`.

use serde::{Deserialize, Serialize};

use super::instance::Card;
use crate::effects::SupportEffect;

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Occupies the field and fights.
    Monster,
    /// Consumed on play for a one-shot effect.
    Support,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use monster_duel::cards::{CardKind, TEMPLATES};
///
/// let dragon = &TEMPLATES[0];
/// assert_eq!(dragon.name, "Dragon");
/// assert_eq!(dragon.kind, CardKind::Monster);
///
/// let card = dragon.instantiate();
/// assert_eq!((card.attack, card.health), (7, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardTemplate {
    /// Card name (unique per template).
    pub name: &'static str,

    /// Printed attack.
    pub attack: i64,

    /// Printed health.
    pub health: i64,

    /// Monster or support.
    pub kind: CardKind,

    /// Effect for support cards, `None` for monsters.
    pub effect: Option<SupportEffect>,
}

impl CardTemplate {
    const fn monster(name: &'static str, attack: i64, health: i64) -> Self {
        Self {
            name,
            attack,
            health,
            kind: CardKind::Monster,
            effect: None,
        }
    }

    const fn support(name: &'static str, attack: i64, health: i64, effect: SupportEffect) -> Self {
        Self {
            name,
            attack,
            health,
            kind: CardKind::Support,
            effect: Some(effect),
        }
    }

    /// Create a fresh card instance with printed stats.
    #[must_use]
    pub fn instantiate(&self) -> Card {
        Card {
            name: self.name.to_string(),
            attack: self.attack,
            health: self.health,
            kind: self.kind,
            effect: self.effect,
        }
    }
}

/// Copies of each template in a freshly built deck.
pub const COPIES_PER_TEMPLATE: usize = 3;

/// The ten card templates, in deck-building order.
pub const TEMPLATES: [CardTemplate; 10] = [
    CardTemplate::monster("Dragon", 7, 6),
    CardTemplate::monster("Knight", 5, 5),
    CardTemplate::monster("Wizard", 4, 4),
    CardTemplate::monster("Goblin", 3, 2),
    CardTemplate::support("Healer", 2, 3, SupportEffect::Heal),
    CardTemplate::monster("Warrior", 6, 4),
    CardTemplate::monster("Archer", 4, 3),
    CardTemplate::monster("Shield Bearer", 2, 8),
    CardTemplate::support("Mage", 5, 3, SupportEffect::Boost),
    CardTemplate::support("Scout", 3, 2, SupportEffect::Draw),
];

/// Look up a template by name.
#[must_use]
pub fn template(name: &str) -> Option<&'static CardTemplate> {
    TEMPLATES.iter().find(|t| t.name == name)
}
