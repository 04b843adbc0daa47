//! Simultaneous-damage combat between two monsters.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Damage one combatant received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Name of the damaged card.
    pub card: String,
    pub damage: i64,
    pub health_before: i64,
    pub health_after: i64,
}

impl DamageReport {
    #[must_use]
    pub fn defeated(&self) -> bool {
        self.health_after <= 0
    }
}

/// Outcome of one exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub attacker: DamageReport,
    pub defender: DamageReport,
}

/// Resolves attacks.
pub struct CombatResolver;

impl CombatResolver {
    /// Each card takes the other's pre-combat attack as damage.
    ///
    /// Field clearing and score keeping are left to the caller.
    ///
    /// ```
    /// use monster_duel::cards::Card;
    /// use monster_duel::combat::CombatResolver;
    ///
    /// let mut knight = Card::monster("Knight", 5, 5);
    /// let mut goblin = Card::monster("Goblin", 3, 2);
    ///
    /// let report = CombatResolver::resolve(&mut knight, &mut goblin);
    /// assert_eq!(goblin.health, -3);
    /// assert_eq!(knight.health, 2);
    /// assert!(report.defender.defeated());
    /// assert!(!report.attacker.defeated());
    /// ```
    pub fn resolve(attacker: &mut Card, defender: &mut Card) -> CombatReport {
        let attacker_damage = defender.attack;
        let defender_damage = attacker.attack;

        CombatReport {
            defender: Self::hit(defender, defender_damage),
            attacker: Self::hit(attacker, attacker_damage),
        }
    }

    fn hit(card: &mut Card, damage: i64) -> DamageReport {
        let health_before = card.health;
        card.health -= damage;
        DamageReport {
            card: card.name.clone(),
            damage,
            health_before,
            health_after: card.health,
        }
    }
}
