//! Scripted opponent policy.
//!
//! The computer's turn is fixed: draw, summon if its field is empty, play
//! every support card, attack. The policy only decides *which* card fills
//! each of those steps.

use crate::cards::Card;
use crate::zones::Hand;

/// Card choice for the scripted opponent.
pub trait OpponentPolicy {
    /// Hand index of the monster to summon onto an empty field.
    ///
    /// Returning an index that is not a monster skips the summon.
    fn choose_summon(&self, hand: &Hand) -> Option<usize>;

    /// Hand index of the next support card to play.
    ///
    /// Called once per support card that was in hand at the start of the
    /// support phase.
    fn choose_support(&self, hand: &Hand) -> Option<usize>;
}

/// First match in hand order, for both choices.
///
/// Drawn cards are appended, so scanning from the front always reaches the
/// cards held at the start of a phase before anything drawn during it.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn choose_summon(&self, hand: &Hand) -> Option<usize> {
        hand.position(Card::is_monster)
    }

    fn choose_support(&self, hand: &Hand) -> Option<usize> {
        hand.position(Card::is_support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::SupportEffect;

    #[test]
    fn test_greedy_takes_first_monster() {
        let hand: Hand = [
            Card::support("Scout", SupportEffect::Draw),
            Card::monster("Goblin", 3, 2),
            Card::monster("Dragon", 7, 6),
        ]
        .into_iter()
        .collect();

        assert_eq!(GreedyOpponent.choose_summon(&hand), Some(1));
        assert_eq!(GreedyOpponent.choose_support(&hand), Some(0));
    }

    #[test]
    fn test_greedy_nothing_to_play() {
        let monsters: Hand = [Card::monster("Knight", 5, 5)].into_iter().collect();

        assert_eq!(GreedyOpponent.choose_support(&monsters), None);
        assert_eq!(GreedyOpponent.choose_summon(&Hand::new()), None);
    }
}
