//! Match configuration.
//!
//! `MatchConfig` carries the tunable numbers of a duel. The defaults are the
//! standard rules: five-card starting hands, three defeats to win, Heal for
//! +2 health and Boost for +1 attack.

use serde::{Deserialize, Deserializer, Serialize};

/// Cards dealt to each actor at match start.
pub const DEFAULT_STARTING_HAND_SIZE: usize = 5;

/// Defeated enemy monsters needed to win.
pub const DEFAULT_WIN_THRESHOLD: u32 = 3;

/// Health restored by a Heal support card.
pub const DEFAULT_HEAL_AMOUNT: i64 = 2;

/// Attack added by a Boost support card.
pub const DEFAULT_BOOST_AMOUNT: i64 = 1;

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use monster_duel::core::MatchConfig;
///
/// let config = MatchConfig::new()
///     .with_seed(7)
///     .with_win_threshold(5);
///
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.win_threshold, 5);
/// assert_eq!(config.starting_hand_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// RNG seed. `None` draws a fresh seed when the engine is built.
    pub seed: Option<u64>,

    /// Cards dealt to each actor when a match begins.
    pub starting_hand_size: usize,

    /// Defeat count that ends a match. Never zero.
    #[serde(deserialize_with = "deserialize_win_threshold")]
    pub win_threshold: u32,

    /// Health gained from Heal.
    pub heal_amount: i64,

    /// Attack gained from Boost.
    pub boost_amount: i64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_hand_size: DEFAULT_STARTING_HAND_SIZE,
            win_threshold: DEFAULT_WIN_THRESHOLD,
            heal_amount: DEFAULT_HEAL_AMOUNT,
            boost_amount: DEFAULT_BOOST_AMOUNT,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the number of defeats that ends a match.
    ///
    /// Panics on zero: a match must be winnable only through combat.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "Win threshold must be at least 1");
        self.win_threshold = threshold;
        self
    }

    /// Raise a zero win threshold to 1.
    ///
    /// The field is public, so a zero can still be assigned directly; the
    /// engine normalizes every config it is given.
    #[must_use]
    pub(crate) fn normalized(mut self) -> Self {
        if self.win_threshold == 0 {
            tracing::warn!("win threshold of 0 raised to 1");
            self.win_threshold = 1;
        }
        self
    }

    /// Set the Heal amount.
    #[must_use]
    pub fn with_heal_amount(mut self, amount: i64) -> Self {
        self.heal_amount = amount;
        self
    }

    /// Set the Boost amount.
    #[must_use]
    pub fn with_boost_amount(mut self, amount: i64) -> Self {
        self.boost_amount = amount;
        self
    }
}

fn deserialize_win_threshold<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let threshold = u32::deserialize(deserializer)?;
    if threshold == 0 {
        return Err(serde::de::Error::custom("win_threshold must be at least 1"));
    }
    Ok(threshold)
}
