//! Game configuration types.
//!
//! A session is configured once at construction:
//! - `RuleSet`: which sowing rules the session plays by
//! - `GameConfig`: the rule set plus who moves first
//!
//! Board size and stone count are fixed and not part of the configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::PlayerId;
use crate::error::GameError;

/// The rule variant a session plays by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSet {
    /// Sowing includes the mover's own store; last stone in own store
    /// earns a free turn.
    #[default]
    Kalah,
    /// Stores are never sown into; a last stone in an occupied pit relays.
    Ayo,
}

impl RuleSet {
    /// Rule set from the numeric selector used by saved games and menus:
    /// `1` is Kalah, anything else is Ayo.
    #[must_use]
    pub const fn from_selector(selector: u8) -> Self {
        if selector == 1 {
            RuleSet::Kalah
        } else {
            RuleSet::Ayo
        }
    }

    /// Numeric selector for this rule set.
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            RuleSet::Kalah => 1,
            RuleSet::Ayo => 2,
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSet::Kalah => write!(f, "Kalah"),
            RuleSet::Ayo => write!(f, "Ayo"),
        }
    }
}

impl FromStr for RuleSet {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kalah" => Ok(RuleSet::Kalah),
            "ayo" | "oware" => Ok(RuleSet::Ayo),
            _ => Err(GameError::UnknownRuleSet(s.to_string())),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule variant, fixed for the session's lifetime.
    pub rule_set: RuleSet,

    /// Seat that moves first after registration and on every new game.
    pub first_player: PlayerId,
}

impl GameConfig {
    /// Create a configuration; player 1 moves first.
    #[must_use]
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            rule_set,
            first_player: PlayerId::One,
        }
    }

    /// Set the seat that moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}
