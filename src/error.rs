//! Error types for board access, moves, and session management.

use crate::core::player::PlayerId;

/// Errors reported by the board, the rule engine, and the game session.
///
/// Every failing check runs before any stone is moved, so an `Err` never
/// carries a partially applied move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: pit {pit} cannot be played by player {player}")]
    InvalidMove { pit: usize, player: PlayerId },

    #[error("game is not over")]
    GameNotOver,

    #[error("no such player: {0:?}")]
    NoSuchPlayer(String),

    #[error("pit {0} is out of range (expected 1-12)")]
    OutOfRange(usize),

    #[error("invalid player name: {0:?}")]
    InvalidPlayer(String),

    #[error("players have not been registered")]
    PlayersNotRegistered,

    #[error("unknown rule set: {0:?}")]
    UnknownRuleSet(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
