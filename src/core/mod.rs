//! Core types: players, containers, the board, configuration, move records.
//!
//! Everything here is rule-agnostic. Variants in `rules` decide what a move
//! does; these types only hold and move stones.

pub mod action;
pub mod board;
pub mod config;
pub mod container;
pub mod player;

pub use action::{Distribution, MoveRecord};
pub use board::{Board, PitId, RingSlot, SowingCursor, PITS_PER_SIDE, PIT_COUNT, STONES_PER_PIT};
pub use config::{GameConfig, RuleSet};
pub use container::{Countable, Pit, Store};
pub use player::{Player, PlayerId, PlayerMap};
