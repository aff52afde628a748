//! # mancala-engine
//!
//! Sowing and capture rules for two-player Mancala on a 12-pit, 2-store
//! board, in two variants: Kalah and Ayo.
//!
//! ## Design Principles
//!
//! 1. **Stones are conserved**: every move only relocates stones. The
//!    end-of-game sweep moves the remaining stones into their own side's
//!    store, nothing more.
//!
//! 2. **Validate, then mutate**: a rejected move never touches the board.
//!
//! 3. **Variant chosen once**: a session picks `RuleSet::Kalah` or
//!    `RuleSet::Ayo` at construction and keeps it.
//!
//! ## Architecture
//!
//! - **Explicit cursor**: sowing traversal is a `SowingCursor` value whose
//!   step is a pure function, shared by both variants. Only the store-skip
//!   flag differs.
//!
//! - **Relay as a loop**: Ayo's chained sowing is a work loop with a cycle
//!   guard, so a move always finishes.
//!
//! ## Modules
//!
//! - `core`: players, pits and stores, the board, configuration, records
//! - `rules`: shared rule engine, Kalah and Ayo sowing
//! - `game`: the two-player session front-ends drive
//! - `error`: `GameError` and the crate `Result`

pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Countable, Distribution, GameConfig, MoveRecord, Pit, PitId, Player, PlayerId, PlayerMap,
    RingSlot, RuleSet, SowingCursor, Store, PITS_PER_SIDE, PIT_COUNT, STONES_PER_PIT,
};

pub use crate::error::{GameError, Result};

pub use crate::game::MancalaGame;

pub use crate::rules::{AyoRules, GameResult, KalahRules, RuleEngine, SowingRules, Variant};
