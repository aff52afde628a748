//! Sowing rules for the two supported variants.
//!
//! - `engine`: `RuleEngine`, the shared base, plus the `SowingRules` trait
//!   and the closed `Variant` enum
//! - `kalah`: own-store sowing, free turns, two-pit capture
//! - `ayo`: store-free relay sowing, opposite-pit capture
//!
//! The session calls into `RuleEngine`; it never interprets sowing itself.

pub mod ayo;
pub mod engine;
pub mod kalah;

pub use ayo::AyoRules;
pub use engine::{GameResult, RuleEngine, SowingRules, Variant};
pub use kalah::KalahRules;
