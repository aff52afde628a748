//! Rule engine shared by both variants.
//!
//! `RuleEngine` owns the board and does everything the variants agree on:
//! - Ownership checks and move validation
//! - Acting-player tracking and the free-turn flag
//! - Side-emptiness detection with the end-of-game sweep
//! - Board reset and store binding
//!
//! What happens between picking up the stones and the end of the move is
//! delegated to a `SowingRules` implementation, chosen once through
//! `Variant` and kept for the engine's lifetime.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::ayo::AyoRules;
use super::kalah::KalahRules;
use crate::core::action::Distribution;
use crate::core::board::{Board, PitId, RingSlot, PITS_PER_SIDE};
use crate::core::config::RuleSet;
use crate::core::player::PlayerId;
use crate::error::{GameError, Result};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Strictly more stones in this seat's store.
    Winner(PlayerId),
    /// Equal stores.
    Tie,
}

impl GameResult {
    /// Compare final store counts.
    #[must_use]
    pub fn from_stores(one: u32, two: u32) -> Self {
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::One),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Two),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Variant-specific sowing.
///
/// ## Implementation Notes
///
/// - `distribute` is only called with a validated, non-empty own pit
/// - Stones may only be relocated, never created or destroyed
/// - Set `Distribution::free_turn` to grant the mover another move
pub trait SowingRules {
    /// Whether sowing passes over both stores.
    fn skip_all_stores(&self) -> bool;

    /// Pick up `start` and sow it for `player`, resolving the final stone.
    fn distribute(&mut self, board: &mut Board, start: PitId, player: PlayerId) -> Distribution;

    /// Capture after the last stone landed alone in `landing`.
    ///
    /// Returns the number of stones added to `player`'s store.
    fn capture(&self, board: &mut Board, landing: PitId, player: PlayerId) -> u32;
}

/// The closed set of rule variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Kalah(KalahRules),
    Ayo(AyoRules),
}

impl Variant {
    #[must_use]
    pub fn new(rule_set: RuleSet) -> Self {
        match rule_set {
            RuleSet::Kalah => Variant::Kalah(KalahRules::new()),
            RuleSet::Ayo => Variant::Ayo(AyoRules::new()),
        }
    }

    #[must_use]
    pub fn rule_set(&self) -> RuleSet {
        match self {
            Variant::Kalah(_) => RuleSet::Kalah,
            Variant::Ayo(_) => RuleSet::Ayo,
        }
    }
}

impl SowingRules for Variant {
    fn skip_all_stores(&self) -> bool {
        match self {
            Variant::Kalah(rules) => rules.skip_all_stores(),
            Variant::Ayo(rules) => rules.skip_all_stores(),
        }
    }

    fn distribute(&mut self, board: &mut Board, start: PitId, player: PlayerId) -> Distribution {
        match self {
            Variant::Kalah(rules) => rules.distribute(board, start, player),
            Variant::Ayo(rules) => rules.distribute(board, start, player),
        }
    }

    fn capture(&self, board: &mut Board, landing: PitId, player: PlayerId) -> u32 {
        match self {
            Variant::Kalah(rules) => rules.capture(board, landing, player),
            Variant::Ayo(rules) => rules.capture(board, landing, player),
        }
    }
}

/// Board plus the rule state shared by both variants.
///
/// The engine is the only place the player to move is kept. A session
/// reads and updates it through `current_player` and `set_player`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuleEngine {
    board: Board,
    variant: Variant,
    current_player: PlayerId,
    free_turn: bool,
}

impl RuleEngine {
    /// Create an engine with an empty board.
    #[must_use]
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            board: Board::new(),
            variant: Variant::new(rule_set),
            current_player: PlayerId::One,
            free_turn: false,
        }
    }

    #[must_use]
    pub fn rule_set(&self) -> RuleSet {
        self.variant.rule_set()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Stones in a pit, by raw pit number.
    pub fn num_stones(&self, pit: usize) -> Result<u32> {
        Ok(self.board.stone_count(PitId::new(pit)?))
    }

    #[must_use]
    pub fn store_count(&self, player: PlayerId) -> u32 {
        self.board.store_count(player)
    }

    // === Ownership ===

    /// True iff `pit` is on `player`'s side.
    #[must_use]
    pub fn check_own_pit(player: PlayerId, pit: PitId) -> bool {
        pit.owner() == player
    }

    /// True iff `slot` is `player`'s store.
    #[must_use]
    pub fn check_own_store(player: PlayerId, slot: RingSlot) -> bool {
        slot == RingSlot::Store(player)
    }

    /// Check that `player` may sow from `start`.
    ///
    /// Fails with `InvalidMove` for pits off the player's side (including
    /// numbers outside 1..=12) and for empty pits.
    pub fn validate_move(&self, start: usize, player: PlayerId) -> Result<PitId> {
        let invalid = || GameError::InvalidMove { pit: start, player };
        let pit = PitId::new(start).map_err(|_| invalid())?;
        if !Self::check_own_pit(player, pit) || self.board.stone_count(pit) == 0 {
            return Err(invalid());
        }
        Ok(pit)
    }

    /// Non-empty pits on `player`'s side, in ascending order.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> SmallVec<[PitId; PITS_PER_SIDE]> {
        PitId::side(player)
            .filter(|pit| self.board.stone_count(*pit) > 0)
            .collect()
    }

    // === Turn state ===

    /// The seat to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn set_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }

    pub fn set_free_turn(&mut self) {
        self.free_turn = true;
    }

    /// Read and clear the free-turn flag.
    pub fn take_free_turn(&mut self) -> bool {
        std::mem::take(&mut self.free_turn)
    }

    // === Moves ===

    /// Play `start` for `player` and return the change in their store.
    pub fn move_stones(&mut self, start: usize, player: PlayerId) -> Result<u32> {
        self.execute_move(start, player).map(|(_, banked, _)| banked)
    }

    /// Play `start` for `player`, returning the validated pit, the store
    /// change, and the variant's sowing summary.
    ///
    /// The board is untouched when this returns an error.
    pub fn execute_move(
        &mut self,
        start: usize,
        player: PlayerId,
    ) -> Result<(PitId, u32, Distribution)> {
        let pit = self.validate_move(start, player)?;
        let before = self.board.store_count(player);

        self.set_player(player);
        let distribution = self.variant.distribute(&mut self.board, pit, player);
        if distribution.free_turn {
            self.set_free_turn();
        }

        let banked = self.board.store_count(player) - before;
        debug!(
            rules = %self.variant.rule_set(),
            player = %player,
            pit = %pit,
            sown = distribution.sown,
            captured = distribution.captured,
            relays = distribution.relays,
            free_turn = distribution.free_turn,
            banked,
            "move resolved"
        );
        Ok((pit, banked, distribution))
    }

    // === End of game ===

    /// Check whether the side containing `pit` has no stones left.
    ///
    /// If it is empty, every stone on the other side is swept into the
    /// other side's own store. A non-empty side leaves the board untouched.
    pub fn is_side_empty(&mut self, pit: PitId) -> bool {
        let side = pit.owner();
        if self.board.side_total(side) > 0 {
            return false;
        }
        let remainder = side.opponent();
        let swept = self.board.sweep_side(remainder);
        if swept > 0 {
            debug!(empty_side = %side, player = %remainder, swept, "remaining stones stored");
        }
        true
    }

    // === Setup ===

    /// Empty everything and seed every pit with the opening count.
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.free_turn = false;
    }

    /// Reset the board and bind fresh stores to both seats.
    pub fn register_players(&mut self) {
        self.reset_board();
        self.board.bind_stores();
    }
}

impl std::fmt::Display for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
