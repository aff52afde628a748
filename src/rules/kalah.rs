//! Kalah sowing.
//!
//! Stones go into the mover's own store as they pass it; the opponent's
//! store is skipped. Only the last stone matters:
//! - In the mover's store: the mover plays again.
//! - In an empty pit on the mover's side: that stone and the opposite
//!   pit's stones are captured, provided the opposite pit is not empty.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::SowingRules;
use crate::core::action::Distribution;
use crate::core::board::{Board, PitId, RingSlot};
use crate::core::player::PlayerId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KalahRules;

impl KalahRules {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SowingRules for KalahRules {
    fn skip_all_stores(&self) -> bool {
        false
    }

    fn distribute(&mut self, board: &mut Board, start: PitId, player: PlayerId) -> Distribution {
        let stones = board.empty_pit(start);
        let mut cursor = board.begin_sowing(start, player, self.skip_all_stores());

        let mut last_slot = RingSlot::Pit(start);
        let mut last_count = 0;
        for _ in 0..stones {
            last_slot = board.advance(&mut cursor);
            last_count = board.drop_stone(last_slot);
        }

        let mut distribution = Distribution {
            sown: stones,
            captured: 0,
            relays: 0,
            last_slot,
            free_turn: false,
        };

        match last_slot {
            RingSlot::Store(owner) if owner == player => distribution.free_turn = true,
            RingSlot::Pit(pit) if last_count == 1 && pit.owner() == player => {
                distribution.captured = self.capture(board, pit, player);
            }
            _ => {}
        }
        distribution
    }

    fn capture(&self, board: &mut Board, landing: PitId, player: PlayerId) -> u32 {
        let opposite = landing.opposite();
        if board.stone_count(opposite) == 0 {
            return 0;
        }
        let captured = board.empty_pit(landing) + board.empty_pit(opposite);
        board.add_to_store(player, captured);
        debug!(
            player = %player,
            landing = %landing,
            opposite = %opposite,
            captured,
            "kalah capture"
        );
        captured
    }
}
