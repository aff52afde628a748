//! Ayo relay sowing.
//!
//! Stores are never sown into. When the last stone of a pass lands in a pit
//! that was already occupied, the mover picks that pit up and keeps sowing
//! from it (a relay). The move ends when a pass finishes in an empty pit:
//! on the mover's side the opposite pit is captured and the landing stone
//! stays where it is.
//!
//! Relays run as a work loop. A chain that returns to a configuration it
//! has already sown from would repeat forever, so the move ends once a
//! `RelayGuard` sees the repeat.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace, warn};

use super::engine::SowingRules;
use crate::core::action::Distribution;
use crate::core::board::{Board, PitId, RingSlot, PIT_COUNT};
use crate::core::player::PlayerId;

/// Board counts plus the pit the next relay starts from.
type RelayState = ([u32; PIT_COUNT], PitId);

/// Repeat detector for a relay chain (Brent's method).
///
/// Keeps a single checkpoint state. Once the number of states seen since
/// the checkpoint reaches the current power of two, the checkpoint moves to
/// the latest state and the power doubles. A chain that is periodic from
/// some point on is reported as soon as the power covers the period, and
/// the guard's size never depends on the chain length.
#[derive(Clone, Debug)]
struct RelayGuard {
    checkpoint: Option<RelayState>,
    power: u64,
    steps: u64,
}

impl RelayGuard {
    fn new() -> Self {
        Self {
            checkpoint: None,
            power: 1,
            steps: 0,
        }
    }

    /// Record the next state of the chain. True if it equals the checkpoint.
    fn repeats(&mut self, state: RelayState) -> bool {
        if self.checkpoint == Some(state) {
            return true;
        }
        self.steps += 1;
        if self.steps == self.power {
            self.checkpoint = Some(state);
            self.power *= 2;
            self.steps = 0;
        }
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyoRules;

impl AyoRules {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SowingRules for AyoRules {
    fn skip_all_stores(&self) -> bool {
        true
    }

    fn distribute(&mut self, board: &mut Board, start: PitId, player: PlayerId) -> Distribution {
        let mut cursor = board.begin_sowing(start, player, self.skip_all_stores());
        let mut pending: SmallVec<[PitId; 2]> = smallvec![start];
        let mut guard = RelayGuard::new();

        let mut distribution = Distribution {
            sown: 0,
            captured: 0,
            relays: 0,
            last_slot: RingSlot::Pit(start),
            free_turn: false,
        };

        while let Some(source) = pending.pop() {
            let stones = board.empty_pit(source);
            let mut last_count = 0;
            for _ in 0..stones {
                distribution.last_slot = board.advance(&mut cursor);
                last_count = board.drop_stone(distribution.last_slot);
            }
            distribution.sown += stones;

            let RingSlot::Pit(landing) = distribution.last_slot else {
                break;
            };
            if last_count > 1 {
                if guard.repeats((board.pit_counts(), landing)) {
                    warn!(
                        player = %player,
                        pit = %landing,
                        relays = distribution.relays,
                        "relay cycle, ending move"
                    );
                    break;
                }
                trace!(player = %player, pit = %landing, stones = last_count, "relay");
                distribution.relays += 1;
                pending.push(landing);
            } else if last_count == 1 && landing.owner() == player {
                distribution.captured += self.capture(board, landing, player);
            }
        }
        distribution
    }

    fn capture(&self, board: &mut Board, landing: PitId, player: PlayerId) -> u32 {
        let opposite = landing.opposite();
        let captured = board.empty_pit(opposite);
        if captured > 0 {
            board.add_to_store(player, captured);
            debug!(
                player = %player,
                landing = %landing,
                opposite = %opposite,
                captured,
                "ayo capture"
            );
        }
        captured
    }
}
