//! Move outcomes and history records.
//!
//! A `Distribution` is what a rule variant reports after sowing one move.
//! A `MoveRecord` is what the session keeps in its history:
//! - Replay/debugging
//! - Front-end move logs

use serde::{Deserialize, Serialize};

use super::board::{PitId, RingSlot};
use super::player::PlayerId;

/// Summary of one move's sowing, produced by a rule variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Stones placed one by one, across every relay pass.
    pub sown: u32,

    /// Stones moved into the mover's store by capture.
    pub captured: u32,

    /// Number of relay passes after the first (Ayo only).
    pub relays: u32,

    /// Where the very last stone landed.
    pub last_slot: RingSlot,

    /// The last stone landed in the mover's own store (Kalah only).
    pub free_turn: bool,
}

impl Distribution {
    /// Stones distributed plus stones captured.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.sown + self.captured
    }
}

/// A completed move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that moved.
    pub player: PlayerId,

    /// The pit the move started from.
    pub pit: PitId,

    /// Net change of the mover's store.
    pub banked: u32,

    /// Sowing summary.
    pub distribution: Distribution,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(
        player: PlayerId,
        pit: PitId,
        banked: u32,
        distribution: Distribution,
        turn: u32,
    ) -> Self {
        Self {
            player,
            pit,
            banked,
            distribution,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_total() {
        let pit = PitId::new(9).unwrap();
        let distribution = Distribution {
            sown: 7,
            captured: 3,
            relays: 1,
            last_slot: RingSlot::Pit(pit),
            free_turn: false,
        };
        assert_eq!(distribution.total(), 10);
    }

    #[test]
    fn test_move_record_serialization() {
        let pit = PitId::new(3).unwrap();
        let record = MoveRecord::new(
            PlayerId::One,
            pit,
            1,
            Distribution {
                sown: 4,
                captured: 0,
                relays: 0,
                last_slot: RingSlot::Store(PlayerId::One),
                free_turn: true,
            },
            1,
        );
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
