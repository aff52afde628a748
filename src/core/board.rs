//! The 12-pit, 2-store ring board and the sowing cursor.
//!
//! ## Layout
//!
//! ```text
//!         P12  P11  P10  P9   P8   P7
//!   S2                                  S1
//!         P1   P2   P3   P4   P5   P6
//! ```
//!
//! Sowing runs counter-clockwise in the picture above, which is the ring
//! order of slot indices:
//!
//! ```text
//! slot:  0  1  2  3  4  5  6   7  8  9  10  11  12  13
//! holds: P1 P2 P3 P4 P5 P6 S1  P7 P8 P9 P10 P11 P12 S2
//! ```
//!
//! ## SowingCursor
//!
//! Traversal state is an explicit value. Stepping a cursor is a pure
//! function of the cursor, so the skip rules can be tested without a board.

use serde::{Deserialize, Serialize};

use super::container::{Countable, Pit, Store};
use super::player::{PlayerId, PlayerMap};
use crate::error::{GameError, Result};

/// Number of playing pits on the board.
pub const PIT_COUNT: usize = 12;

/// Pits on each player's side.
pub const PITS_PER_SIDE: usize = 6;

/// Stones placed in every pit at the start of a game.
pub const STONES_PER_PIT: u32 = 4;

/// Pits plus stores.
const RING_LEN: u8 = 14;

/// Validated pit number in 1..=12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PitId(u8);

impl PitId {
    /// Validate a raw pit number.
    pub fn new(number: usize) -> Result<Self> {
        if (1..=PIT_COUNT).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(GameError::OutOfRange(number))
        }
    }

    /// The pit number (1..=12).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize
    }

    /// The seat whose side this pit is on.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        if self.0 as usize <= PITS_PER_SIDE {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }

    /// The pit directly across the board (1 <-> 12, 2 <-> 11, ...).
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self(PIT_COUNT as u8 + 1 - self.0)
    }

    /// The first pit on a seat's side.
    #[must_use]
    pub const fn first_of(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Self(1),
            PlayerId::Two => Self(PITS_PER_SIDE as u8 + 1),
        }
    }

    /// All twelve pits in ascending order.
    pub fn all() -> impl Iterator<Item = PitId> {
        (1..=PIT_COUNT as u8).map(PitId)
    }

    /// The six pits of one side in ascending order.
    pub fn side(player: PlayerId) -> impl DoubleEndedIterator<Item = PitId> {
        let first = Self::first_of(player).0;
        (first..first + PITS_PER_SIDE as u8).map(PitId)
    }

    const fn array_index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<usize> for PitId {
    type Error = GameError;

    fn try_from(number: usize) -> Result<Self> {
        Self::new(number)
    }
}

impl From<PitId> for usize {
    fn from(pit: PitId) -> usize {
        pit.number()
    }
}

impl std::fmt::Display for PitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A position on the sowing ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingSlot {
    Pit(PitId),
    Store(PlayerId),
}

impl RingSlot {
    /// Pit number for pit slots, `None` for stores.
    #[must_use]
    pub const fn pit_number(self) -> Option<usize> {
        match self {
            RingSlot::Pit(pit) => Some(pit.number()),
            RingSlot::Store(_) => None,
        }
    }

    #[must_use]
    pub const fn is_store(self) -> bool {
        matches!(self, RingSlot::Store(_))
    }

    const fn ring_index(self) -> u8 {
        match self {
            RingSlot::Pit(pit) if pit.0 as usize <= PITS_PER_SIDE => pit.0 - 1,
            RingSlot::Pit(pit) => pit.0,
            RingSlot::Store(PlayerId::One) => PITS_PER_SIDE as u8,
            RingSlot::Store(PlayerId::Two) => RING_LEN - 1,
        }
    }

    const fn from_ring_index(index: u8) -> Self {
        match index {
            6 => RingSlot::Store(PlayerId::One),
            13 => RingSlot::Store(PlayerId::Two),
            0..=5 => RingSlot::Pit(PitId(index + 1)),
            _ => RingSlot::Pit(PitId(index)),
        }
    }
}

/// Traversal state for one sowing pass.
///
/// Re-created at the start of every move; never part of the saved board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SowingCursor {
    position: u8,
    player: PlayerId,
    skip_all_stores: bool,
}

impl SowingCursor {
    /// Cursor sitting on `start`; the first step lands on the next slot.
    #[must_use]
    pub const fn new(start: PitId, player: PlayerId, skip_all_stores: bool) -> Self {
        Self {
            position: RingSlot::Pit(start).ring_index(),
            player,
            skip_all_stores,
        }
    }

    /// The slot the cursor currently sits on.
    #[must_use]
    pub const fn slot(&self) -> RingSlot {
        RingSlot::from_ring_index(self.position)
    }

    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Move one step, skipping stores that cannot receive stones.
    ///
    /// With `skip_all_stores` both stores are skipped. Otherwise only the
    /// opponent's store is skipped.
    #[must_use]
    pub fn step(self) -> (Self, RingSlot) {
        let mut position = self.position;
        loop {
            position = (position + 1) % RING_LEN;
            let slot = RingSlot::from_ring_index(position);
            match slot {
                RingSlot::Store(owner) if self.skip_all_stores || owner != self.player => continue,
                _ => return (Self { position, ..self }, slot),
            }
        }
    }
}

/// Twelve pits and two stores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [Pit; PIT_COUNT],
    stores: PlayerMap<Store>,
}

impl Board {
    /// An empty board with unbound stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A board restored from explicit counts, with stores bound to both seats.
    ///
    /// `pits[0]` is pit 1; `stores[0]` is player 1's store.
    #[must_use]
    pub fn from_layout(pits: [u32; PIT_COUNT], stores: [u32; 2]) -> Self {
        let mut board = Self {
            pits: pits.map(Pit::with_stones),
            stores: PlayerMap::new(Store::owned_by),
        };
        for player in PlayerId::all() {
            board.stores[player].add_stones(stores[player.index()]);
        }
        board
    }

    // === Pits ===

    #[must_use]
    pub fn pit(&self, pit: PitId) -> &Pit {
        &self.pits[pit.array_index()]
    }

    /// Stones in a pit.
    #[must_use]
    pub fn stone_count(&self, pit: PitId) -> u32 {
        self.pit(pit).stone_count()
    }

    /// Empty a pit, returning how many stones it held.
    pub fn empty_pit(&mut self, pit: PitId) -> u32 {
        self.pits[pit.array_index()].remove_stones()
    }

    /// Counts of all pits, pit 1 first.
    #[must_use]
    pub fn pit_counts(&self) -> [u32; PIT_COUNT] {
        self.pits.map(|pit| pit.stone_count())
    }

    /// Stones on one side.
    #[must_use]
    pub fn side_total(&self, player: PlayerId) -> u32 {
        PitId::side(player).map(|pit| self.stone_count(pit)).sum()
    }

    // === Stores ===

    #[must_use]
    pub fn store(&self, player: PlayerId) -> &Store {
        &self.stores[player]
    }

    pub fn add_to_store(&mut self, player: PlayerId, count: u32) {
        self.stores[player].add_stones(count);
    }

    #[must_use]
    pub fn store_count(&self, player: PlayerId) -> u32 {
        self.stores[player].stone_count()
    }

    /// Replace both stores with fresh empty ones bound to their seats.
    pub fn bind_stores(&mut self) {
        self.stores = PlayerMap::new(Store::owned_by);
    }

    // === Whole board ===

    /// Stones in all pits and stores.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        let pits: u32 = self.pits.iter().map(Countable::stone_count).sum();
        pits + self.stores.iter().map(|(_, s)| s.stone_count()).sum::<u32>()
    }

    /// Empty every container and seed each pit with the opening count.
    pub fn reset(&mut self) {
        for pit in &mut self.pits {
            pit.remove_stones();
            pit.add_stones(STONES_PER_PIT);
        }
        for (_, store) in self.stores.iter_mut() {
            store.remove_stones();
        }
    }

    /// Move every stone on `player`'s side into `player`'s store.
    ///
    /// Returns the number of stones moved.
    pub fn sweep_side(&mut self, player: PlayerId) -> u32 {
        let swept: u32 = PitId::side(player).map(|pit| self.empty_pit(pit)).sum();
        if swept > 0 {
            self.add_to_store(player, swept);
        }
        swept
    }

    // === Sowing ===

    /// Start a sowing pass from `start` for `player`.
    #[must_use]
    pub fn begin_sowing(
        &self,
        start: PitId,
        player: PlayerId,
        skip_all_stores: bool,
    ) -> SowingCursor {
        SowingCursor::new(start, player, skip_all_stores)
    }

    /// Advance the cursor one step and return where it landed.
    pub fn advance(&self, cursor: &mut SowingCursor) -> RingSlot {
        let (next, slot) = cursor.step();
        *cursor = next;
        slot
    }

    /// Drop one stone into a slot, returning the slot's new count.
    pub fn drop_stone(&mut self, slot: RingSlot) -> u32 {
        let container = self.container_mut(slot);
        container.add_stone();
        container.stone_count()
    }

    fn container_mut(&mut self, slot: RingSlot) -> &mut dyn Countable {
        match slot {
            RingSlot::Pit(pit) => &mut self.pits[pit.array_index()],
            RingSlot::Store(player) => &mut self.stores[player],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const CELL: usize = 6;
        let inner = CELL * PITS_PER_SIDE;
        let border = format!("+{0}+{1}+{0}+", "-".repeat(CELL), "-".repeat(inner));

        let cells = |items: Vec<String>| -> String {
            items.iter().map(|item| format!("{:^width$}", item, width = CELL)).collect()
        };
        let top: Vec<PitId> = PitId::side(PlayerId::Two).rev().collect();
        let bottom: Vec<PitId> = PitId::side(PlayerId::One).collect();
        let labels = |pits: &[PitId]| cells(pits.iter().map(|p| p.to_string()).collect());
        let counts = |pits: &[PitId]| {
            cells(pits.iter().map(|p| format!("({})", self.stone_count(*p))).collect())
        };
        let row = |left: &str, middle: &str, right: &str| {
            format!("|{:^cell$}|{:^inner$}|{:^cell$}|", left, middle, right, cell = CELL)
        };

        writeln!(f, "{}", border)?;
        writeln!(f, "{}", row("", &labels(&top), ""))?;
        writeln!(f, "{}", row("S2", &counts(&top), "S1"))?;
        writeln!(
            f,
            "{}",
            row(
                &format!("[{}]", self.store_count(PlayerId::Two)),
                &"-".repeat(inner),
                &format!("[{}]", self.store_count(PlayerId::One)),
            )
        )?;
        writeln!(f, "{}", row("", &counts(&bottom), ""))?;
        writeln!(f, "{}", row("", &labels(&bottom), ""))?;
        write!(f, "{}", border)
    }
}
