//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The two seats at the board. Seat one owns pits 1-6 and the store after
//! pit 6; seat two owns pits 7-12 and the store after pit 12.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A named participant bound to a seat. Stores refer back to players only
//! through the seat, never by holding the `Player` itself.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both seats in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Seat from its 1-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// The 1-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// 0-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Pit numbers on this seat's side of the board.
    #[must_use]
    pub fn pit_range(self) -> RangeInclusive<usize> {
        match self {
            PlayerId::One => 1..=6,
            PlayerId::Two => 7..=12,
        }
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A named participant in a game session.
///
/// Players compare equal by name. The seat is assigned when the session
/// registers the player and determines which store holds their stones.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    seat: Option<PlayerId>,
}

impl Player {
    /// Create an unseated player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seat: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The seat (and so the store) this player was registered to.
    #[must_use]
    pub fn seat(&self) -> Option<PlayerId> {
        self.seat
    }

    pub(crate) fn set_seat(&mut self, seat: PlayerId) {
        self.seat = Some(seat);
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player: {}", self.name)
    }
}
