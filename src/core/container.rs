//! Stone containers: pits and stores.
//!
//! Both implement `Countable`, the small capability the sowing loop needs:
//! add stones, read the count, and empty the container in one step.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Something that holds a non-negative number of stones.
pub trait Countable {
    /// Current number of stones.
    fn stone_count(&self) -> u32;

    /// Add a single stone.
    fn add_stone(&mut self) {
        self.add_stones(1);
    }

    /// Add `count` stones.
    fn add_stones(&mut self, count: u32);

    /// Empty the container and return how many stones it held.
    fn remove_stones(&mut self) -> u32;
}

/// One of the twelve playing pits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pit {
    stones: u32,
}

impl Pit {
    #[must_use]
    pub const fn with_stones(stones: u32) -> Self {
        Self { stones }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stones == 0
    }
}

impl Countable for Pit {
    fn stone_count(&self) -> u32 {
        self.stones
    }

    fn add_stones(&mut self, count: u32) {
        self.stones += count;
    }

    fn remove_stones(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pit[{}]", self.stones)
    }
}

/// A player's scoring container.
///
/// The owner is a seat key, bound once when players are registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Store {
    owner: Option<PlayerId>,
    stones: u32,
}

impl Store {
    /// An empty store bound to `owner`.
    #[must_use]
    pub const fn owned_by(owner: PlayerId) -> Self {
        Self {
            owner: Some(owner),
            stones: 0,
        }
    }

    /// The seat this store belongs to, if bound.
    #[must_use]
    pub const fn owner(&self) -> Option<PlayerId> {
        self.owner
    }
}

impl Countable for Store {
    fn stone_count(&self) -> u32 {
        self.stones
    }

    fn add_stones(&mut self, count: u32) {
        self.stones += count;
    }

    fn remove_stones(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.owner {
            Some(owner) => write!(f, "Player {}'s Store[{}]", owner, self.stones),
            None => write!(f, "Store[{}]", self.stones),
        }
    }
}
