//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Truco here is always heads-up: the human-controlled `Player` against the
//! scripted `Cpu`. `Side::opponent()` is the only turn arithmetic needed.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two parties at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled side, driven by the presentation layer.
    Player,
    /// The scripted opponent, driven by an `OpponentPolicy`.
    Cpu,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Cpu];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }

    /// Slot index (0 = player, 1 = cpu).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Cpu => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Cpu => write!(f, "cpu"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use truco_engine::core::{Side, SideMap};
///
/// let mut score: SideMap<u8> = SideMap::with_value(0);
/// score[Side::Cpu] += 3;
///
/// assert_eq!(score[Side::Player], 0);
/// assert_eq!(score[Side::Cpu], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Cpu)],
        }
    }

    /// Create a map from explicit player and cpu values.
    pub fn from_pair(player: T, cpu: T) -> Self {
        Self { data: [player, cpu] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Map every entry into a new `SideMap`.
    pub fn map<U>(&self, f: impl Fn(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, self.get(side)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
