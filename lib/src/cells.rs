//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// A cell occupies exactly one byte of the grid buffer, so the inner value
/// is what an external reader sees through the grid view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct State(pub u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed. Signed, so that
/// coordinates computed by a caller outside the grid can be represented
/// and rejected.
pub type Coord = (i32, i32);
