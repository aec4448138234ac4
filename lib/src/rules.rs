//! The rule of the cellular automaton.
//!
//! Only [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! (`B3/S23`) on the Moore neighborhood is supported.

use crate::{
    cells::{State, ALIVE, DEAD},
    grid::Grid,
};
use educe::Educe;
use log::debug;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offsets of the eight neighbors in the Moore neighborhood.
static NBHD: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How to treat neighbors that fall outside the grid.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Boundary {
    /// Positions outside the grid are always dead.
    #[educe(Default)]
    Dead,
    /// The grid wraps around at the edges, so that the leftmost column
    /// is adjacent to the rightmost one, and the top row to the bottom row.
    Torus,
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dead" | "d" => Ok(Boundary::Dead),
            "torus" | "t" => Ok(Boundary::Torus),
            _ => Err(String::from("invalid Boundary")),
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Boundary::Dead => "dead",
            Boundary::Torus => "torus",
        };
        write!(f, "{}", s)
    }
}

/// Conway's Game of Life, `B3/S23`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Life {
    boundary: Boundary,
}

impl Life {
    /// Creates the rule with the given boundary policy.
    pub fn new(boundary: Boundary) -> Self {
        Life { boundary }
    }

    /// The boundary policy.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// The state of a cell in the next generation,
    /// given its current state and the number of living neighbors.
    #[inline]
    pub fn transition(state: State, count: u8) -> State {
        match (state, count) {
            (ALIVE, 2) | (ALIVE, 3) => ALIVE,
            (DEAD, 3) => ALIVE,
            _ => DEAD,
        }
    }

    /// Maps a neighbor position to a position in the grid,
    /// or `None` if it is outside the grid and the boundary is dead.
    #[inline]
    fn resolve(&self, width: i32, height: i32, x: i32, y: i32) -> Option<(i32, i32)> {
        match self.boundary {
            Boundary::Dead => {
                if x >= 0 && x < width && y >= 0 && y < height {
                    Some((x, y))
                } else {
                    None
                }
            }
            Boundary::Torus => Some((x.rem_euclid(width), y.rem_euclid(height))),
        }
    }

    /// Positions in the grid that are counted as neighbors of `(x, y)`.
    ///
    /// With a dead boundary, a corner cell has 3 of them, an edge cell 5,
    /// and an interior cell 8. With a torus there are always 8, though on
    /// a grid narrower than 3 cells the same position may appear more than
    /// once, and may even be `(x, y)` itself.
    pub fn neighbors<'a>(
        &'a self,
        grid: &Grid,
        x: i32,
        y: i32,
    ) -> impl Iterator<Item = (i32, i32)> + 'a {
        let width = grid.width() as i32;
        let height = grid.height() as i32;
        NBHD.iter()
            .filter_map(move |&(dx, dy)| self.resolve(width, height, x + dx, y + dy))
    }

    /// Number of living neighbors of `(x, y)` in the current generation.
    pub fn neighbor_count(&self, grid: &Grid, x: i32, y: i32) -> u8 {
        self.count_in(grid.view(), grid.width(), grid.height(), x, y)
    }

    fn count_in(&self, cells: &[u8], width: usize, height: usize, x: i32, y: i32) -> u8 {
        let (w, h) = (width as i32, height as i32);
        NBHD.iter()
            .filter_map(|&(dx, dy)| self.resolve(w, h, x + dx, y + dy))
            .map(|(nx, ny)| cells[ny as usize * width + nx as usize])
            .sum()
    }

    /// Advances the grid by one generation.
    ///
    /// The next generation is computed into the scratch buffer from the
    /// current one, and then copied back, so the address of the current
    /// buffer does not change.
    pub fn step(&self, grid: &mut Grid) {
        let (width, height) = (grid.width(), grid.height());
        let (current, scratch) = grid.buffers();
        for y in 0..height {
            let row = y * width;
            for x in 0..width {
                let count = self.count_in(current, width, height, x as i32, y as i32);
                scratch[row + x] = Self::transition(State(current[row + x]), count).0;
            }
        }
        grid.commit();
        debug!("Stepped to a grid with {} living cells", grid.population());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition() {
        for count in 0..=8 {
            let survive = count == 2 || count == 3;
            assert_eq!(Life::transition(ALIVE, count), State::from(survive));
            assert_eq!(Life::transition(DEAD, count), State::from(count == 3));
        }
    }

    #[test]
    fn parse_boundary() {
        assert_eq!("dead".parse::<Boundary>(), Ok(Boundary::Dead));
        assert_eq!("t".parse::<Boundary>(), Ok(Boundary::Torus));
        assert!("klein".parse::<Boundary>().is_err());
        assert_eq!(Boundary::Torus.to_string(), "torus");
    }

    #[test]
    fn torus_neighbors_wrap() {
        let grid = Grid::new(4, 4).unwrap();
        let life = Life::new(Boundary::Torus);
        let mut nbhd: Vec<_> = life.neighbors(&grid, 0, 0).collect();
        nbhd.sort();
        assert_eq!(
            nbhd,
            vec![(0, 1), (0, 3), (1, 0), (1, 1), (1, 3), (3, 0), (3, 1), (3, 3)]
        );
    }
}
