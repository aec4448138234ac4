//! The world.

use crate::{
    cells::State,
    config::Config,
    error::Error,
    grid::Grid,
    rules::Life,
};
use log::{debug, trace};
use std::fmt::{self, Display, Formatter};

/// The world.
///
/// Owns the grid and the rule, and is the only way to change the grid.
/// All the mutating methods take `&mut self`, so a view obtained from
/// [`view`](Self::view) can never observe a half-computed generation.
#[derive(Clone, Debug)]
pub struct World {
    /// World configuration.
    config: Config,

    /// The rule of the cellular automaton.
    rule: Life,

    /// The cells.
    grid: Grid,

    /// Number of generations since creation or the last clear.
    generation: u64,
}

impl World {
    /// Creates a new world with all cells dead.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let grid = Grid::new(config.width, config.height)?;
        let rule = Life::new(config.boundary);
        debug!(
            "Created a {} x {} world with a {} boundary",
            grid.width(),
            grid.height(),
            rule.boundary()
        );
        Ok(World {
            config: config.clone(),
            rule,
            grid,
            generation: 0,
        })
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The rule.
    pub fn rule(&self) -> &Life {
        &self.rule
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Width of the world.
    pub fn get_width(&self) -> usize {
        self.grid.width()
    }

    /// Height of the world.
    pub fn get_height(&self) -> usize {
        self.grid.height()
    }

    /// Address of the cells of the current generation.
    ///
    /// Points to `width * height` bytes in row-major order, `0` for dead
    /// and `1` for alive. The address is the same for the whole lifetime
    /// of the world. Readers must not write through it, and must not read
    /// while another method of the world is running.
    pub fn get_grid_pointer(&self) -> *const u8 {
        self.grid.as_ptr()
    }

    /// The cells of the current generation, as a borrowed slice.
    pub fn view(&self) -> &[u8] {
        self.grid.view()
    }

    /// Advances the world by one generation.
    pub fn compute_next_generation(&mut self) {
        self.rule.step(&mut self.grid);
        self.generation += 1;
    }

    /// Kills every cell, and resets the generation counter.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.generation = 0;
        debug!("Cleared the world");
    }

    /// Flips the state of a cell.
    ///
    /// Does nothing if the cell is outside the world. Coordinates computed
    /// from pointer positions can be off by one at the edges, so this is
    /// not treated as an error.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        match self.grid.flip(x, y) {
            Some(state) => trace!("Toggled cell at ({}, {}) to {:?}", x, y, state),
            None => trace!("Ignored toggling cell at ({}, {})", x, y),
        }
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<State> {
        self.grid.get(x, y)
    }

    /// Sets the state of a cell.
    pub fn set_cell(&mut self, x: i32, y: i32, state: State) -> Result<(), Error> {
        self.grid.set(x, y, state)
    }

    /// Number of generations since creation or the last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Displays the whole world in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        let width = self.get_width();
        let mut str = String::with_capacity((width + 1) * self.get_height());
        for row in self.view().chunks(width) {
            for &cell in row {
                if State(cell).is_alive() {
                    str.push('o')
                } else {
                    str.push('.')
                }
            }
            str.push('\n');
        }
        str
    }
}

impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plaintext())
    }
}
