//! A fixed-size [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! engine whose grid can be observed without copying.
//!
//! The grid is stored as one byte per cell in row-major order
//! (`index = y * width + x`), `0` for dead and `1` for alive. The address
//! of that buffer never changes while the engine is alive, so an external
//! reader (for example JavaScript reading WebAssembly memory) can keep a
//! view of it across generations.
//!
//! # Example
//!
//! ```rust
//! use lifegrid_lib::Config;
//!
//! let mut world = Config::new(5, 5).world().unwrap();
//! for x in 1..=3 {
//!     world.toggle_cell(x, 2);
//! }
//! world.compute_next_generation();
//! assert_eq!(
//!     world.plaintext(),
//!     ".....\n\
//!      ..o..\n\
//!      ..o..\n\
//!      ..o..\n\
//!      .....\n"
//! );
//! ```

mod cells;
mod config;
mod error;
mod grid;
pub mod rules;
mod world;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use rules::{Boundary, Life};
pub use world::World;
