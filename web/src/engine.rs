//! The engine exported to JavaScript.

use lifegrid_lib::{Config, World};
use log::info;
use wasm_bindgen::prelude::*;

/// A Game of Life engine.
///
/// JavaScript owns it, and releases its memory with the generated `free()`.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Engine {
    world: World,
}

impl Engine {
    fn from_world(world: World) -> Self {
        info!(
            "Engine ready: {} x {}, grid at {:p}",
            world.get_width(),
            world.get_height(),
            world.get_grid_pointer()
        );
        Engine { world }
    }

    /// Creates an engine from a configuration.
    pub fn with_config(config: &Config) -> Result<Self, lifegrid_lib::Error> {
        config.world().map(Engine::from_world)
    }

    /// The world inside.
    pub fn world(&self) -> &World {
        &self.world
    }
}

#[wasm_bindgen]
impl Engine {
    /// Creates an engine with a dead boundary and all cells dead.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<Engine, JsError> {
        Ok(Engine::with_config(&Config::new(width, height))?)
    }

    /// Creates an engine from a JSON configuration such as
    /// `{"width": 80, "height": 60, "boundary": "torus"}`.
    ///
    /// Missing fields take their default values.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Engine, JsError> {
        let config: Config = serde_json::from_str(json)?;
        Ok(Engine::with_config(&config)?)
    }

    /// Width of the grid.
    pub fn get_width(&self) -> usize {
        self.world.get_width()
    }

    /// Height of the grid.
    pub fn get_height(&self) -> usize {
        self.world.get_height()
    }

    /// Offset in the linear memory of `width * height` bytes, one per cell,
    /// in row-major order, `0` for dead and `1` for alive.
    ///
    /// It stays the same until `free()`. Only read through it.
    pub fn get_grid_pointer(&self) -> *const u8 {
        self.world.get_grid_pointer()
    }

    /// Advances the grid by one generation.
    pub fn compute_next_generation(&mut self) {
        self.world.compute_next_generation();
    }

    /// Kills every cell.
    pub fn clear_grid(&mut self) {
        self.world.clear_grid();
    }

    /// Flips a cell. Does nothing for coordinates outside the grid.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.world.toggle_cell(x, y);
    }

    /// Number of generations since creation or the last clear.
    pub fn generation(&self) -> f64 {
        self.world.generation() as f64
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.world.population()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_lib::Boundary;

    #[test]
    fn surface() {
        let mut engine = Engine::new(5, 5).unwrap();
        assert_eq!(engine.get_width(), 5);
        assert_eq!(engine.get_height(), 5);
        let ptr = engine.get_grid_pointer();
        for x in 1..=3 {
            engine.toggle_cell(x, 2);
        }
        engine.toggle_cell(5, 5);
        engine.compute_next_generation();
        assert_eq!(engine.get_grid_pointer(), ptr);
        assert_eq!(engine.population(), 3);
        assert_eq!(engine.generation(), 1.0);
        assert_eq!(engine.world().get_cell(2, 1), Some(lifegrid_lib::ALIVE));
        engine.clear_grid();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0.0);
    }

    #[test]
    fn from_config() {
        let engine = Engine::from_config(r#"{"width": 7, "boundary": "torus"}"#).unwrap();
        assert_eq!(engine.get_width(), 7);
        assert_eq!(engine.get_height(), 60);
        assert_eq!(engine.world().config().boundary, Boundary::Torus);
    }

    #[test]
    fn with_config_rejects_empty() {
        assert_eq!(
            Engine::with_config(&Config::new(0, 3)).err(),
            Some(lifegrid_lib::Error::NonPositiveError)
        );
    }
}
