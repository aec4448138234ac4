//! WebAssembly bindings of the engine.
//!
//! A renderer running in JavaScript uses it like this:
//!
//! ```js
//! const engine = new Engine(80, 60);
//! const cells = new Uint8Array(
//!     memory().buffer,
//!     engine.get_grid_pointer(),
//!     engine.get_width() * engine.get_height(),
//! );
//! engine.toggle_cell(10, 10);
//! engine.compute_next_generation();
//! // `cells` now shows the next generation.
//! engine.free();
//! ```
//!
//! The pointer never changes, but the `Uint8Array` has to be recreated if
//! the linear memory grows, since growing detaches the old `ArrayBuffer`.

mod engine;

pub use engine::Engine;
use js_sys::WebAssembly;
use wasm_bindgen::{prelude::*, JsCast};

/// Installs the logger, so that the engine's log reaches the console.
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
}

/// The linear memory of this module, which the grid pointer points into.
#[wasm_bindgen]
pub fn memory() -> WebAssembly::Memory {
    wasm_bindgen::memory().unchecked_into()
}
