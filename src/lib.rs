#[macro_use]
mod utils;
extern crate nalgebra_glm as glm;

pub mod app;
pub mod color;
pub mod config;
pub mod dom_helpers;
pub mod error;
pub mod particle;
pub mod renderer;
pub mod slowdown;
pub mod starfield;

use config::StarfieldConfig;
use wasm_bindgen::prelude::*;

// Use `wee_alloc` as the global allocator when the feature is enabled
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Starts the starfield on the canvas with the given id, using the default
// settings. Fails if the canvas is missing.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    app::run(canvas_id, StarfieldConfig::default())?;
    Ok(())
}

// Same as `start`, with settings read from a TOML document
#[wasm_bindgen]
pub fn start_with_config(canvas_id: &str, config_toml: &str) -> Result<(), JsValue> {
    let config = StarfieldConfig::from_toml(config_toml)?;
    app::run(canvas_id, config)?;
    Ok(())
}
