//! Isogrid WASM Web Runtime
//!
//! Browser glue for the isometric tile viewer: a wasm-bindgen [`App`] owns the
//! core `Viewer`, ingests DOM input events, steps one tick per
//! requestAnimationFrame, and hands flat-shaded tile instance data plus the
//! camera pose to the WebGPU render collaborator on the JavaScript side.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod hud;

#[cfg(target_arch = "wasm32")]
pub use app::App;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point — called when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Isogrid web runtime initialized");
}

/// Create the application bound to a canvas and a HUD counter element.
///
/// Called from JavaScript, which also wires the DOM listeners and the
/// requestAnimationFrame loop to the returned object.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn create_app(canvas_id: String, counter_id: String) -> Result<app::App, JsValue> {
    app::App::new(&canvas_id, &counter_id)
}
