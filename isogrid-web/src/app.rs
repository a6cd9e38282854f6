use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use isogrid_core::{InputEvent, LogicalKey, Viewer, GRID_SIZE};

use crate::hud::Hud;

/// Main application state for the WASM runtime. One instance owns all viewer
/// state; JavaScript listeners feed events in and the render collaborator
/// pulls buffers out.
#[wasm_bindgen]
pub struct App {
    viewer: Viewer,
    canvas: HtmlCanvasElement,
    hud: Hud,
}

#[wasm_bindgen]
impl App {
    /// Create a new App bound to a canvas and a HUD counter element.
    pub fn new(canvas_id: &str, counter_id: &str) -> Result<App, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;

        let width = (canvas.client_width() as f32).max(1.0);
        let height = (canvas.client_height() as f32).max(1.0);
        let viewer = Viewer::new(width, height);

        let hud = Hud::new(&document, counter_id)?;
        hud.set_coins(viewer.coins());

        log::info!(
            "Viewer initialized: {width}x{height} canvas, {GRID_SIZE}x{GRID_SIZE} grid",
        );

        Ok(App {
            viewer,
            canvas,
            hud,
        })
    }

    /// Run one tick of the game loop. Called from requestAnimationFrame.
    pub fn frame(&mut self) {
        self.viewer.frame();
    }

    /// Recompute the orthographic frustum from the current canvas size.
    pub fn resize(&mut self) {
        let width = (self.canvas.client_width() as f32).max(1.0);
        let height = (self.canvas.client_height() as f32).max(1.0);
        self.viewer.resize(width, height);
    }

    // ── event ingress (wired by JavaScript listeners) ──

    /// Keydown by `KeyboardEvent.code`. Unknown codes are ignored.
    pub fn key_down(&mut self, code: &str) {
        if let Some(key) = LogicalKey::from_code(code) {
            self.viewer.handle_event(InputEvent::KeyDown(key));
        }
    }

    /// Keyup by `KeyboardEvent.code`. Unknown codes are ignored.
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = LogicalKey::from_code(code) {
            self.viewer.handle_event(InputEvent::KeyUp(key));
        }
    }

    /// Pointer move with canvas-relative position and movement delta.
    pub fn pointer_move(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.viewer
            .handle_event(InputEvent::PointerMove { x, y, dx, dy });
    }

    pub fn pointer_down(&mut self) {
        self.viewer.handle_event(InputEvent::PointerDown);
    }

    pub fn pointer_up(&mut self) {
        self.viewer.handle_event(InputEvent::PointerUp);
    }

    pub fn pointer_enter(&mut self) {
        self.viewer.handle_event(InputEvent::PointerEnter);
    }

    pub fn pointer_leave(&mut self) {
        self.viewer.handle_event(InputEvent::PointerLeave);
    }

    // ── render collaborator interface ──

    /// Tile instance buffer contents: 8 floats per tile (xyz position, pad,
    /// rgba color), row-major over the grid.
    pub fn tile_instance_data(&self) -> js_sys::Float32Array {
        let instances = self.viewer.tile_instances();
        js_sys::Float32Array::from(bytemuck::cast_slice::<_, f32>(&instances))
    }

    /// Camera uniform contents: column-major view-projection matrix followed
    /// by the eye position (20 floats).
    pub fn camera_uniform_data(&self) -> js_sys::Float32Array {
        let uniform = self.viewer.camera_uniform();
        js_sys::Float32Array::from(bytemuck::cast_slice::<_, f32>(std::slice::from_ref(&uniform)))
    }

    // ── hud ──

    pub fn coins(&self) -> u32 {
        self.viewer.coins()
    }

    pub fn set_coins(&mut self, coins: u32) {
        self.viewer.set_coins(coins);
        self.hud.set_coins(coins);
    }
}
