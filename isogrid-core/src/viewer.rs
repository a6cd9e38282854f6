use glam::Mat4;

use crate::camera::{CameraController, CameraPose, Projection};
use crate::grid::{GridCell, TileGrid};
use crate::highlight::{Highlighter, HoverMode};
use crate::input::{InputEvent, InputState};
use crate::pick::{pick, Ray};
use crate::scene::{self, CameraUniform, TileInstance};

/// Coin counter start value shown in the HUD overlay.
pub const INITIAL_COINS: u32 = 12;

/// The whole game view: one owner for all mutable state, stepped once per
/// display frame. Event handlers feed [`InputEvent`]s in between ticks;
/// nothing else writes the shared state.
pub struct Viewer {
    grid: TileGrid,
    camera: CameraController,
    projection: Projection,
    input: InputState,
    highlighter: Highlighter,
    /// Current per-tile colors, row-major. Base category colors with the
    /// highlight set painted over them.
    colors: Vec<[f32; 4]>,
    width: f32,
    height: f32,
    coins: u32,
}

impl Viewer {
    pub fn new(width: f32, height: f32) -> Self {
        let grid = TileGrid::new();
        let colors = grid.base_colors();
        Self {
            grid,
            camera: CameraController::new(),
            projection: Projection::new(width, height),
            input: InputState::new(),
            highlighter: Highlighter::new(),
            colors,
            width,
            height,
            coins: INITIAL_COINS,
        }
    }

    /// Feed one input event. Applied immediately to the input state, consumed
    /// by the next [`frame`](Self::frame).
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.projection.resize(width, height);
        log::debug!("viewport resized to {width}x{height}");
    }

    /// Run one tick: apply held keys and accumulated drag to the camera
    /// target, advance the smoothed camera, and recompute the hover highlight
    /// if the pointer moved since the last tick.
    pub fn frame(&mut self) -> CameraPose {
        self.camera.apply_key_input(&self.input.keys);
        if self.input.dragging && self.input.pointer_inside {
            self.camera
                .apply_drag_input(self.input.pointer_dx, self.input.pointer_dy);
        }
        let pose = self.camera.tick();

        if self.input.pointer_moved {
            let hit = if self.input.pointer_inside {
                let ray = Ray::from_screen(
                    self.input.pointer_x,
                    self.input.pointer_y,
                    self.width,
                    self.height,
                    self.projection.matrix() * pose.view_matrix(),
                );
                pick(&ray).map(|hit| hit.cell)
            } else {
                None
            };
            self.highlighter
                .update(&self.grid, &mut self.colors, hit, self.input.hover_mode);
        }

        self.input.end_frame();
        pose
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn hover_mode(&self) -> HoverMode {
        self.input.hover_mode
    }

    pub fn highlighted(&self) -> &[GridCell] {
        self.highlighter.highlighted()
    }

    /// Current per-tile colors, row-major.
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn set_coins(&mut self, coins: u32) {
        self.coins = coins;
    }

    /// View-projection matrix for the current (smoothed) camera pose.
    pub fn view_proj(&self) -> Mat4 {
        self.projection.matrix() * self.camera.pose().view_matrix()
    }

    /// Instance buffer contents for the render collaborator.
    pub fn tile_instances(&self) -> Vec<TileInstance> {
        scene::build_tile_instances(&self.colors)
    }

    /// Camera uniform contents for the render collaborator.
    pub fn camera_uniform(&self) -> CameraUniform {
        scene::camera_uniform(self.view_proj(), self.camera.pose().eye)
    }
}
