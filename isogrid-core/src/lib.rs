//! Isogrid core — deterministic simulation for the isometric tile viewer.
//!
//! Everything here is renderer-free: input reduction, isometric camera
//! panning with exponential smoothing, screen-to-grid ray picking, and hover
//! highlighting over a fixed 8×8 tile grid. The WASM web runtime and the
//! headless CLI both drive the same [`Viewer`], one tick per frame.

pub mod camera;
pub mod grid;
pub mod highlight;
pub mod input;
pub mod pick;
pub mod scene;
pub mod viewer;

pub use camera::{CameraController, CameraPose, Projection};
pub use grid::{GridCell, TileGrid, CATEGORY_COLORS, GRID_SIZE, HIGHLIGHT_COLOR};
pub use highlight::{Highlighter, HoverMode};
pub use input::{DirectionKeys, InputEvent, InputState, LogicalKey};
pub use pick::{pick, PickHit, Ray};
pub use viewer::Viewer;
