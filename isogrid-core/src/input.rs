use glam::Vec2;

use crate::highlight::HoverMode;

/// Logical keys in the viewer's fixed input vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogicalKey {
    Up,
    Down,
    Left,
    Right,
    CellMode,
    NeighborhoodMode,
}

impl LogicalKey {
    /// Map a browser `KeyboardEvent.code` to a logical key. Each direction is
    /// reachable from both an arrow key and a WASD key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(Self::Up),
            "ArrowDown" | "KeyS" => Some(Self::Down),
            "ArrowLeft" | "KeyA" => Some(Self::Left),
            "ArrowRight" | "KeyD" => Some(Self::Right),
            "KeyQ" => Some(Self::CellMode),
            "KeyE" => Some(Self::NeighborhoodMode),
            _ => None,
        }
    }
}

/// Pressed flags for the four movement directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    /// Net screen-space direction in the pixel convention: +x right, +y down.
    pub fn screen_delta(&self) -> Vec2 {
        let mut d = Vec2::ZERO;
        if self.right {
            d.x += 1.0;
        }
        if self.left {
            d.x -= 1.0;
        }
        if self.down {
            d.y += 1.0;
        }
        if self.up {
            d.y -= 1.0;
        }
        d
    }
}

/// One input event, decoupled from the listener that produced it so replays
/// are deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(LogicalKey),
    KeyUp(LogicalKey),
    PointerMove { x: f32, y: f32, dx: f32, dy: f32 },
    PointerDown,
    PointerUp,
    PointerEnter,
    PointerLeave,
}

/// Shared input state: written by event application, read once per tick.
/// Events narrower than one frame coalesce (last state wins; deltas sum).
#[derive(Clone, Debug)]
pub struct InputState {
    pub keys: DirectionKeys,
    pub hover_mode: HoverMode,
    pub pointer_x: f32,
    pub pointer_y: f32,
    /// Drag delta accumulated since the last tick consumed it.
    pub pointer_dx: f32,
    pub pointer_dy: f32,
    pub pointer_moved: bool,
    pub pointer_inside: bool,
    pub button_down: bool,
    /// Set only by a button press inside the viewport; cleared by release or
    /// by the pointer leaving. Re-entering with the button still held does
    /// not resume the drag.
    pub dragging: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: DirectionKeys::default(),
            hover_mode: HoverMode::default(),
            pointer_x: 0.0,
            pointer_y: 0.0,
            pointer_dx: 0.0,
            pointer_dy: 0.0,
            pointer_moved: false,
            pointer_inside: false,
            button_down: false,
            dragging: false,
        }
    }

    /// Fold one event into the state.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => match key {
                LogicalKey::Up => self.keys.up = true,
                LogicalKey::Down => self.keys.down = true,
                LogicalKey::Left => self.keys.left = true,
                LogicalKey::Right => self.keys.right = true,
                LogicalKey::CellMode => self.hover_mode = HoverMode::Cell,
                LogicalKey::NeighborhoodMode => self.hover_mode = HoverMode::Neighborhood,
            },
            InputEvent::KeyUp(key) => match key {
                LogicalKey::Up => self.keys.up = false,
                LogicalKey::Down => self.keys.down = false,
                LogicalKey::Left => self.keys.left = false,
                LogicalKey::Right => self.keys.right = false,
                // Mode keys switch on press only.
                LogicalKey::CellMode | LogicalKey::NeighborhoodMode => {}
            },
            InputEvent::PointerMove { x, y, dx, dy } => {
                self.pointer_x = x;
                self.pointer_y = y;
                self.pointer_dx += dx;
                self.pointer_dy += dy;
                self.pointer_moved = true;
            }
            InputEvent::PointerDown => {
                self.button_down = true;
                self.dragging = self.pointer_inside;
            }
            InputEvent::PointerUp => {
                self.button_down = false;
                self.dragging = false;
            }
            InputEvent::PointerEnter => {
                self.pointer_inside = true;
            }
            InputEvent::PointerLeave => {
                self.pointer_inside = false;
                self.dragging = false;
            }
        }
    }

    /// Reset per-frame deltas after the tick has consumed them.
    pub fn end_frame(&mut self) {
        self.pointer_dx = 0.0;
        self.pointer_dy = 0.0;
        self.pointer_moved = false;
    }
}
