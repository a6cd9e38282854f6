use glam::{Mat4, Vec2, Vec3};

use crate::input::DirectionKeys;

/// World units added to the camera target per frame per held direction key.
pub const MOVE_SPEED: f32 = 0.1;
/// World units per pixel of mouse drag.
pub const DRAG_SENSITIVITY: f32 = 0.02;
/// Fraction of the remaining distance to the target covered each frame.
pub const DAMPING: f32 = 0.1;
/// Base size of the orthographic frustum in world units.
pub const FRUSTUM_SIZE: f32 = 10.0;
/// Orthographic zoom divisor (larger = tighter view).
pub const CAMERA_SIZE: f32 = 3.0;

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Fixed eye offset from the followed ground point. Equal x/z components keep
/// the view aligned with the 45° panning convention.
const EYE_OFFSET: Vec3 = Vec3::new(7.0, 7.0, 7.0);

const FRAC_1_SQRT_2: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Rotate a screen-plane vector 45° into ground-plane (x, z) coordinates, so
/// screen "up" maps to a world-space diagonal.
fn rotate_iso(v: Vec2) -> Vec2 {
    Vec2::new((v.x - v.y) * FRAC_1_SQRT_2, (v.x + v.y) * FRAC_1_SQRT_2)
}

/// Camera pose handed to the render collaborator.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

/// Smoothly follows a ground-plane target driven by keys and mouse drag.
///
/// The target moves immediately with input; the rendered position is
/// interpolated toward it by a fixed damping factor every tick, so the camera
/// decelerates into place and never snaps.
pub struct CameraController {
    /// Ground-plane (x, z) point the camera wants to look at.
    target: Vec2,
    /// Smoothed (x, z) point the camera actually looks at; lags the target.
    position: Vec2,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            target: Vec2::ZERO,
            position: Vec2::ZERO,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Advance the target by one frame of held direction keys. Opposite keys
    /// cancel; diagonals sum the two per-key deltas.
    pub fn apply_key_input(&mut self, keys: &DirectionKeys) {
        let screen = keys.screen_delta();
        if screen == Vec2::ZERO {
            return;
        }
        self.target += rotate_iso(screen) * MOVE_SPEED;
    }

    /// Accumulate a mouse-drag pixel delta into the target. The world moves
    /// with the pointer, so the delta is negated before the 45° rotation.
    pub fn apply_drag_input(&mut self, dx: f32, dy: f32) {
        self.target += rotate_iso(Vec2::new(-dx, -dy)) * DRAG_SENSITIVITY;
    }

    /// Move the rendered position a fixed fraction of the remaining distance
    /// toward the target and return the resulting pose. Converges
    /// asymptotically without overshoot; a position already at the target
    /// stays put.
    pub fn tick(&mut self) -> CameraPose {
        self.position += (self.target - self.position) * DAMPING;
        self.pose()
    }

    /// Current pose without advancing the smoothing.
    pub fn pose(&self) -> CameraPose {
        let target = Vec3::new(self.position.x, 0.0, self.position.y);
        CameraPose {
            eye: target + EYE_OFFSET,
            target,
        }
    }
}

/// Orthographic projection recomputed from the viewport aspect ratio.
/// Vertical bounds are fixed; horizontal bounds scale with aspect.
pub struct Projection {
    aspect: f32,
}

impl Projection {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            aspect: width / height,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    /// Frustum bounds as (left, right, bottom, top).
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let half_h = FRUSTUM_SIZE / CAMERA_SIZE;
        let half_w = half_h * self.aspect;
        (-half_w, half_w, -half_h, half_h)
    }

    pub fn matrix(&self) -> Mat4 {
        let (left, right, bottom, top) = self.bounds();
        Mat4::orthographic_rh(left, right, bottom, top, NEAR, FAR)
    }
}
