use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::grid::TileGrid;

/// One flat-shaded tile quad, as uploaded to the render collaborator's
/// instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TileInstance {
    pub position: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Per-frame camera uniform: view-projection matrix plus eye position.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

/// Build the full instance buffer from the current per-tile colors.
/// Positions are static; rebuilding colors after a highlight change is the
/// only per-frame scene mutation.
pub fn build_tile_instances(colors: &[[f32; 4]]) -> Vec<TileInstance> {
    TileGrid::cells()
        .map(|cell| TileInstance {
            position: TileGrid::cell_center(cell).to_array(),
            _pad: 0.0,
            color: colors[cell.index()],
        })
        .collect()
}

pub fn camera_uniform(view_proj: Mat4, eye: Vec3) -> CameraUniform {
    CameraUniform {
        view_proj: view_proj.to_cols_array_2d(),
        eye: [eye.x, eye.y, eye.z, 1.0],
    }
}
