use glam::{Mat4, Vec3};

use crate::grid::{GridCell, TileGrid, TILE_SIZE};

const EPSILON: f32 = 1e-6;

/// A world-space ray.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Unproject a viewport pixel into a world-space ray through the current
    /// view-projection matrix. Depth range is 0..1 (wgpu convention).
    pub fn from_screen(x: f32, y: f32, width: f32, height: f32, view_proj: Mat4) -> Self {
        let ndc_x = x / width * 2.0 - 1.0;
        let ndc_y = 1.0 - y / height * 2.0;
        let inv = view_proj.inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray {
            origin: near,
            dir: (far - near).normalize(),
        }
    }
}

/// The nearest tile surface a ray hit.
#[derive(Clone, Copy, Debug)]
pub struct PickHit {
    pub cell: GridCell,
    pub distance: f32,
}

/// Intersect a ray against every tile surface and return the nearest hit, or
/// `None` when the ray misses the grid entirely.
pub fn pick(ray: &Ray) -> Option<PickHit> {
    let mut nearest: Option<PickHit> = None;
    for cell in TileGrid::cells() {
        let Some(distance) = intersect_tile(cell, ray) else {
            continue;
        };
        match &nearest {
            Some(hit) if hit.distance <= distance => {}
            _ => nearest = Some(PickHit { cell, distance }),
        }
    }
    nearest
}

/// Ray vs. one tile rectangle on the ground plane. Returns the distance along
/// the ray, or `None` when the ray is parallel, points away, or lands outside
/// the rectangle.
fn intersect_tile(cell: GridCell, ray: &Ray) -> Option<f32> {
    if ray.dir.y.abs() < EPSILON {
        return None;
    }
    let t = -ray.origin.y / ray.dir.y;
    if t < 0.0 {
        return None;
    }
    let p = ray.origin + ray.dir * t;
    let center = TileGrid::cell_center(cell);
    let half = TILE_SIZE * 0.5;
    if (p.x - center.x).abs() <= half && (p.z - center.z).abs() <= half {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraController, Projection};

    fn down_ray_over(point: Vec3) -> Ray {
        Ray {
            origin: point + Vec3::new(0.0, 10.0, 0.0),
            dir: Vec3::NEG_Y,
        }
    }

    // ── pick ──

    #[test]
    fn test_straight_down_hits_the_cell_underneath() {
        let cell = GridCell { row: 2, col: 5 };
        let hit = pick(&down_ray_over(TileGrid::cell_center(cell))).unwrap();
        assert_eq!(hit.cell, cell);
        assert!((hit.distance - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss_outside_grid_returns_none() {
        assert!(pick(&down_ray_over(Vec3::new(20.0, 0.0, 20.0))).is_none());
    }

    #[test]
    fn test_parallel_ray_returns_none() {
        let ray = Ray {
            origin: Vec3::new(-10.0, 1.0, 0.0),
            dir: Vec3::X,
        };
        assert!(pick(&ray).is_none());
    }

    #[test]
    fn test_ray_pointing_away_returns_none() {
        let ray = Ray {
            origin: Vec3::new(0.0, 10.0, 0.0),
            dir: Vec3::Y,
        };
        assert!(pick(&ray).is_none());
    }

    // ── Ray::from_screen ──

    #[test]
    fn test_screen_center_ray_reaches_the_grid() {
        let cam = CameraController::new();
        let proj = Projection::new(800.0, 600.0);
        let view_proj = proj.matrix() * cam.pose().view_matrix();

        let ray = Ray::from_screen(400.0, 300.0, 800.0, 600.0, view_proj);
        assert!((ray.dir.length() - 1.0).abs() < 1e-4);
        // The camera looks at the grid center, so the center pixel must hit.
        let hit = pick(&ray).unwrap();
        assert!(hit.cell.row >= 3 && hit.cell.row <= 4, "{:?}", hit.cell);
        assert!(hit.cell.col >= 3 && hit.cell.col <= 4, "{:?}", hit.cell);
    }

    #[test]
    fn test_screen_ray_matches_projected_cell() {
        let cam = CameraController::new();
        let proj = Projection::new(800.0, 600.0);
        let view_proj = proj.matrix() * cam.pose().view_matrix();

        // Project a known cell center to the screen and pick it back.
        let cell = GridCell { row: 1, col: 6 };
        let ndc = view_proj.project_point3(TileGrid::cell_center(cell));
        let x = (ndc.x + 1.0) * 0.5 * 800.0;
        let y = (1.0 - ndc.y) * 0.5 * 600.0;

        let hit = pick(&Ray::from_screen(x, y, 800.0, 600.0, view_proj)).unwrap();
        assert_eq!(hit.cell, cell);
    }
}
