use glam::Vec3;

/// Cells per side of the fixed square grid.
pub const GRID_SIZE: usize = 8;
/// World-space edge length of one tile.
pub const TILE_SIZE: f32 = 1.0;
/// Number of tile categories.
pub const NUM_CATEGORIES: usize = 4;

/// Base color per category (flat-shaded, linear RGBA).
pub const CATEGORY_COLORS: [[f32; 4]; NUM_CATEGORIES] = [
    [0.36, 0.60, 0.33, 1.0], // grass
    [0.55, 0.47, 0.37, 1.0], // dirt
    [0.52, 0.54, 0.56, 1.0], // stone
    [0.76, 0.70, 0.50, 1.0], // sand
];

/// Color applied to hovered cells.
pub const HIGHLIGHT_COLOR: [f32; 4] = [0.95, 0.85, 0.25, 1.0];

/// Integer coordinates of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    /// Row-major index into per-tile buffers.
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// The up-to-3×3 block centered on this cell, clipped at the grid bounds.
    /// No wraparound: neighbors outside the grid are skipped.
    pub fn neighborhood(self) -> Vec<GridCell> {
        let mut cells = Vec::with_capacity(9);
        for drow in -1i32..=1 {
            for dcol in -1i32..=1 {
                let row = self.row as i32 + drow;
                let col = self.col as i32 + dcol;
                if (0..GRID_SIZE as i32).contains(&row) && (0..GRID_SIZE as i32).contains(&col) {
                    cells.push(GridCell {
                        row: row as usize,
                        col: col as usize,
                    });
                }
            }
        }
        cells
    }
}

/// The fixed 8×8 tile arrangement. Categories are assigned once at
/// construction and cells are never moved or destroyed.
pub struct TileGrid {
    categories: [u8; GRID_SIZE * GRID_SIZE],
}

impl TileGrid {
    pub fn new() -> Self {
        let mut categories = [0u8; GRID_SIZE * GRID_SIZE];
        for cell in Self::cells() {
            // Deterministic spread: all four categories appear and adjacent
            // tiles usually differ.
            categories[cell.index()] = ((cell.row * 3 + cell.col * 5) % NUM_CATEGORIES) as u8;
        }
        Self { categories }
    }

    /// Iterate all cells in row-major order.
    pub fn cells() -> impl Iterator<Item = GridCell> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| GridCell { row, col }))
    }

    pub fn category(&self, cell: GridCell) -> u8 {
        self.categories[cell.index()]
    }

    pub fn base_color(&self, cell: GridCell) -> [f32; 4] {
        CATEGORY_COLORS[self.category(cell) as usize]
    }

    /// One base color per cell, row-major.
    pub fn base_colors(&self) -> Vec<[f32; 4]> {
        Self::cells().map(|cell| self.base_color(cell)).collect()
    }

    /// World-space center of a tile. The grid is centered on the origin and
    /// tiles lie flat on the y=0 plane.
    pub fn cell_center(cell: GridCell) -> Vec3 {
        let half = (GRID_SIZE as f32 - 1.0) * 0.5;
        Vec3::new(
            (cell.col as f32 - half) * TILE_SIZE,
            0.0,
            (cell.row as f32 - half) * TILE_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── GridCell ──

    #[test]
    fn test_index_row_major() {
        assert_eq!(GridCell { row: 0, col: 0 }.index(), 0);
        assert_eq!(GridCell { row: 0, col: 7 }.index(), 7);
        assert_eq!(GridCell { row: 1, col: 0 }.index(), 8);
        assert_eq!(GridCell { row: 7, col: 7 }.index(), 63);
    }

    #[test]
    fn test_neighborhood_interior_is_full_block() {
        let cells = GridCell { row: 3, col: 3 }.neighborhood();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&GridCell { row: 3, col: 3 }));
        assert!(cells.contains(&GridCell { row: 2, col: 4 }));
    }

    #[test]
    fn test_neighborhood_corner_clipped_to_four() {
        let cells = GridCell { row: 0, col: 0 }.neighborhood();
        assert_eq!(cells.len(), 4);
        for cell in &cells {
            assert!(cell.row < GRID_SIZE && cell.col < GRID_SIZE);
        }
    }

    #[test]
    fn test_neighborhood_edge_clipped_to_six() {
        assert_eq!(GridCell { row: 0, col: 3 }.neighborhood().len(), 6);
        assert_eq!(GridCell { row: 4, col: 7 }.neighborhood().len(), 6);
    }

    // ── TileGrid ──

    #[test]
    fn test_categories_in_range_and_all_present() {
        let grid = TileGrid::new();
        let mut seen = [false; NUM_CATEGORIES];
        for cell in TileGrid::cells() {
            let cat = grid.category(cell) as usize;
            assert!(cat < NUM_CATEGORIES);
            seen[cat] = true;
        }
        assert!(seen.iter().all(|&s| s), "some category never appears");
    }

    #[test]
    fn test_grid_centered_on_origin() {
        let first = TileGrid::cell_center(GridCell { row: 0, col: 0 });
        let last = TileGrid::cell_center(GridCell { row: 7, col: 7 });
        assert_eq!(first, Vec3::new(-3.5, 0.0, -3.5));
        assert_eq!(last, Vec3::new(3.5, 0.0, 3.5));
    }

    #[test]
    fn test_base_colors_match_categories() {
        let grid = TileGrid::new();
        let colors = grid.base_colors();
        assert_eq!(colors.len(), GRID_SIZE * GRID_SIZE);
        for cell in TileGrid::cells() {
            assert_eq!(colors[cell.index()], grid.base_color(cell));
        }
    }
}
