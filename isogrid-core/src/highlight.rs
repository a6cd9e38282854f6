use crate::grid::{GridCell, TileGrid, HIGHLIGHT_COLOR};

/// Whether hovering highlights one cell or its 3×3 neighborhood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverMode {
    Cell,
    #[default]
    Neighborhood,
}

/// Owns the set of currently highlighted cells and applies it to a per-tile
/// color buffer.
pub struct Highlighter {
    highlighted: Vec<GridCell>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            highlighted: Vec::with_capacity(9),
        }
    }

    pub fn highlighted(&self) -> &[GridCell] {
        &self.highlighted
    }

    /// Recompute the highlight set for a new hover hit.
    ///
    /// Every previously highlighted cell is restored to its base category
    /// color before the new set is applied, so a stale highlight can never
    /// survive a pointer move. `hit = None` just clears.
    pub fn update(
        &mut self,
        grid: &TileGrid,
        colors: &mut [[f32; 4]],
        hit: Option<GridCell>,
        mode: HoverMode,
    ) {
        for cell in self.highlighted.drain(..) {
            colors[cell.index()] = grid.base_color(cell);
        }
        let Some(center) = hit else {
            return;
        };
        match mode {
            HoverMode::Cell => self.highlighted.push(center),
            HoverMode::Neighborhood => self.highlighted.extend(center.neighborhood()),
        }
        for cell in &self.highlighted {
            colors[cell.index()] = HIGHLIGHT_COLOR;
        }
    }
}
