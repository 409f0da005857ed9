use serde::{Deserialize, Serialize};

use crate::params::Params;

pub const GRID_CELLS: usize = Params::GRID_CELLS;

/// Paddle design preset, matching the setup screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Rectangle,
    Diamond,
    Cross,
    Circle,
}

/// 16x16 occupancy bitmap describing a paddle's pixel-art shape.
/// Indexed as (x, y) with y = row, matching the editor grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleGrid {
    cells: [[bool; GRID_CELLS]; GRID_CELLS],
}

impl Default for PaddleGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PaddleGrid {
    /// Empty grid
    pub fn new() -> Self {
        Self {
            cells: [[false; GRID_CELLS]; GRID_CELLS],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.cells[y][x] = on;
    }

    pub fn clear(&mut self) {
        self.cells = [[false; GRID_CELLS]; GRID_CELLS];
    }

    pub fn has_active(&self) -> bool {
        self.cells.iter().any(|row| row.iter().any(|&c| c))
    }

    /// Iterate active cells as (x, y)
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &on)| on)
                .map(move |(x, _)| (x, y))
        })
    }

    pub fn preset(kind: Preset) -> Self {
        let mut grid = Self::new();
        match kind {
            Preset::Rectangle => {
                for y in 4..12 {
                    for x in 6..10 {
                        grid.set(x, y, true);
                    }
                }
            }
            Preset::Diamond => {
                let center = 8i32;
                for y in 0..GRID_CELLS {
                    for x in 0..GRID_CELLS {
                        let dist = (x as i32 - center).abs() + (y as i32 - center).abs();
                        if (3..=5).contains(&dist) {
                            grid.set(x, y, true);
                        }
                    }
                }
            }
            Preset::Cross => {
                for i in 4..12 {
                    grid.set(7, i, true);
                    grid.set(8, i, true);
                    grid.set(i, 7, true);
                    grid.set(i, 8, true);
                }
            }
            Preset::Circle => {
                let (cx, cy, radius) = (8.0f32, 8.0f32, 4.0f32);
                for y in 0..GRID_CELLS {
                    for x in 0..GRID_CELLS {
                        let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                        if dist <= radius && dist >= radius - 1.5 {
                            grid.set(x, y, true);
                        }
                    }
                }
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_has_no_active_cells() {
        let grid = PaddleGrid::new();
        assert!(!grid.has_active());
        assert_eq!(grid.active_cells().count(), 0);
    }

    #[test]
    fn test_rectangle_preset() {
        let grid = PaddleGrid::preset(Preset::Rectangle);
        assert_eq!(grid.active_cells().count(), 4 * 8, "4 wide, 8 tall");
        assert!(grid.get(6, 4));
        assert!(grid.get(9, 11));
        assert!(!grid.get(5, 4));
        assert!(!grid.get(6, 12));
    }

    #[test]
    fn test_cross_preset_is_symmetric() {
        let grid = PaddleGrid::preset(Preset::Cross);
        for i in 4..12 {
            assert!(grid.get(7, i) && grid.get(8, i), "vertical bar at row {i}");
            assert!(grid.get(i, 7) && grid.get(i, 8), "horizontal bar at col {i}");
        }
        assert!(!grid.get(0, 0));
    }

    #[test]
    fn test_diamond_preset_is_a_ring() {
        let grid = PaddleGrid::preset(Preset::Diamond);
        // Center and far corners stay empty, the ring is active
        assert!(!grid.get(8, 8));
        assert!(!grid.get(0, 0));
        assert!(grid.get(8, 4)); // manhattan distance 4
        assert!(grid.get(5, 8)); // manhattan distance 3
    }

    #[test]
    fn test_set_and_clear() {
        let mut grid = PaddleGrid::new();
        grid.set(5, 5, true);
        assert!(grid.get(5, 5));
        assert!(grid.has_active());
        grid.clear();
        assert!(!grid.has_active());
    }
}
