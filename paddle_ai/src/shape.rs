use glam::Vec2;

use game_core::{PaddleGrid, GRID_CELLS};

/// Geometric descriptors for a paddle's pixel-art silhouette, derived
/// from its 16x16 occupancy grid. Coordinates are grid units; callers
/// scale by the current cell size.
///
/// The per-row arrays are what make non-rectangular shapes aimable: a
/// diagonal or diamond paddle's contact surface at a given row can sit
/// far from the bounding-box center.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeProfile {
    /// Centroid of the active cells
    pub center: Vec2,
    pub top_y: usize,
    pub bottom_y: usize,
    pub leftmost_x: usize,
    pub rightmost_x: usize,
    /// Active cell count per row
    pub width_at: [u8; GRID_CELLS],
    /// Leftmost/rightmost active column per row (0/15 for empty rows of
    /// an empty grid, unused otherwise)
    pub leftmost_at: [u8; GRID_CELLS],
    pub rightmost_at: [u8; GRID_CELLS],
    /// Edge pixel sets, as (x, y)
    pub top_edge: Vec<(u8, u8)>,
    pub bottom_edge: Vec<(u8, u8)>,
    pub left_edge: Vec<(u8, u8)>,
    pub right_edge: Vec<(u8, u8)>,
    pub active: usize,
}

impl ShapeProfile {
    /// Analyze a paddle grid. An empty grid yields full-grid defaults so
    /// downstream aiming arithmetic always has usable geometry.
    pub fn analyze(grid: &PaddleGrid) -> Self {
        let mut sum = Vec2::ZERO;
        let mut active = 0usize;
        let mut width_at = [0u8; GRID_CELLS];
        let mut leftmost_at = [u8::MAX; GRID_CELLS];
        let mut rightmost_at = [0u8; GRID_CELLS];
        let (mut top_y, mut bottom_y) = (usize::MAX, 0usize);
        let (mut leftmost_x, mut rightmost_x) = (usize::MAX, 0usize);

        for (x, y) in grid.active_cells() {
            sum += Vec2::new(x as f32, y as f32);
            active += 1;
            width_at[y] += 1;
            leftmost_at[y] = leftmost_at[y].min(x as u8);
            rightmost_at[y] = rightmost_at[y].max(x as u8);
            top_y = top_y.min(y);
            bottom_y = bottom_y.max(y);
            leftmost_x = leftmost_x.min(x);
            rightmost_x = rightmost_x.max(x);
        }

        if active == 0 {
            return Self {
                center: Vec2::new(8.0, 8.0),
                top_y: 0,
                bottom_y: GRID_CELLS - 1,
                leftmost_x: 0,
                rightmost_x: GRID_CELLS - 1,
                width_at: [GRID_CELLS as u8; GRID_CELLS],
                leftmost_at: [0; GRID_CELLS],
                rightmost_at: [GRID_CELLS as u8 - 1; GRID_CELLS],
                top_edge: Vec::new(),
                bottom_edge: Vec::new(),
                left_edge: Vec::new(),
                right_edge: Vec::new(),
                active: 0,
            };
        }

        for row in leftmost_at.iter_mut() {
            if *row == u8::MAX {
                *row = 0;
            }
        }

        let edge = |pred: &dyn Fn(usize, usize) -> bool| -> Vec<(u8, u8)> {
            grid.active_cells()
                .filter(|&(x, y)| pred(x, y))
                .map(|(x, y)| (x as u8, y as u8))
                .collect()
        };

        Self {
            center: sum / active as f32,
            top_y,
            bottom_y,
            leftmost_x,
            rightmost_x,
            width_at,
            leftmost_at,
            rightmost_at,
            top_edge: edge(&|_, y| y == top_y),
            bottom_edge: edge(&|_, y| y == bottom_y),
            left_edge: edge(&|x, _| x == leftmost_x),
            right_edge: edge(&|x, _| x == rightmost_x),
            active,
        }
    }

    /// Validate a (possibly fractional) target contact row: clamp into the
    /// grid, and fall back to the centroid row when the nearest integer
    /// row has no active cells.
    pub fn contact_row(&self, row: f32) -> f32 {
        let clamped = row.clamp(0.0, (GRID_CELLS - 1) as f32);
        if self.width_at[clamped.round() as usize] == 0 {
            self.center.y
        } else {
            clamped
        }
    }

    /// Vertical anchor offset that aligns the given contact row with a
    /// field y. Subtract from the desired contact y to get a paddle
    /// anchor y.
    pub fn row_offset(&self, row: f32, scale: f32) -> f32 {
        self.contact_row(row) * scale
    }

    /// Scaled horizontal offset of the silhouette's center of mass at the
    /// given row: the midpoint of that row's active span, or the overall
    /// centroid column when the row is empty. This is the silhouette-aware
    /// answer a bounding-box center cannot give for diagonal shapes.
    pub fn offset_for_row(&self, row: f32, scale: f32) -> f32 {
        let clamped = row.clamp(0.0, (GRID_CELLS - 1) as f32);
        let r = clamped.round() as usize;
        if self.width_at[r] == 0 {
            self.center.x * scale
        } else {
            (self.leftmost_at[r] + self.rightmost_at[r]) as f32 / 2.0 * scale
        }
    }

    /// Row with the widest contact surface; ties resolve toward the
    /// centroid row. The most forgiving place to block a fast ball.
    pub fn max_width_row(&self) -> f32 {
        let mut best = 0usize;
        for row in 1..GRID_CELLS {
            let wider = self.width_at[row] > self.width_at[best];
            let as_wide = self.width_at[row] == self.width_at[best];
            let closer = (row as f32 - self.center.y).abs() < (best as f32 - self.center.y).abs();
            if wider || (as_wide && closer) {
                best = row;
            }
        }
        best as f32
    }

    pub fn height(&self, scale: f32) -> f32 {
        (self.bottom_y - self.top_y + 1) as f32 * scale
    }

    pub fn width(&self, scale: f32) -> f32 {
        (self.rightmost_x - self.leftmost_x + 1) as f32 * scale
    }
}
