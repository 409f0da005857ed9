use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Cell-sized box from its top-left corner
    pub fn cell(top_left: Vec2, size: f32) -> Self {
        Self {
            min: top_left,
            max: top_left + Vec2::splat(size),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_box_spans_one_cell() {
        let cell = Aabb::cell(Vec2::new(10.0, 20.0), 5.0);
        assert_eq!(cell.max, Vec2::new(15.0, 25.0));
        assert_eq!(cell.center(), Vec2::new(12.5, 22.5));
    }

    #[test]
    fn test_circle_intersection() {
        let cell = Aabb::cell(Vec2::new(0.0, 0.0), 10.0);
        assert!(cell.intersects_circle(Vec2::new(12.0, 5.0), 3.0));
        assert!(!cell.intersects_circle(Vec2::new(14.0, 5.0), 3.0));
        assert!(cell.intersects_circle(Vec2::new(5.0, 5.0), 1.0), "inside counts");
    }
}
