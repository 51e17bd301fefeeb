//! Axis-aligned bounding rectangles for collision checks
//!
//! Every entity collides as a rectangle centered on its position. Hitboxes
//! include the sprite glow halo, so overlap tests match what the player sees.

use glam::Vec2;

/// An axis-aligned rectangle stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    /// Build from a center point and full width/height
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Overlap test. Touching edges count as an overlap.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x <= reach.x && d.y <= reach.y
    }

    /// Point containment test
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half.x && d.y <= self.half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_separation() {
        let a = Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let b = Aabb::from_center_size(Vec2::new(15.0, 0.0), Vec2::new(20.0, 20.0));
        let c = Aabb::from_center_size(Vec2::new(40.0, 0.0), Vec2::new(20.0, 20.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        // Overlapping in x, separated in y
        let a = Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::new(30.0, 10.0));
        let b = Aabb::from_center_size(Vec2::new(5.0, 50.0), Vec2::new(30.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains() {
        let a = Aabb::from_center_size(Vec2::new(100.0, 100.0), Vec2::new(40.0, 20.0));
        assert!(a.contains(Vec2::new(100.0, 100.0)));
        assert!(a.contains(Vec2::new(119.0, 109.0)));
        assert!(!a.contains(Vec2::new(121.0, 100.0)));
        assert!(!a.contains(Vec2::new(100.0, 111.0)));
    }

    #[test]
    fn test_min_max_corners() {
        let a = Aabb::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(a.min(), Vec2::new(8.0, 17.0));
        assert_eq!(a.max(), Vec2::new(12.0, 23.0));
    }
}
