//! Axis-aligned rectangle geometry for all on-screen entities
//!
//! Every entity in the arena (player, monsters, cannonballs) occupies an
//! axis-aligned box: top-left position plus size, arena-relative, y down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Geometric center
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Overlap test with strict inequalities: rectangles that merely touch
    /// along an edge or corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.right()
            && point.y >= self.pos.y
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(r.right(), 210.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.center(), Vec2::new(110.0, 70.0));
    }

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(100.0, 0.0, 20.0, 20.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        // b starts exactly where a ends
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(20.0, 0.0, 20.0, 20.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Corner touch
        let c = Rect::new(20.0, 20.0, 20.0, 20.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(5.0, 5.0)));
        assert!(r.contains_point(Vec2::new(0.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(10.1, 5.0)));
    }
}
