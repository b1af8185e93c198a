//! Collision tests for the side-scroller
//!
//! Everything is an axis-aligned box except orbs, coins and collectibles,
//! which are circles tested against the player box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Shrink by `inset` on every side
    pub fn shrink(&self, inset: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(inset),
            size: (self.size - Vec2::splat(2.0 * inset)).max(Vec2::ZERO),
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Point on (or in) the box nearest to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.pos, self.pos + self.size)
    }

    /// Circle-vs-box: clamp the centre onto the box and compare squared
    /// distance against the squared radius
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = self.closest_point(center);
        center.distance_squared(closest) < radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
        // Touching edges do not count
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_shrink_is_forgiving() {
        let player = Rect::new(100.0, 310.0, 40.0, 40.0);
        let spike = Rect::new(138.0, 310.0, 30.0, 40.0);
        assert!(player.overlaps(&spike));
        assert!(!player.shrink(5.0).overlaps(&spike));
    }

    #[test]
    fn test_shrink_never_negative() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0).shrink(5.0);
        assert_eq!(r.size, Vec2::ZERO);
    }

    #[test]
    fn test_circle_overlap() {
        let player = Rect::new(100.0, 210.0, 40.0, 40.0);

        // Centre inside the box
        assert!(player.overlaps_circle(Vec2::new(120.0, 230.0), 5.0));
        // Just off the right edge, within radius
        assert!(player.overlaps_circle(Vec2::new(150.0, 230.0), 15.0));
        // Off the corner: dx = dy = 10, distance ~14.1
        assert!(player.overlaps_circle(Vec2::new(150.0, 200.0), 15.0));
        assert!(!player.overlaps_circle(Vec2::new(150.0, 200.0), 14.0));
        // Far away
        assert!(!player.overlaps_circle(Vec2::new(300.0, 230.0), 15.0));
    }
}
