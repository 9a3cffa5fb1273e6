//! Axis-aligned rectangle geometry for every entity
//!
//! Screen space, integer pixels:
//! - origin at the top-left of the window
//! - x grows to the right, y grows downward

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` with its top-left corner at `pos`
    pub fn square(pos: IVec2, size: i32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Rectangle of the same size whose center sits at `center`
    pub fn centered_at(&self, center: IVec2) -> Self {
        Self::new(center.x - self.w / 2, center.y - self.h / 2, self.w, self.h)
    }

    /// Strict overlap test.
    ///
    /// Rectangles that only share an edge do not intersect, and a rectangle
    /// with no area never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Shift vertically by `dy` pixels (positive is down)
    #[inline]
    pub fn translate_y(&mut self, dy: i32) {
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(25, 25, 25, 25);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0, 0, 50, 50);
        let right = Rect::new(50, 0, 10, 10);
        let below = Rect::new(0, 50, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contained() {
        let outer = Rect::new(-10, -10, 100, 100);
        let inner = Rect::new(10, 10, 2, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_empty_rect_never_collides() {
        let a = Rect::new(0, 0, 50, 50);
        let empty = Rect::new(10, 10, 0, 10);
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_centered_at() {
        let sprite = Rect::new(0, 0, 100, 100);
        let placed = sprite.centered_at(IVec2::new(400, 500));
        assert_eq!(placed.top_left(), IVec2::new(350, 450));
    }
}
