//! Integer axis-aligned rectangles
//!
//! Collision geometry and rendering both work on whole pixels. Fractional
//! positions live on [`super::Body`]; a `Rect` is always the rounded view.
//!
//! Edge arithmetic saturates: a runaway position pins at `i32::MAX` instead
//! of overflowing.

use serde::{Deserialize, Serialize};

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One side of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Axis this edge moves along
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }
}

/// Axis-aligned rectangle in whole pixels
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

    /// Rect of the given size centered on a point (integer division, like a blit)
    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx.saturating_sub(w / 2), cy.saturating_sub(h / 2), w, h)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    #[inline]
    pub fn set_left(&mut self, v: i32) {
        self.x = v;
    }

    #[inline]
    pub fn set_right(&mut self, v: i32) {
        self.x = v.saturating_sub(self.w);
    }

    #[inline]
    pub fn set_top(&mut self, v: i32) {
        self.y = v;
    }

    #[inline]
    pub fn set_bottom(&mut self, v: i32) {
        self.y = v.saturating_sub(self.h);
    }

    pub fn edge(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Left => self.left(),
            Edge::Right => self.right(),
            Edge::Top => self.top(),
            Edge::Bottom => self.bottom(),
        }
    }

    /// Move the rect so `edge` sits at `v`, keeping its size
    pub fn set_edge(&mut self, edge: Edge, v: i32) {
        match edge {
            Edge::Left => self.set_left(v),
            Edge::Right => self.set_right(v),
            Edge::Top => self.set_top(v),
            Edge::Bottom => self.set_bottom(v),
        }
    }

    /// Top-left coordinate along an axis
    pub fn origin(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set_origin(&mut self, axis: Axis, v: i32) {
        match axis {
            Axis::Horizontal => self.x = v,
            Axis::Vertical => self.y = v,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test: touching edges do not count, empty rects never intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn test_set_edge_keeps_size() {
        let mut r = Rect::new(10, 20, 30, 40);
        r.set_edge(Edge::Right, 100);
        assert_eq!(r, Rect::new(70, 20, 30, 40));
        r.set_edge(Edge::Bottom, 100);
        assert_eq!(r, Rect::new(70, 60, 30, 40));
    }

    #[test]
    fn test_from_center() {
        // Ball default: 40x40 centered on (640, 360)
        let r = Rect::from_center(640, 360, 40, 40);
        assert_eq!(r, Rect::new(620, 340, 40, 40));
    }

    #[test]
    fn test_intersects_is_strict() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        // Touching on the right edge
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        // Touching on the bottom edge
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        // Empty rect inside
        assert!(!a.intersects(&Rect::new(2, 2, 0, 5)));
    }

    #[test]
    fn test_edges_saturate() {
        let r = Rect::new(i32::MAX, i32::MAX, 40, 40);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);
        assert!(!r.intersects(&Rect::new(0, 0, 1280, 720)));

        let mut r = Rect::new(0, 0, 40, 40);
        r.set_right(i32::MIN);
        assert_eq!(r.x, i32::MIN);
        r.set_bottom(i32::MIN + 10);
        assert_eq!(r.y, i32::MIN);
    }

    #[test]
    fn test_edge_axis() {
        assert_eq!(Edge::Left.axis(), Axis::Horizontal);
        assert_eq!(Edge::Bottom.axis(), Axis::Vertical);
    }
}
