//! Kinematic bodies: fractional position plus current/previous pixel rects
//!
//! `pos` is authoritative. `rect` is its rounded view and must be resynced
//! after every position change; `pos` must be resynced after every rect clamp.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Axis, Edge, Rect};

/// Component of a vector along an axis
#[inline]
pub fn component(v: Vec2, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => v.x,
        Axis::Vertical => v.y,
    }
}

/// Negate the component of a direction along an axis
#[inline]
pub fn flip(direction: &mut Vec2, axis: Axis) {
    match axis {
        Axis::Horizontal => direction.x = -direction.x,
        Axis::Vertical => direction.y = -direction.y,
    }
}

/// Round a fractional coordinate to a pixel (ties to even)
#[inline]
pub fn to_pixel(v: f32) -> i32 {
    v.round_ties_even() as i32
}

/// A rectangle body with two-frame history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Fractional top-left position
    pub pos: Vec2,
    /// Current frame geometry
    pub rect: Rect,
    /// Geometry at the start of this frame's update
    pub old_rect: Rect,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            pos: Vec2::new(rect.x as f32, rect.y as f32),
            rect,
            old_rect: rect,
        }
    }

    /// Record the previous-frame rect. Call once per update, before any movement.
    #[inline]
    pub fn snapshot(&mut self) {
        self.old_rect = self.rect;
    }

    /// Advance along one axis and resync the rect on that axis
    pub fn integrate(&mut self, axis: Axis, direction: Vec2, speed: f32, dt: f32) {
        let delta = component(direction, axis) * speed * dt;
        match axis {
            Axis::Horizontal => self.pos.x += delta,
            Axis::Vertical => self.pos.y += delta,
        }
        self.rect.set_origin(axis, to_pixel(component(self.pos, axis)));
    }

    /// Resync the fractional position from the rect on one axis
    #[inline]
    pub fn sync_pos(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => self.pos.x = self.rect.x as f32,
            Axis::Vertical => self.pos.y = self.rect.y as f32,
        }
    }

    /// Clamp an edge to a value and resync the position
    pub fn set_edge(&mut self, edge: Edge, v: i32) {
        self.rect.set_edge(edge, v);
        self.sync_pos(edge.axis());
    }
}

/// A single limit on one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub edge: Edge,
    pub value: i32,
}

/// Which limit [`ReflectBounds::reflect`] tests first.
///
/// Only matters when a body is larger than its range and breaks both limits
/// at once: the limit checked last decides where it ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckOrder {
    #[default]
    LowFirst,
    HighFirst,
}

/// Pair of limits a body bounces between along one axis
///
/// `low` is violated when its edge drops below the value, `high` when its edge
/// exceeds it. Both limits must sit on the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectBounds {
    pub low: Limit,
    pub high: Limit,
    pub order: CheckOrder,
}

impl ReflectBounds {
    pub const fn new(low: Limit, high: Limit) -> Self {
        Self {
            low,
            high,
            order: CheckOrder::LowFirst,
        }
    }

    pub const fn with_order(mut self, order: CheckOrder) -> Self {
        self.order = order;
        self
    }

    /// Vertical oscillator range, measured at the bottom edge for both limits.
    /// The max is checked first.
    pub const fn bottom_between(min: i32, max: i32) -> Self {
        Self::new(
            Limit { edge: Edge::Bottom, value: min },
            Limit { edge: Edge::Bottom, value: max },
        )
        .with_order(CheckOrder::HighFirst)
    }

    /// Horizontal oscillator range: left edge >= min, right edge <= max.
    /// The max is checked first.
    pub const fn horizontal_between(min: i32, max: i32) -> Self {
        Self::span_x(min, max).with_order(CheckOrder::HighFirst)
    }

    /// Horizontal range: left edge stays >= min, right edge stays <= max
    pub const fn span_x(min: i32, max: i32) -> Self {
        Self::new(
            Limit { edge: Edge::Left, value: min },
            Limit { edge: Edge::Right, value: max },
        )
    }

    /// Vertical range: top edge stays >= min, bottom edge stays <= max
    pub const fn span_y(min: i32, max: i32) -> Self {
        Self::new(
            Limit { edge: Edge::Top, value: min },
            Limit { edge: Edge::Bottom, value: max },
        )
    }

    pub fn axis(&self) -> Axis {
        self.high.edge.axis()
    }

    /// Clamp the body inside the bounds, flipping `direction` on each clamp.
    ///
    /// Returns the edges that were clamped, in check order.
    pub fn reflect(&self, body: &mut Body, direction: &mut Vec2) -> Vec<Edge> {
        let mut clamped = Vec::new();
        match self.order {
            CheckOrder::LowFirst => {
                self.clamp_low(body, direction, &mut clamped);
                self.clamp_high(body, direction, &mut clamped);
            }
            CheckOrder::HighFirst => {
                self.clamp_high(body, direction, &mut clamped);
                self.clamp_low(body, direction, &mut clamped);
            }
        }
        clamped
    }

    fn clamp_low(&self, body: &mut Body, direction: &mut Vec2, clamped: &mut Vec<Edge>) {
        if body.rect.edge(self.low.edge) < self.low.value {
            body.set_edge(self.low.edge, self.low.value);
            flip(direction, self.low.edge.axis());
            clamped.push(self.low.edge);
        }
    }

    fn clamp_high(&self, body: &mut Body, direction: &mut Vec2, clamped: &mut Vec<Edge>) {
        if body.rect.edge(self.high.edge) > self.high.value {
            body.set_edge(self.high.edge, self.high.value);
            flip(direction, self.high.edge.axis());
            clamped.push(self.high.edge);
        }
    }
}
