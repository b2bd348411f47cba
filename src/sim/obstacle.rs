//! Obstacles: static blocks and oscillators
//!
//! Every obstacle carries the same body/direction/speed payload; the kind tag
//! decides how (and whether) it moves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, ReflectBounds};
use super::rect::{Axis, Edge, Rect};

/// Obstacle behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Never moves
    Static,
    /// Moves back and forth along one axis between two limits
    Oscillating { axis: Axis, bounds: ReflectBounds },
}

/// A rectangular obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
    pub direction: Vec2,
    pub speed: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new_static(rect: Rect) -> Self {
        Self {
            body: Body::new(rect),
            direction: Vec2::ZERO,
            speed: 0.0,
            kind: ObstacleKind::Static,
        }
    }

    /// Oscillator starting in the positive direction of its axis
    pub fn new_oscillating(rect: Rect, axis: Axis, bounds: ReflectBounds, speed: f32) -> Self {
        let direction = match axis {
            Axis::Horizontal => Vec2::X,
            Axis::Vertical => Vec2::Y,
        };
        Self {
            body: Body::new(rect),
            direction,
            speed,
            kind: ObstacleKind::Oscillating { axis, bounds },
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind, ObstacleKind::Static)
    }

    /// Advance one frame. Returns the edges clamped against the oscillation bounds.
    pub fn update(&mut self, dt: f32) -> Vec<Edge> {
        self.body.snapshot();
        match self.kind {
            ObstacleKind::Static => Vec::new(),
            ObstacleKind::Oscillating { axis, bounds } => {
                self.body.integrate(axis, self.direction, self.speed, dt);
                bounds.reflect(&mut self.body, &mut self.direction)
            }
        }
    }
}
