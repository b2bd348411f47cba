//! Player and ball agents
//!
//! Both move one axis at a time and resolve collisions before touching the
//! other axis, so neither can travel further than one frame's displacement
//! along an axis without being checked.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, ReflectBounds, flip};
use super::collision::{Side, resolve_axis};
use super::obstacle::Obstacle;
use super::rect::{Axis, Edge, Rect};
use super::tick::TickInput;

const AXES: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

/// Normalize a nonzero direction so diagonal speed matches axial speed
#[inline]
fn normalized(direction: Vec2) -> Vec2 {
    if direction.length_squared() != 0.0 {
        direction.normalize()
    } else {
        direction
    }
}

/// The input-driven rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub direction: Vec2,
    pub speed: f32,
}

impl Player {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self {
            body: Body::new(rect),
            direction: Vec2::ZERO,
            speed,
        }
    }

    /// Advance one frame, resolving against obstacles only.
    ///
    /// Returns the sides that were blocked.
    pub fn update(&mut self, input: &TickInput, obstacles: &[Obstacle], dt: f32) -> Vec<Side> {
        self.body.snapshot();
        self.direction = normalized(input.direction());

        let mut blocked = Vec::new();
        for axis in AXES {
            self.body.integrate(axis, self.direction, self.speed, dt);
            blocked.extend(resolve_axis(
                &mut self.body,
                obstacles.iter().map(|o| &o.body),
                axis,
            ));
        }
        blocked
    }
}

/// What happened to the ball during one update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallReport {
    /// Contacts against obstacles or the player, in resolution order
    pub hits: Vec<Side>,
    /// Window edges the ball was clamped to
    pub bounces: Vec<Edge>,
}

/// The bouncing ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub direction: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(rect: Rect, direction: Vec2, speed: f32) -> Self {
        Self {
            body: Body::new(rect),
            direction: normalized(direction),
            speed,
        }
    }

    /// Advance one frame.
    ///
    /// Per axis: integrate, resolve against obstacles and the player (the
    /// player is considered after every obstacle), then bounce off the window.
    /// The direction flips once per resolved contact.
    pub fn update(
        &mut self,
        obstacles: &[Obstacle],
        player: &Body,
        window: [ReflectBounds; 2],
        dt: f32,
    ) -> BallReport {
        self.body.snapshot();
        self.direction = normalized(self.direction);

        let mut report = BallReport::default();
        for (axis, bounds) in AXES.into_iter().zip(window) {
            self.body.integrate(axis, self.direction, self.speed, dt);

            let candidates = obstacles
                .iter()
                .map(|o| &o.body)
                .chain(std::iter::once(player));
            let hits = resolve_axis(&mut self.body, candidates, axis);
            for _ in &hits {
                flip(&mut self.direction, axis);
            }
            report.hits.extend(hits);

            report
                .bounces
                .extend(bounds.reflect(&mut self.body, &mut self.direction));
        }
        report
    }
}
