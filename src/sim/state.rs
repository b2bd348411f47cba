//! World state: every body in the simulation
//!
//! All bodies are created once from [`Settings`] and live as long as the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::agent::{Ball, Player};
use super::body::{Body, ReflectBounds};
use super::obstacle::{Obstacle, ObstacleKind};
use super::rect::{Axis, Rect};
use crate::settings::{Motion, Settings};

/// Window the ball is confined to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    /// Reflection bounds for the horizontal and vertical axes, in that order
    pub fn bounds(&self) -> [ReflectBounds; 2] {
        [
            ReflectBounds::span_x(0, self.width),
            ReflectBounds::span_y(0, self.height),
        ]
    }
}

/// What a body is, for drawing and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Static,
    VerticalOscillator,
    HorizontalOscillator,
    Player,
    Ball,
}

impl BodyKind {
    pub fn of(obstacle: &Obstacle) -> Self {
        match obstacle.kind {
            ObstacleKind::Static => BodyKind::Static,
            ObstacleKind::Oscillating { axis: Axis::Vertical, .. } => BodyKind::VerticalOscillator,
            ObstacleKind::Oscillating { axis: Axis::Horizontal, .. } => {
                BodyKind::HorizontalOscillator
            }
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub playfield: Playfield,
    /// Obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    pub player: Player,
    pub ball: Ball,
    /// Frames simulated so far
    pub frame: u64,
    /// Simulated seconds so far
    pub elapsed: f64,
}

impl World {
    /// Build the initial layout
    pub fn new(settings: &Settings) -> Self {
        let obstacles = settings
            .obstacles
            .iter()
            .map(|spec| {
                let rect = Rect::new(spec.pos[0], spec.pos[1], spec.size[0], spec.size[1]);
                match spec.motion {
                    Motion::Static => Obstacle::new_static(rect),
                    Motion::Vertical => Obstacle::new_oscillating(
                        rect,
                        Axis::Vertical,
                        ReflectBounds::bottom_between(settings.vertical.min, settings.vertical.max),
                        settings.vertical.speed,
                    ),
                    Motion::Horizontal => Obstacle::new_oscillating(
                        rect,
                        Axis::Horizontal,
                        ReflectBounds::horizontal_between(
                            settings.horizontal.min,
                            settings.horizontal.max,
                        ),
                        settings.horizontal.speed,
                    ),
                }
            })
            .collect();

        let p = &settings.player;
        let player = Player::new(
            Rect::new(p.start[0], p.start[1], p.size[0], p.size[1]),
            p.speed,
        );

        let b = &settings.ball;
        let ball = Ball::new(
            Rect::from_center(b.center[0], b.center[1], b.size[0], b.size[1]),
            Vec2::from_array(b.direction),
            b.speed,
        );

        Self {
            playfield: Playfield {
                width: settings.playfield.width,
                height: settings.playfield.height,
            },
            obstacles,
            player,
            ball,
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Every body in update (and draw) order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyKind, &Body)> {
        self.obstacles
            .iter()
            .map(|o| (BodyKind::of(o), &o.body))
            .chain(std::iter::once((BodyKind::Player, &self.player.body)))
            .chain(std::iter::once((BodyKind::Ball, &self.ball.body)))
    }
}
