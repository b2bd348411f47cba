//! Per-frame simulation step
//!
//! Update order is fixed: obstacles in creation order, then the player, then
//! the ball. The ball sees the player's already-resolved position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Side;
use super::rect::Edge;
use super::state::World;

/// Held state of the four directional keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Raw (unnormalized) direction. Up beats down, right beats left.
    pub fn direction(&self) -> Vec2 {
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        let x = if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// An oscillating obstacle was clamped to one of its bounds
    ObstacleReflected { index: usize, edge: Edge },
    /// The player was stopped by an obstacle
    PlayerBlocked { side: Side },
    /// The ball hit an obstacle or the player
    BallHit { side: Side },
    /// The ball bounced off the window
    BallBounced { edge: Edge },
}

/// Clamp an elapsed time to something the integrator can use.
///
/// Zero passes through. Negative or non-finite values become zero. Large
/// values are not clamped.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame delta: {}", dt);
        0.0
    }
}

/// Advance the world by one frame of `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Vec<SimEvent> {
    let dt = sanitize_dt(dt);
    let mut events = Vec::new();

    for (index, obstacle) in world.obstacles.iter_mut().enumerate() {
        for edge in obstacle.update(dt) {
            events.push(SimEvent::ObstacleReflected { index, edge });
        }
    }

    let blocked = world.player.update(input, &world.obstacles, dt);
    events.extend(blocked.into_iter().map(|side| SimEvent::PlayerBlocked { side }));

    let report = world.ball.update(
        &world.obstacles,
        &world.player.body,
        world.playfield.bounds(),
        dt,
    );
    events.extend(report.hits.into_iter().map(|side| SimEvent::BallHit { side }));
    events.extend(report.bounces.into_iter().map(|edge| SimEvent::BallBounced { edge }));

    world.frame += 1;
    world.elapsed += f64::from(dt);

    for event in &events {
        log::debug!("frame {}: {:?}", world.frame, event);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::rect::Rect;

    const DT: f32 = 1.0 / 60.0;

    /// World with no obstacles and the player parked out of the ball's way
    fn open_world() -> World {
        let mut settings = Settings::default();
        settings.obstacles.clear();
        World::new(&settings)
    }

    #[test]
    fn test_input_priority() {
        let all = TickInput {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(all.direction(), Vec2::new(1.0, -1.0));

        let down_left = TickInput {
            down: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(down_left.direction(), Vec2::new(-1.0, 1.0));

        assert_eq!(TickInput::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(0.0), 0.0);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
        // Long stalls pass through
        assert_eq!(sanitize_dt(5.0), 5.0);
    }

    #[test]
    fn test_invalid_dt_does_not_move_anything() {
        let mut world = World::new(&Settings::default());
        let before: Vec<Rect> = world.bodies().map(|(_, b)| b.rect).collect();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut world, &input, -0.5);
        tick(&mut world, &input, f32::NAN);
        tick(&mut world, &input, 0.0);
        let after: Vec<Rect> = world.bodies().map(|(_, b)| b.rect).collect();
        assert_eq!(before, after);
        assert_eq!(world.frame, 3);
    }

    #[test]
    fn test_player_end_to_end() {
        let mut world = open_world();
        world.ball.body = crate::sim::Body::new(Rect::new(0, 0, 40, 40));
        world.ball.speed = 0.0;
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..60 {
            tick(&mut world, &input, DT);
        }
        assert!((world.player.body.rect.x - 840).abs() <= 1);
        assert_eq!(world.player.body.rect.y, 360);
    }

    #[test]
    fn test_ball_end_to_end_right_wall() {
        let mut world = open_world();
        world.player.body = crate::sim::Body::new(Rect::new(0, 0, 30, 60));
        let input = TickInput::default();

        let mut hit_right = false;
        for _ in 0..600 {
            let events = tick(&mut world, &input, DT);
            if events.contains(&SimEvent::BallBounced { edge: Edge::Right }) {
                hit_right = true;
                break;
            }
        }
        assert!(hit_right);
        assert_eq!(world.ball.body.rect.right(), 1280);
        assert!(world.ball.direction.x < 0.0);
    }

    #[test]
    fn test_obstacles_update_before_agents() {
        // After one idle tick the oscillator has moved and the player has not
        let mut world = World::new(&Settings::default());
        let index = world
            .obstacles
            .iter()
            .position(|o| !o.is_static() && o.direction.x != 0.0)
            .expect("default layout has a horizontal oscillator");
        tick(&mut world, &TickInput::default(), DT);
        let obstacle = &world.obstacles[index];
        assert_ne!(obstacle.body.old_rect, obstacle.body.rect);
        assert_eq!(world.player.body.old_rect, world.player.body.rect);
    }

    #[test]
    fn test_runaway_speed_saturates_instead_of_overflowing() {
        // A single frame carries both agents far past i32::MAX pixels
        let mut settings = Settings::default();
        settings.ball.speed = 1e12;
        settings.player.speed = 1e12;
        assert!(settings.validate().is_ok());

        let mut world = World::new(&settings);
        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut world, &input, DT);
            let rect = world.ball.body.rect;
            assert!(rect.left() >= 0 && rect.right() <= 1280);
            assert!(rect.top() >= 0 && rect.bottom() <= 720);
        }
        assert_eq!(world.player.body.rect.x, i32::MAX);
        assert_eq!(world.player.body.rect.right(), i32::MAX);
    }

    #[test]
    fn test_default_world_runs_without_leaving_window() {
        let mut world = World::new(&Settings::default());
        let inputs = [
            TickInput { up: true, ..Default::default() },
            TickInput { right: true, down: true, ..Default::default() },
            TickInput::default(),
            TickInput { left: true, ..Default::default() },
        ];
        for frame in 0..2400 {
            tick(&mut world, &inputs[(frame / 120) % inputs.len()], DT);
            let rect = world.ball.body.rect;
            assert!(rect.left() >= 0 && rect.right() <= 1280);
            assert!(rect.top() >= 0 && rect.bottom() <= 720);
        }
        assert_eq!(world.frame, 2400);
    }
}
