//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Integer rects for geometry, fractional positions for motion
//! - Axis-separated swept collision resolution
//! - Stable update order (obstacles, player, ball)

pub mod agent;
pub mod body;
pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;

pub use agent::{Ball, BallReport, Player};
pub use body::{Body, CheckOrder, Limit, ReflectBounds};
pub use collision::{Side, overlapping, resolve_axis};
pub use obstacle::{Obstacle, ObstacleKind};
pub use rect::{Axis, Edge, Rect};
pub use state::{BodyKind, Playfield, World};
pub use tick::{SimEvent, TickInput, sanitize_dt, tick};
