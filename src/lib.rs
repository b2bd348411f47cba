//! Sweepbox - axis-separated swept collision playground
//!
//! Core modules:
//! - `sim`: Simulation (bodies, obstacles, agents, collision resolution)
//! - `renderer`: Renderer seam and CPU vertex batch backend
//! - `platform`: Input/clock/event seams and headless backends
//! - `settings`: Serde-backed configuration
//! - `app`: Frame loop wiring platform, simulation and renderer

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::{Settings, SettingsError};

/// Default configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: i32 = 1280;
    pub const PLAYFIELD_HEIGHT: i32 = 720;

    /// Player defaults (top-left start)
    pub const PLAYER_START: [i32; 2] = [640, 360];
    pub const PLAYER_SIZE: [i32; 2] = [30, 60];
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Ball defaults (centered start)
    pub const BALL_CENTER: [i32; 2] = [640, 360];
    pub const BALL_SIZE: [i32; 2] = [40, 40];
    pub const BALL_SPEED: f32 = 400.0;
    pub const BALL_DIRECTION: [f32; 2] = [1.0, 1.0];

    /// Vertical oscillators: bounds apply to the bottom edge
    pub const VERTICAL_SPEED: f32 = 450.0;
    pub const VERTICAL_MIN: i32 = 120;
    pub const VERTICAL_MAX: i32 = 600;

    /// Horizontal oscillators: min applies to the left edge, max to the right edge
    pub const HORIZONTAL_SPEED: f32 = 400.0;
    pub const HORIZONTAL_MIN: i32 = 600;
    pub const HORIZONTAL_MAX: i32 = 1000;

    /// Headless run defaults
    pub const HEADLESS_FRAMES: u64 = 600;
    pub const HEADLESS_FPS: u32 = 60;
    pub const AUTOPILOT_SEED: u64 = 0x5eed;
    pub const AUTOPILOT_HOLD_FRAMES: u32 = 30;
}
