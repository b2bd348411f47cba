//! Simulation settings
//!
//! Defaults reproduce the stock layout. Every section uses `#[serde(default)]`
//! so a JSON file only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{what} size must be positive, got {width}x{height}")]
    InvalidSize {
        what: String,
        width: i32,
        height: i32,
    },
    #[error("{what} speed must be finite and non-negative, got {speed}")]
    InvalidSpeed { what: &'static str, speed: f32 },
    #[error("{what} bounds are inverted: min {min} > max {max}")]
    InvertedBounds {
        what: &'static str,
        min: i32,
        max: i32,
    },
    #[error("ball direction must be finite and nonzero, got {0:?}")]
    InvalidDirection([f32; 2]),
}

/// Window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for PlayfieldSettings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Player start (top-left), size and speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub start: [i32; 2],
    pub size: [i32; 2],
    pub speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            start: PLAYER_START,
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        }
    }
}

/// Ball start (center), size, speed and initial direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub center: [i32; 2],
    pub size: [i32; 2],
    pub speed: f32,
    pub direction: [f32; 2],
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            center: BALL_CENTER,
            size: BALL_SIZE,
            speed: BALL_SPEED,
            direction: BALL_DIRECTION,
        }
    }
}

/// Vertical oscillators: shared speed, range measured at the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalSettings {
    pub speed: f32,
    pub min: i32,
    pub max: i32,
}

impl Default for VerticalSettings {
    fn default() -> Self {
        Self {
            speed: VERTICAL_SPEED,
            min: VERTICAL_MIN,
            max: VERTICAL_MAX,
        }
    }
}

/// Horizontal oscillators: shared speed, min on the left edge, max on the right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalSettings {
    pub speed: f32,
    pub min: i32,
    pub max: i32,
}

impl Default for HorizontalSettings {
    fn default() -> Self {
        Self {
            speed: HORIZONTAL_SPEED,
            min: HORIZONTAL_MIN,
            max: HORIZONTAL_MAX,
        }
    }
}

/// How an obstacle moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    Static,
    Vertical,
    Horizontal,
}

/// One obstacle placement (top-left position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub pos: [i32; 2],
    pub size: [i32; 2],
    pub motion: Motion,
}

impl ObstacleSpec {
    pub const fn new(pos: [i32; 2], size: [i32; 2], motion: Motion) -> Self {
        Self { pos, size, motion }
    }
}

/// Stock obstacle layout, in creation order
pub fn default_obstacles() -> Vec<ObstacleSpec> {
    vec![
        ObstacleSpec::new([100, 300], [100, 50], Motion::Static),
        ObstacleSpec::new([800, 600], [100, 200], Motion::Static),
        ObstacleSpec::new([900, 200], [200, 10], Motion::Static),
        ObstacleSpec::new([200, 300], [200, 60], Motion::Vertical),
        ObstacleSpec::new([850, 350], [100, 100], Motion::Horizontal),
    ]
}

/// Options for the headless binary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlessSettings {
    /// Frames to run before quitting
    pub frames: u64,
    /// Target frame rate (0 = run unpaced)
    pub fps: u32,
    /// Autopilot RNG seed
    pub seed: u64,
    /// Frames the autopilot holds each key combination
    pub hold_frames: u32,
}

impl Default for HeadlessSettings {
    fn default() -> Self {
        Self {
            frames: HEADLESS_FRAMES,
            fps: HEADLESS_FPS,
            seed: AUTOPILOT_SEED,
            hold_frames: AUTOPILOT_HOLD_FRAMES,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playfield: PlayfieldSettings,
    pub player: PlayerSettings,
    pub ball: BallSettings,
    pub vertical: VerticalSettings,
    pub horizontal: HorizontalSettings,
    pub obstacles: Vec<ObstacleSpec>,
    pub headless: HeadlessSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: PlayfieldSettings::default(),
            player: PlayerSettings::default(),
            ball: BallSettings::default(),
            vertical: VerticalSettings::default(),
            horizontal: HorizontalSettings::default(),
            obstacles: default_obstacles(),
            headless: HeadlessSettings::default(),
        }
    }
}

fn check_size(what: impl Into<String>, size: [i32; 2]) -> Result<(), SettingsError> {
    if size[0] <= 0 || size[1] <= 0 {
        return Err(SettingsError::InvalidSize {
            what: what.into(),
            width: size[0],
            height: size[1],
        });
    }
    Ok(())
}

fn check_speed(what: &'static str, speed: f32) -> Result<(), SettingsError> {
    if !speed.is_finite() || speed < 0.0 {
        return Err(SettingsError::InvalidSpeed { what, speed });
    }
    Ok(())
}

fn check_oscillator(
    what: &'static str,
    speed: f32,
    min: i32,
    max: i32,
) -> Result<(), SettingsError> {
    check_speed(what, speed)?;
    if min > max {
        return Err(SettingsError::InvertedBounds { what, min, max });
    }
    Ok(())
}

impl Settings {
    /// Parse settings from JSON (missing fields take their defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject layouts the simulation can't run sensibly
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_size("playfield", [self.playfield.width, self.playfield.height])?;
        check_size("player", self.player.size)?;
        check_size("ball", self.ball.size)?;
        for (i, spec) in self.obstacles.iter().enumerate() {
            check_size(format!("obstacle {}", i), spec.size)?;
        }

        check_speed("player", self.player.speed)?;
        check_speed("ball", self.ball.speed)?;
        let v = &self.vertical;
        check_oscillator("vertical oscillator", v.speed, v.min, v.max)?;
        let h = &self.horizontal;
        check_oscillator("horizontal oscillator", h.speed, h.min, h.max)?;

        let [dx, dy] = self.ball.direction;
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return Err(SettingsError::InvalidDirection(self.ball.direction));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.obstacles.len(), 5);
        assert_eq!(settings.playfield.width, 1280);
        assert_eq!(settings.playfield.height, 720);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "ball": { "speed": 250.0 } }"#).unwrap();
        assert_eq!(settings.ball.speed, 250.0);
        assert_eq!(settings.ball.size, BALL_SIZE);
        assert_eq!(settings.player, PlayerSettings::default());
        assert_eq!(settings.obstacles, default_obstacles());
    }

    #[test]
    fn test_partial_oscillator_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "vertical": { "speed": 300.0 } }"#).unwrap();
        assert_eq!(settings.vertical.speed, 300.0);
        assert_eq!(settings.vertical.min, VERTICAL_MIN);
        assert_eq!(settings.vertical.max, VERTICAL_MAX);
        assert_eq!(settings.horizontal, HorizontalSettings::default());

        let settings = Settings::from_json(r#"{ "horizontal": { "max": 1100 } }"#).unwrap();
        assert_eq!(settings.horizontal.max, 1100);
        assert_eq!(settings.horizontal.min, HORIZONTAL_MIN);
        assert_eq!(settings.horizontal.speed, HORIZONTAL_SPEED);
    }

    #[test]
    fn test_obstacles_from_json() {
        let json = r#"{
            "obstacles": [
                { "pos": [10, 20], "size": [30, 40], "motion": "static" },
                { "pos": [50, 60], "size": [70, 80], "motion": "horizontal" }
            ]
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(
            settings.obstacles,
            vec![
                ObstacleSpec::new([10, 20], [30, 40], Motion::Static),
                ObstacleSpec::new([50, 60], [70, 80], Motion::Horizontal),
            ]
        );
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.playfield.width = 0;
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidSize { .. })));

        let mut settings = Settings::default();
        settings.ball.speed = -1.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidSpeed { what: "ball", .. })
        ));

        let mut settings = Settings::default();
        settings.vertical.min = 700;
        assert!(matches!(settings.validate(), Err(SettingsError::InvertedBounds { .. })));

        let mut settings = Settings::default();
        settings.ball.direction = [0.0, 0.0];
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidDirection(_))));

        let mut settings = Settings::default();
        settings.obstacles[2].size = [200, 0];
        let err = settings.validate().unwrap_err();
        assert_eq!(err.to_string(), "obstacle 2 size must be positive, got 200x0");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/sweepbox/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }
}
