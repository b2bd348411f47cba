//! Platform abstraction layer
//!
//! The simulation only needs four things from the outside world:
//! - Held state of the directional keys
//! - Pending window events (quit)
//! - A monotonic clock
//! - Somewhere to draw (see [`crate::renderer`])
//!
//! Headless backends live in [`headless`]; a windowed backend implements the
//! same traits.

pub mod clock;
pub mod headless;

pub use clock::{Clock, FrameTimer, ManualClock, SystemClock};
pub use headless::{HeadlessPlatform, InputScript};

use crate::sim::TickInput;

/// Events delivered by the platform between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// The user (or host) asked the process to stop
    Quit,
}

/// Input and event source
pub trait Platform {
    /// Drain events queued since the last call
    fn poll_events(&mut self) -> Vec<PlatformEvent>;

    /// Keys currently held
    fn keys(&mut self) -> TickInput;
}
