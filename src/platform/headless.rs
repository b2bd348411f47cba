//! Headless platform: scripted or random key presses, quit after N frames

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Platform, PlatformEvent};
use crate::sim::TickInput;

/// Where the headless platform gets its key state from
#[derive(Debug, Clone)]
pub enum InputScript {
    /// No keys held
    Idle,
    /// The same keys held every frame
    Hold(TickInput),
    /// Hold each input for the given number of frames, then go idle
    Scripted(Vec<(u32, TickInput)>),
    /// Seeded random key combinations, each held for `hold_frames`
    Autopilot {
        rng: Pcg32,
        hold_frames: u32,
        current: TickInput,
        remaining: u32,
    },
}

impl InputScript {
    pub fn autopilot(seed: u64, hold_frames: u32) -> Self {
        InputScript::Autopilot {
            rng: Pcg32::seed_from_u64(seed),
            hold_frames: hold_frames.max(1),
            current: TickInput::default(),
            remaining: 0,
        }
    }

    /// Key state for the next frame
    fn next(&mut self) -> TickInput {
        match self {
            InputScript::Idle => TickInput::default(),
            InputScript::Hold(input) => *input,
            InputScript::Scripted(steps) => {
                while steps.first().is_some_and(|(frames, _)| *frames == 0) {
                    steps.remove(0);
                }
                match steps.first_mut() {
                    Some((frames, input)) => {
                        *frames -= 1;
                        *input
                    }
                    None => TickInput::default(),
                }
            }
            InputScript::Autopilot {
                rng,
                hold_frames,
                current,
                remaining,
            } => {
                if *remaining == 0 {
                    *current = TickInput {
                        up: rng.random(),
                        down: rng.random(),
                        left: rng.random(),
                        right: rng.random(),
                    };
                    *remaining = *hold_frames;
                    log::trace!("autopilot keys: {:?}", current);
                }
                *remaining -= 1;
                *current
            }
        }
    }
}

/// Platform without a window
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    script: InputScript,
    frames_read: u64,
    max_frames: Option<u64>,
    quit_requested: bool,
}

impl HeadlessPlatform {
    pub fn new(script: InputScript) -> Self {
        Self {
            script,
            frames_read: 0,
            max_frames: None,
            quit_requested: false,
        }
    }

    /// Emit a quit event once this many frames have read input
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Queue a quit event for the next poll
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
}

impl Platform for HeadlessPlatform {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        let limit_hit = self.max_frames.is_some_and(|max| self.frames_read >= max);
        if self.quit_requested || limit_hit {
            vec![PlatformEvent::Quit]
        } else {
            Vec::new()
        }
    }

    fn keys(&mut self) -> TickInput {
        self.frames_read += 1;
        self.script.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT: TickInput = TickInput {
        up: false,
        down: false,
        left: false,
        right: true,
    };

    #[test]
    fn test_scripted_then_idle() {
        let mut platform = HeadlessPlatform::new(InputScript::Scripted(vec![
            (2, RIGHT),
            (0, TickInput::default()),
            (1, TickInput { up: true, ..Default::default() }),
        ]));
        assert_eq!(platform.keys(), RIGHT);
        assert_eq!(platform.keys(), RIGHT);
        assert!(platform.keys().up);
        assert_eq!(platform.keys(), TickInput::default());
        assert_eq!(platform.frames_read(), 4);
    }

    #[test]
    fn test_frame_limit_emits_quit() {
        let mut platform = HeadlessPlatform::new(InputScript::Hold(RIGHT)).with_frame_limit(2);
        assert!(platform.poll_events().is_empty());
        platform.keys();
        assert!(platform.poll_events().is_empty());
        platform.keys();
        assert_eq!(platform.poll_events(), vec![PlatformEvent::Quit]);
    }

    #[test]
    fn test_request_quit() {
        let mut platform = HeadlessPlatform::new(InputScript::Idle);
        platform.request_quit();
        assert_eq!(platform.poll_events(), vec![PlatformEvent::Quit]);
    }

    #[test]
    fn test_autopilot_is_reproducible() {
        let mut a = InputScript::autopilot(42, 3);
        let mut b = InputScript::autopilot(42, 3);
        let seq_a: Vec<TickInput> = (0..30).map(|_| a.next()).collect();
        let seq_b: Vec<TickInput> = (0..30).map(|_| b.next()).collect();
        assert_eq!(seq_a, seq_b);

        // Each combination is held for `hold_frames`
        for chunk in seq_a.chunks(3) {
            assert!(chunk.iter().all(|k| *k == chunk[0]));
        }
    }

    #[test]
    fn test_autopilot_zero_hold_still_advances() {
        let mut script = InputScript::autopilot(7, 0);
        for _ in 0..10 {
            script.next();
        }
    }
}
