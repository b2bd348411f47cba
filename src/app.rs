//! Frame loop: events -> dt -> input -> tick -> draw

use std::ops::ControlFlow;

use crate::platform::{Clock, FrameTimer, Platform, PlatformEvent};
use crate::renderer::{Renderer, draw_world};
use crate::sim::{SimEvent, World, tick};

/// Running totals of simulation events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppStats {
    pub frames: u64,
    pub obstacle_reflections: u64,
    pub player_blocks: u64,
    pub ball_hits: u64,
    pub ball_bounces: u64,
}

impl AppStats {
    fn record(&mut self, events: &[SimEvent]) {
        self.frames += 1;
        for event in events {
            match event {
                SimEvent::ObstacleReflected { .. } => self.obstacle_reflections += 1,
                SimEvent::PlayerBlocked { .. } => self.player_blocks += 1,
                SimEvent::BallHit { .. } => self.ball_hits += 1,
                SimEvent::BallBounced { .. } => self.ball_bounces += 1,
            }
        }
    }
}

/// Owns the world and its collaborators
pub struct App<P: Platform, C: Clock, R: Renderer> {
    pub world: World,
    pub platform: P,
    pub timer: FrameTimer<C>,
    pub renderer: R,
    stats: AppStats,
}

impl<P: Platform, C: Clock, R: Renderer> App<P, C, R> {
    pub fn new(world: World, platform: P, clock: C, renderer: R) -> Self {
        Self {
            world,
            platform,
            timer: FrameTimer::new(clock),
            renderer,
            stats: AppStats::default(),
        }
    }

    pub fn stats(&self) -> AppStats {
        self.stats
    }

    /// Run one frame. Breaks without simulating if a quit event is pending.
    pub fn frame(&mut self) -> ControlFlow<()> {
        let events = self.platform.poll_events();
        if events.contains(&PlatformEvent::Quit) {
            log::info!("Quit requested after {} frames", self.stats.frames);
            return ControlFlow::Break(());
        }

        let dt = self.timer.delta();
        let input = self.platform.keys();
        let sim_events = tick(&mut self.world, &input, dt);
        self.stats.record(&sim_events);

        draw_world(&self.world, &mut self.renderer);
        ControlFlow::Continue(())
    }

    /// Run until the platform asks to quit. Returns frames simulated.
    pub fn run(&mut self) -> u64 {
        while self.frame().is_continue() {}
        self.stats.frames
    }
}
