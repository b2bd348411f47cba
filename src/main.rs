//! Sweepbox entry point
//!
//! Runs the simulation headless with autopilot input and logs a summary.
//! Usage: `sweepbox [settings.json]`

use std::path::PathBuf;
use std::time::Duration;

use sweepbox::platform::{Clock, HeadlessPlatform, InputScript, SystemClock};
use sweepbox::renderer::VertexBatch;
use sweepbox::sim::World;
use sweepbox::{App, Settings};

fn main() {
    env_logger::init();
    log::info!("Sweepbox (headless) starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    let headless = settings.headless;

    let world = World::new(&settings);
    log::info!(
        "Playfield {}x{}, {} obstacles",
        world.playfield.width,
        world.playfield.height,
        world.obstacles.len()
    );

    let script = InputScript::autopilot(headless.seed, headless.hold_frames);
    let platform = HeadlessPlatform::new(script).with_frame_limit(headless.frames);
    let renderer = VertexBatch::new();
    let mut app = App::new(world, platform, SystemClock::new(), renderer);

    // Stand-in for vsync
    let frame_time = (headless.fps > 0).then(|| Duration::from_secs_f64(1.0 / headless.fps as f64));
    while app.frame().is_continue() {
        if let Some(frame_time) = frame_time {
            std::thread::sleep(frame_time);
        }
        if app.world.frame % 60 == 0 {
            log::debug!(
                "frame {}: player {:?}, ball {:?}",
                app.world.frame,
                app.world.player.body.rect,
                app.world.ball.body.rect
            );
        }
    }

    let stats = app.stats();
    log::info!(
        "Ran {} frames ({:.2}s simulated, {:.2}s wall): {} ball hits, {} wall bounces, {} player blocks, \
         {} obstacle reflections",
        stats.frames,
        app.world.elapsed,
        app.timer.clock().now(),
        stats.ball_hits,
        stats.ball_bounces,
        stats.player_blocks,
        stats.obstacle_reflections
    );
    log::info!(
        "Final player {:?}, ball {:?} heading {:?}",
        app.world.player.body.rect,
        app.world.ball.body.rect,
        app.world.ball.direction
    );
}
