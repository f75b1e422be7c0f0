//! Grid Snake headless host
//!
//! Runs the loop thread for a few seconds with a scripted set of taps and
//! logs what happens. Set `RUST_LOG=debug` to see every tick.

use std::thread;
use std::time::Duration;

use grid_snake::audio::{AudioManager, LogBackend};
use grid_snake::consts::{DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};
use grid_snake::renderer::LogRenderer;
use grid_snake::{GameSession, InputRouter, RunLoop, Settings};

/// (delay before tap, tap x position)
const SCRIPT: [(u64, f32); 8] = [
    (700, 1500.0),
    (400, 1500.0),
    (600, 200.0),
    (500, 200.0),
    (900, 1500.0),
    (300, 200.0),
    (800, 1500.0),
    (600, 1500.0),
];

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Grid Snake starting...");

    let settings = Settings::load();
    let grid = match settings.grid(DEFAULT_DISPLAY_WIDTH, DEFAULT_DISPLAY_HEIGHT) {
        Ok(grid) => grid,
        Err(e) => {
            log::error!("Invalid display configuration: {}", e);
            std::process::exit(1);
        }
    };

    let session = GameSession::new(grid, settings.placer());
    let heading = session.heading_cell();

    let mut audio = AudioManager::new(Box::new(LogBackend));
    settings.apply_audio(&mut audio);

    let mut run_loop =
        RunLoop::from_settings(session, Box::new(LogRenderer), Box::new(audio), &settings);
    let input = InputRouter::new(heading, run_loop.handle());

    run_loop.start();
    for (delay_ms, x) in SCRIPT {
        thread::sleep(Duration::from_millis(delay_ms));
        let heading = input.on_tap(x, DEFAULT_DISPLAY_WIDTH);
        log::info!("Tap at x={} -> heading {:?} ({:?})", x, heading, run_loop.state());
    }

    // Simulate the window being hidden and shown again
    run_loop.on_visibility_changed(false);
    run_loop.on_visibility_changed(true);
    thread::sleep(Duration::from_millis(500));
    run_loop.stop();

    if let Some(session) = run_loop.session() {
        log::info!(
            "Done: {} ticks, score {}, high score {}",
            session.tick_count,
            session.score(),
            session.high_score()
        );
    }
}
