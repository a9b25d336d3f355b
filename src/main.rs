//! Bricksmash entry point
//!
//! Headless demo host: seeds a game from the wall clock, lets the
//! autopilot play one round through to its end screen, then dumps the
//! final state snapshot as JSON. A windowed host would drive the same
//! `tick` loop from its frame callback.

use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use bricksmash::{GamePhase, GameState, TickInput, tick};

/// Host frame time at 60 fps; only the expansion timer consumes it
const FRAME_DT: f32 = 1.0 / 60.0;
/// Bail out if the demo somehow never reaches an end screen
const MAX_FRAMES: u64 = 1_000_000;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut state = GameState::new(seed);
    info!("starting demo run with seed {seed}");

    let demo = TickInput {
        autoplay: true,
        ..Default::default()
    };
    let mut frames = 0u64;
    while frames < MAX_FRAMES {
        tick(&mut state, &demo, FRAME_DT);
        frames += 1;
        if matches!(state.phase, GamePhase::GameOver | GamePhase::Win) {
            break;
        }
    }

    info!(
        "finished after {frames} frames: {:?}, score {}, lives {}",
        state.phase, state.score, state.paddle.lives
    );
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
}
