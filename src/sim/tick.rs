//! Per-frame simulation tick
//!
//! One call per frame from the host loop. The phase machine gates which
//! logic runs; only an unpaused Playing phase advances the simulation.
//! Step order inside a frame is fixed and load-bearing: paddle, expansion
//! decay, launch, ball physics, life loss, powerups, win check.

use glam::Vec2;
use log::{debug, info};
use rand::Rng;

use super::collision::circle_overlaps_rect;
use super::powerup::{spawn_powerup, update_powerups};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single frame.
///
/// `move_left`/`move_right` are level-triggered (key held); the rest are
/// edge-triggered (key just pressed). The core never sees key codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Launch the resting ball
    pub launch: bool,
    /// Start from the title screen / leave an end screen
    pub confirm: bool,
    /// Toggle pause while playing
    pub pause: bool,
    /// Demo mode: ignore the other fields and let the game play itself
    pub autoplay: bool,
}

/// Advance the game by one frame.
///
/// `dt` is the elapsed wall time for this frame in seconds; it feeds only
/// the paddle expansion timer. Everything else moves in per-frame units.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let input = if input.autoplay {
        autopilot(state)
    } else {
        *input
    };

    match state.phase {
        GamePhase::Title => {
            if input.confirm {
                state.reset_round();
                state.phase = GamePhase::Playing;
                info!("new game (seed {})", state.seed);
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.paused = !state.paused;
            }
            if state.paused {
                return;
            }
            state.frame += 1;
            step(state, &input, dt);
        }
        GamePhase::GameOver | GamePhase::Win => {
            // No reset here; the next Title -> Playing transition does it
            if input.confirm {
                state.phase = GamePhase::Title;
            }
        }
    }
}

/// One unpaused gameplay step
fn step(state: &mut GameState, input: &TickInput, dt: f32) {
    // 1. Paddle control
    if input.move_left {
        state.paddle.pos.x -= state.paddle.speed;
    }
    if input.move_right {
        state.paddle.pos.x += state.paddle.speed;
    }
    state.paddle.clamp_to_field();

    // 2. Expansion decay
    if state.paddle.expanded {
        state.paddle.expand_timer -= dt;
        if state.paddle.expand_timer <= 0.0 {
            state.paddle.expanded = false;
            state.paddle.expand_timer = 0.0;
            state.paddle.size.x = PADDLE_WIDTH;
            state.paddle.clamp_to_field();
        }
    }

    // 3. Pre-launch: the primary ball rides the paddle until launched
    if !state.balls[0].active {
        state.balls[0].pos = state.launch_position();
        if input.launch {
            let dir = if state.rng.random_range(0..=1) == 0 {
                -1.0
            } else {
                1.0
            };
            state.balls[0].vel = Vec2::new(BALL_LAUNCH_SPEED * dir, -BALL_LAUNCH_SPEED);
            state.balls[0].active = true;
            state.waiting_for_launch = false;
        }
    }

    // 4. Ball physics, each active ball independently
    for i in 0..MAX_BALLS {
        if state.balls[i].active {
            step_ball(state, i);
        }
    }

    // 5. Life loss once every ball in flight has been lost
    if state.active_ball_count() == 0 && !state.waiting_for_launch {
        state.paddle.lives = state.paddle.lives.saturating_sub(1);
        if state.paddle.lives == 0 {
            state.phase = GamePhase::GameOver;
            info!("game over with score {}", state.score);
        } else {
            debug!("life lost, {} left", state.paddle.lives);
            state.reset_balls();
            state.waiting_for_launch = true;
        }
    }

    // 6. Powerup fall / pickup / despawn
    update_powerups(state);

    // 7. Win once the grid is empty
    if state.active_brick_count() == 0 {
        state.phase = GamePhase::Win;
        info!("all bricks cleared, score {}", state.score);
    }
}

/// Move one ball and resolve its collisions for this frame
fn step_ball(state: &mut GameState, i: usize) {
    let radius = state.balls[i].radius;

    // a. Integrate
    let vel = state.balls[i].vel;
    state.balls[i].pos += vel;

    // b. Wall reflection. Force the sign away from the wall rather than
    // negating, so a ball already past the boundary cannot oscillate.
    let ball = &mut state.balls[i];
    if ball.pos.x - radius <= 0.0 {
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x + radius >= FIELD_WIDTH {
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.pos.y - radius <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
    }

    // c. Paddle bounce: vertical reflection, horizontal speed rebuilt
    // from the hit offset (center = straight up, edge = steep angle)
    let paddle_rect = state.paddle.rect();
    let paddle_center = state.paddle.center_x();
    let half_width = state.paddle.size.x / 2.0;
    let ball = &mut state.balls[i];
    if ball.vel.y > 0.0 && circle_overlaps_rect(ball.pos, radius, &paddle_rect) {
        ball.vel.y = -ball.vel.y;
        let offset = (ball.pos.x - paddle_center) / half_width;
        ball.vel.x = PADDLE_DEFLECT_SPEED * offset;
    }

    // d. Lost past the bottom edge
    if state.balls[i].pos.y - radius > FIELD_HEIGHT {
        state.balls[i].active = false;
        return;
    }

    // e. Bricks, row-major scan, at most one hit per ball per frame
    let pos = state.balls[i].pos;
    let mut hit: Option<(usize, usize)> = None;
    'scan: for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let brick = &state.bricks[row][col];
            if brick.active && circle_overlaps_rect(pos, radius, &brick.rect) {
                hit = Some((row, col));
                break 'scan;
            }
        }
    }
    if let Some((row, col)) = hit {
        let brick_center = state.bricks[row][col].rect.center();
        state.bricks[row][col].active = false;
        state.balls[i].vel.y = -state.balls[i].vel.y;
        state.score += BRICK_SCORE;
        if state.rng.random_range(1..=100) <= POWERUP_DROP_CHANCE {
            spawn_powerup(state, brick_center);
        }
    }
}

/// Synthesize demo-mode input: start the game, launch when waiting, and
/// keep the paddle under the lowest ball in flight.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        GamePhase::Title => input.confirm = true,
        GamePhase::Playing => {
            if !state.balls[0].active {
                input.launch = true;
            }
            let target = state
                .balls
                .iter()
                .filter(|b| b.active)
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|b| b.pos.x)
                .unwrap_or(FIELD_WIDTH / 2.0);
            let center = state.paddle.center_x();
            if target < center - PADDLE_SPEED {
                input.move_left = true;
            } else if target > center + PADDLE_SPEED {
                input.move_right = true;
            }
        }
        GamePhase::GameOver | GamePhase::Win => {}
    }
    input
}
