//! Powerup subsystem
//!
//! Destroyed bricks sometimes drop a capsule that falls straight down.
//! Catching it with the paddle applies the effect; letting it pass the
//! bottom edge discards it. Spawning into a full pool is a silent drop.

use glam::Vec2;
use log::debug;
use rand::Rng;

use super::collision::rects_overlap;
use super::state::{Ball, GameState, Powerup, PowerupKind};
use crate::consts::*;

/// Map a uniform roll in [0, 100) to a powerup variant.
///
/// Fixed weights: 40% Expand, 30% ExtraLife, 30% MultiBall.
pub fn variant_for_roll(roll: u32) -> PowerupKind {
    if roll < 40 {
        PowerupKind::Expand
    } else if roll < 70 {
        PowerupKind::ExtraLife
    } else {
        PowerupKind::MultiBall
    }
}

/// Spawn a powerup at `pos`, rolling its variant from the state RNG.
/// Does nothing if the pool is full.
pub fn spawn_powerup(state: &mut GameState, pos: Vec2) {
    let roll = state.rng.random_range(0..100);
    let kind = variant_for_roll(roll);
    let Some(slot) = state.first_free_powerup() else {
        return;
    };
    state.powerups[slot] = Powerup {
        pos,
        vel: Vec2::new(0.0, POWERUP_FALL_SPEED),
        kind,
        active: true,
    };
}

/// Apply a collected powerup's effect
pub fn apply_powerup(state: &mut GameState, kind: PowerupKind) {
    debug!("collected powerup {kind:?}");
    match kind {
        PowerupKind::Expand => {
            // Reapplying resets the timer and width, no stacking
            state.paddle.expanded = true;
            state.paddle.expand_timer = EXPAND_DURATION;
            state.paddle.size.x = PADDLE_EXPANDED_WIDTH;
            state.paddle.clamp_to_field();
        }
        PowerupKind::ExtraLife => {
            state.paddle.lives += 1;
        }
        PowerupKind::MultiBall => split_balls(state),
    }
}

/// Clone active balls into free slots until three are in flight.
///
/// One pass in slot order; a clone placed in a later slot is itself
/// visible to the rest of the pass and can split again. Each clone
/// mirrors its source's horizontal velocity and flips its vertical
/// velocity on a coin toss.
fn split_balls(state: &mut GameState) {
    for i in 0..MAX_BALLS {
        if state.active_ball_count() >= MAX_ACTIVE_BALLS {
            break;
        }
        if !state.balls[i].active {
            continue;
        }
        let Some(slot) = state.first_free_ball() else {
            break;
        };
        let source = state.balls[i];
        let mut clone = Ball {
            vel: Vec2::new(-source.vel.x, source.vel.y),
            ..source
        };
        if state.rng.random_range(0..=1) == 1 {
            clone.vel.y = -clone.vel.y;
        }
        state.balls[slot] = clone;
    }
}

/// Per-frame powerup update: fall, paddle pickup, offscreen despawn.
/// Runs from the simulation step while Playing and unpaused.
pub fn update_powerups(state: &mut GameState) {
    for i in 0..MAX_POWERUPS {
        if !state.powerups[i].active {
            continue;
        }
        let vel = state.powerups[i].vel;
        state.powerups[i].pos += vel;

        let capsule = state.powerups[i];
        if rects_overlap(&capsule.rect(), &state.paddle.rect()) {
            state.powerups[i].active = false;
            apply_powerup(state, capsule.kind);
        } else if capsule.pos.y > FIELD_HEIGHT {
            state.powerups[i].active = false;
        }
    }
}
