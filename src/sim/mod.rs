//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no sub-stepping
//! - Seeded RNG only
//! - Fixed scan order (pool index order, bricks row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_overlaps_rect, rects_overlap};
pub use powerup::{apply_powerup, spawn_powerup, variant_for_roll};
pub use state::{Ball, Brick, GamePhase, GameState, Paddle, Powerup, PowerupKind};
pub use tick::{TickInput, tick};
