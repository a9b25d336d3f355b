//! Bricksmash - a breakout-style brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game phases)
//!
//! Rendering and the window/input substrate are host concerns; they only
//! ever see the `sim` types through read access to [`sim::GameState`].

pub mod sim;

pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Logical play-field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    /// Lives at the start of a round
    pub const PLAYER_MAX_LIVES: u32 = 3;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 140.0;
    pub const PADDLE_HEIGHT: f32 = 22.0;
    /// Paddle width while the Expand effect is active
    pub const PADDLE_EXPANDED_WIDTH: f32 = 210.0;
    /// Paddle travel per frame while a direction key is held
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Vertical gap between the paddle top and the bottom of the field
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;
    /// Expand effect duration in seconds
    pub const EXPAND_DURATION: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Launch speed per axis, units per frame
    pub const BALL_LAUNCH_SPEED: f32 = 7.0;
    /// Horizontal speed at the paddle edge after a paddle bounce
    pub const PADDLE_DEFLECT_SPEED: f32 = 6.0;
    /// Ball pool capacity
    pub const MAX_BALLS: usize = 5;
    /// Most balls that may be in flight at once (multi-ball cap)
    pub const MAX_ACTIVE_BALLS: usize = 3;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    /// Vertical extent of one grid row (brick plus padding)
    pub const BRICK_ROW_HEIGHT: f32 = 38.0;
    /// Gap above the first brick row
    pub const BRICK_TOP_MARGIN: f32 = 70.0;
    /// Horizontal inset of each brick within its grid cell
    pub const BRICK_LEFT_MARGIN: f32 = 7.0;
    /// Width/height trimmed off each cell to leave gaps between bricks
    pub const BRICK_PAD_X: f32 = 12.0;
    pub const BRICK_PAD_Y: f32 = 10.0;
    /// Points per destroyed brick
    pub const BRICK_SCORE: u32 = 100;

    /// Powerup defaults
    pub const MAX_POWERUPS: usize = 10;
    /// Fall speed, units per frame
    pub const POWERUP_FALL_SPEED: f32 = 2.0;
    /// Half-extent of the 28x28 pickup box
    pub const POWERUP_HALF_EXTENT: f32 = 14.0;
    /// Percent chance that a destroyed brick drops a powerup
    pub const POWERUP_DROP_CHANCE: u32 = 22;
}
