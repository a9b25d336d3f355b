//! Game state and core simulation types
//!
//! The whole simulation lives in one [`GameState`] aggregate so tests can
//! run any number of independent games side by side. Balls and powerups
//! sit in fixed-capacity pools with an `active` flag per slot; allocation
//! is always the first inactive slot, and a full pool silently drops the
//! spawn.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a new game
    Title,
    /// Active gameplay (pause is a flag, not a phase)
    Playing,
    /// All lives spent
    GameOver,
    /// Every brick cleared
    Win,
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height; width changes while expanded
    pub size: Vec2,
    pub lives: u32,
    /// Horizontal travel per frame of held input
    pub speed: f32,
    /// Expand effect state
    pub expanded: bool,
    /// Seconds left on the Expand effect
    pub expand_timer: f32,
}

impl Paddle {
    fn new() -> Self {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        Self {
            pos: Vec2::new(
                FIELD_WIDTH / 2.0 - size.x / 2.0,
                FIELD_HEIGHT - PADDLE_BOTTOM_OFFSET,
            ),
            size,
            lives: PLAYER_MAX_LIVES,
            speed: PADDLE_SPEED,
            expanded: false,
            expand_timer: 0.0,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Keep the whole paddle inside the horizontal field bounds
    pub fn clamp_to_field(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, FIELD_WIDTH - self.size.x);
    }
}

/// A ball. Slot 0 is the primary ball: the only one that sticks to the
/// paddle before launch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
    /// In flight (true) or resting/unused (false)
    pub active: bool,
}

/// A brick. Geometry is fixed at init; only `active` ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

/// Powerup variants, chosen by weighted roll on brick destruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerupKind {
    #[default]
    Expand,
    ExtraLife,
    MultiBall,
}

/// A falling powerup capsule
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Powerup {
    /// Center position
    pub pos: Vec2,
    /// Displacement per frame (straight down)
    pub vel: Vec2,
    pub kind: PowerupKind,
    pub active: bool,
}

impl Powerup {
    /// The 28x28 pickup box centered on the capsule
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos - Vec2::splat(POWERUP_HALF_EXTENT),
            size: Vec2::splat(POWERUP_HALF_EXTENT * 2.0),
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG stream, advanced only by simulation draws
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub paused: bool,
    pub score: u32,
    /// True between a life loss (or round start) and the next launch;
    /// suppresses repeated life decrements while nothing is in flight
    pub waiting_for_launch: bool,
    /// Ticks simulated so far (Playing, unpaused only)
    pub frame: u64,
    pub paddle: Paddle,
    pub balls: [Ball; MAX_BALLS],
    pub bricks: [[Brick; BRICK_COLS]; BRICK_ROWS],
    pub powerups: [Powerup; MAX_POWERUPS],
}

impl GameState {
    /// Create a state on the title screen with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            paused: false,
            score: 0,
            waiting_for_launch: true,
            frame: 0,
            paddle: Paddle::new(),
            balls: [Ball::default(); MAX_BALLS],
            bricks: [[Brick::default(); BRICK_COLS]; BRICK_ROWS],
            powerups: [Powerup::default(); MAX_POWERUPS],
        };
        state.reset_round();
        state
    }

    /// Reinitialize everything for a fresh round. Runs on the
    /// Title -> Playing transition; the RNG stream is left alone so a
    /// seeded run stays reproducible across restarts.
    pub fn reset_round(&mut self) {
        self.paddle = Paddle::new();
        self.balls = [Ball::default(); MAX_BALLS];
        self.reset_balls();

        let cell_w = FIELD_WIDTH / BRICK_COLS as f32;
        for (row, line) in self.bricks.iter_mut().enumerate() {
            for (col, brick) in line.iter_mut().enumerate() {
                brick.rect = Rect::new(
                    col as f32 * cell_w + BRICK_LEFT_MARGIN,
                    row as f32 * BRICK_ROW_HEIGHT + BRICK_TOP_MARGIN,
                    cell_w - BRICK_PAD_X,
                    BRICK_ROW_HEIGHT - BRICK_PAD_Y,
                );
                brick.active = true;
            }
        }

        self.powerups = [Powerup::default(); MAX_POWERUPS];
        self.score = 0;
        self.paused = false;
        self.waiting_for_launch = true;
    }

    /// Deactivate every ball and rest the primary above the paddle,
    /// ready for the next launch
    pub fn reset_balls(&mut self) {
        for ball in &mut self.balls {
            ball.active = false;
        }
        self.balls[0] = Ball {
            pos: self.launch_position(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            active: false,
        };
    }

    /// Rest position of the primary ball: just above the paddle center
    pub fn launch_position(&self) -> Vec2 {
        Vec2::new(
            self.paddle.center_x(),
            self.paddle.pos.y - BALL_RADIUS - 2.0,
        )
    }

    /// Number of balls currently in flight
    pub fn active_ball_count(&self) -> usize {
        self.balls.iter().filter(|b| b.active).count()
    }

    /// Index of the first free ball slot, if any
    pub fn first_free_ball(&self) -> Option<usize> {
        self.balls.iter().position(|b| !b.active)
    }

    /// Index of the first free powerup slot, if any
    pub fn first_free_powerup(&self) -> Option<usize> {
        self.powerups.iter().position(|p| !p.active)
    }

    /// Number of bricks still standing
    pub fn active_brick_count(&self) -> usize {
        self.bricks
            .iter()
            .flatten()
            .filter(|b| b.active)
            .count()
    }
}
