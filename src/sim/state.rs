//! Game state and core simulation types
//!
//! The whole session is ephemeral in-memory state: there is nothing to
//! persist, but every gameplay type serializes so a render sink (or a test)
//! can take a [`Snapshot`] of a frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level::{generate_field, level_config};
use super::registry::Registry;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a start command
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused (simulation gated off, renderer dims the field)
    Paused,
    /// Run ended with lives exhausted
    GameOver,
    /// Final catalog level cleared
    Won,
    /// Level cleared, waiting for an advance command
    NextLevel,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (FIELD_WIDTH - PADDLE_WIDTH) / 2.0,
                FIELD_HEIGHT - PADDLE_BOTTOM_MARGIN,
            ),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Shift the paddle horizontally, clamped to the field
    pub fn move_by(&mut self, dx: f32) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, FIELD_WIDTH - self.width);
    }

    /// Center the paddle on an absolute pointer position, clamped to the field
    pub fn set_center(&mut self, x: f32) {
        self.pos.x = (x - self.width / 2.0).clamp(0.0, FIELD_WIDTH - self.width);
    }
}

/// A ball entity
///
/// `id` and `radius` are fixed at spawn; only position and velocity mutate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

/// A brick in the level grid
///
/// Bricks are generated in bulk at level start and never move; destruction
/// flips `visible` to false exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
    /// Row color from the palette (0xRRGGBB)
    pub color: u32,
    /// Power-up dropped when this brick is destroyed, if any
    pub power_up: Option<PowerUpKind>,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    MultiBall,
    ExtraLife,
}

/// A falling power-up capsule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: PowerUpKind,
    /// Downward units per tick
    pub fall_speed: f32,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A particle for brick-destruction bursts (visual only, no gameplay effect)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Copied from the source brick at spawn
    pub color: u32,
    /// Remaining ticks; removed at zero
    pub life: f32,
    /// Initial life, kept so the renderer can fade on life/max_life
    pub max_life: f32,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for generation and spawns
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Current level, 1-based
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// Brick grid for the current level
    pub bricks: Vec<Brick>,
    /// Balls, power-ups, particles (sorted by id for determinism)
    pub entities: Registry,
}

impl GameState {
    /// Create a new session sitting at the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: 0,
            level: 1,
            time_ticks: 0,
            paddle: Paddle::default(),
            bricks: Vec::new(),
            entities: Registry::new(),
        }
    }

    /// Start (or restart) a fresh game: menu/gameOver/won -> playing
    pub fn start_game(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.paddle = Paddle::default();
        self.load_level();
        self.phase = GamePhase::Playing;
        log::info!("game started (seed {})", self.seed);
    }

    /// Advance out of the between-levels screen: nextLevel -> playing
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.load_level();
        self.phase = GamePhase::Playing;
        log::info!("advanced to level {}", self.level);
    }

    /// Regenerate bricks for the current level, reset all transient
    /// entities and their id counters, and serve one centered ball.
    pub fn load_level(&mut self) {
        let config = level_config(self.level);
        self.bricks = generate_field(config, &mut self.rng);
        self.entities.reset();
        self.entities.spawn_ball_centered(config.ball_speed, &mut self.rng);
    }

    /// Count of bricks still standing
    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.entities.balls.sort_by_key(|b| b.id);
        self.entities.power_ups.sort_by_key(|p| p.id);
        self.entities.particles.sort_by_key(|p| p.id);
    }

    /// Borrow-view of everything the render sink needs for one frame
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            paddle: &self.paddle,
            balls: &self.entities.balls,
            bricks: &self.bricks,
            power_ups: &self.entities.power_ups,
            particles: &self.entities.particles,
            score: self.score,
            lives: self.lives,
            level: self.level,
            phase: self.phase,
        }
    }
}

/// One frame's worth of drawable state
///
/// This is the full render-sink contract: no gameplay data flows back.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub paddle: &'a Paddle,
    pub balls: &'a [Ball],
    pub bricks: &'a [Brick],
    pub power_ups: &'a [PowerUp],
    pub particles: &'a [Particle],
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
}
