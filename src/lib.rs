//! Brickfall - a classic brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! Rendering and input-device wiring live outside this crate: the renderer
//! consumes [`sim::Snapshot`] values and the input layer feeds
//! [`sim::TickInput`] intents into [`sim::tick`] once per frame.

pub mod sim;

pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - paddle slides along the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Gap between paddle top and the bottom of the field
    pub const PADDLE_BOTTOM_MARGIN: f32 = 30.0;
    /// Paddle movement per tick while a direction intent is held
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Maximum horizontal speed imparted by an off-center paddle hit
    pub const PADDLE_DEFLECT_SPEED: f32 = 5.0;

    /// Ball defaults (velocities are units per tick)
    pub const BALL_RADIUS: f32 = 8.0;

    /// Brick grid geometry
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 10.0;
    /// Distance from the top of the field to the first brick row
    pub const BRICK_TOP_OFFSET: f32 = 60.0;

    /// Row colors, cycled by row index (0xRRGGBB)
    pub const BRICK_PALETTE: [u32; 6] = [
        0xe74c3c, // red
        0xe67e22, // orange
        0xf1c40f, // yellow
        0x2ecc71, // green
        0x3498db, // blue
        0x9b59b6, // purple
    ];

    /// Power-up capsule size and fall speed
    pub const POWER_UP_WIDTH: f32 = 20.0;
    pub const POWER_UP_HEIGHT: f32 = 20.0;
    pub const POWER_UP_FALL_SPEED: f32 = 2.0;

    /// Horizontal speed offset applied to the two multi-ball clones
    pub const MULTI_BALL_SPREAD: f32 = 2.0;

    /// Downward acceleration applied to particle velocity each tick
    pub const PARTICLE_GRAVITY: f32 = 0.15;

    /// Lives at the start of a fresh game
    pub const STARTING_LIVES: u32 = 3;

    /// Points awarded per destroyed brick, multiplied by the current level
    pub const BRICK_SCORE: u32 = 10;
}
