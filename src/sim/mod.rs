//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical timestep only (velocities are units per tick, no dt)
//! - Seeded RNG only, threaded explicitly
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod registry;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_overlaps_rect, paddle_deflection};
pub use level::{LEVELS, LevelConfig, Pattern, generate_field, level_config};
pub use registry::Registry;
pub use state::{
    Ball, Brick, GamePhase, GameState, Paddle, Particle, PowerUp, PowerUpKind, Snapshot,
};
pub use tick::{TickInput, tick};
