//! Entity registry for transient entities
//!
//! Owns the ball, power-up and particle collections and hands out their ids.
//! One monotonically increasing counter per entity kind, starting at 1; ids
//! are never reused until [`Registry::reset`] at game or level restart.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Ball, Brick, Particle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Owned collections of every transient entity in play
#[derive(Debug, Clone)]
pub struct Registry {
    pub balls: Vec<Ball>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    next_ball_id: u32,
    next_power_up_id: u32,
    next_particle_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            balls: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            next_ball_id: 1,
            next_power_up_id: 1,
            next_particle_id: 1,
        }
    }

    /// Drop every entity and restart all id counters at 1
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn next_ball_id(&mut self) -> u32 {
        let id = self.next_ball_id;
        self.next_ball_id += 1;
        id
    }

    /// Spawn a ball with an explicit position and velocity
    pub fn spawn_ball(&mut self, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_ball_id();
        self.balls.push(Ball {
            id,
            pos,
            vel,
            radius: BALL_RADIUS,
        });
        id
    }

    /// Spawn the serve ball at field center, moving up at the level speed
    /// with a seeded horizontal direction.
    pub fn spawn_ball_centered(&mut self, speed: f32, rng: &mut Pcg32) -> u32 {
        let dx = if rng.random_bool(0.5) { speed } else { -speed };
        self.spawn_ball(
            Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            Vec2::new(dx, -speed),
        )
    }

    /// Spawn a falling power-up centered on a destroyed brick
    pub fn spawn_power_up(&mut self, kind: PowerUpKind, brick_center: Vec2) -> u32 {
        let id = self.next_power_up_id;
        self.next_power_up_id += 1;
        self.power_ups.push(PowerUp {
            id,
            pos: brick_center - Vec2::new(POWER_UP_WIDTH / 2.0, POWER_UP_HEIGHT / 2.0),
            width: POWER_UP_WIDTH,
            height: POWER_UP_HEIGHT,
            kind,
            fall_speed: POWER_UP_FALL_SPEED,
        });
        id
    }

    /// Spawn a burst of 8-12 particles at a destroyed brick, inheriting
    /// the brick's color.
    pub fn spawn_particles(&mut self, origin: &Brick, rng: &mut Pcg32) {
        let count = rng.random_range(8..=12);
        let center = origin.center();
        for _ in 0..count {
            let id = self.next_particle_id;
            self.next_particle_id += 1;
            let life = rng.random_range(20.0..=40.0_f32).floor();
            self.particles.push(Particle {
                id,
                pos: center,
                vel: Vec2::new(
                    rng.random_range(-2.0..=2.0),
                    rng.random_range(-3.0..=1.0),
                ),
                size: rng.random_range(2.0..=5.0),
                color: origin.color,
                life,
                max_life: life,
            });
        }
    }
}
