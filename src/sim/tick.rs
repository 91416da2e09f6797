//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the game by exactly one logical frame.
//! Commands (start/restart/advance/pause) are consumed first, then the
//! physics step runs in a strictly ordered single pass: motion, culling,
//! paddle, paddle collision, brick collision, power-ups, particles, win
//! check. Every collision pass reads ball state as of the end of the
//! preceding pass of the same tick, so there is no stale-snapshot ordering
//! to reason about.

use glam::Vec2;

use super::collision::{ball_overlaps_rect, paddle_deflection};
use super::level::{LEVELS, level_config};
use super::state::{GamePhase, GameState, PowerUpKind};
use crate::consts::*;

/// Input intents for a single tick (deterministic)
///
/// Held direction flags and the absolute pointer position come from the
/// input layer every frame; the command flags are edge-triggered and
/// consumed by the tick they arrive in.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left movement intent is held
    pub move_left: bool,
    /// Right movement intent is held
    pub move_right: bool,
    /// Absolute paddle center from pointer/touch, clamped to the field
    pub pointer_x: Option<f32>,
    /// Pause/resume toggle
    pub pause: bool,
    /// Start a game from the menu
    pub start: bool,
    /// Restart after gameOver/won
    pub restart: bool,
    /// Advance out of the between-levels screen
    pub advance: bool,
}

/// Advance the game state by one fixed logical tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Commands first, so the physics step below sees the resulting phase
    if input.start && state.phase == GamePhase::Menu {
        state.start_game();
    }
    if input.restart && matches!(state.phase, GamePhase::GameOver | GamePhase::Won) {
        state.start_game();
    }
    if input.advance && state.phase == GamePhase::NextLevel {
        state.advance_level();
    }
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::debug!("paused");
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::debug!("resumed");
            }
            _ => {}
        }
    }

    // The simulation only runs while playing
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    step_ball_motion(state);
    cull_lost_balls(state);
    if state.phase == GamePhase::GameOver {
        state.normalize_order();
        return;
    }
    step_paddle(state, input);
    step_paddle_collision(state);
    step_brick_collision(state);
    step_power_ups(state);
    step_particles(state);
    check_win(state);

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Advance every ball and reflect off the side and top walls.
///
/// Positions are clamped back inside the field and the velocity sign is
/// forced (not negated), so a crossing flips exactly once no matter how far
/// past the bound the ball travelled. The bottom edge is open.
fn step_ball_motion(state: &mut GameState) {
    for ball in &mut state.entities.balls {
        ball.pos += ball.vel;

        if ball.pos.x - ball.radius < 0.0 {
            ball.pos.x = ball.radius;
            ball.vel.x = ball.vel.x.abs();
        } else if ball.pos.x + ball.radius > FIELD_WIDTH {
            ball.pos.x = FIELD_WIDTH - ball.radius;
            ball.vel.x = -ball.vel.x.abs();
        }

        if ball.pos.y - ball.radius < 0.0 {
            ball.pos.y = ball.radius;
            ball.vel.y = ball.vel.y.abs();
        }
    }
}

/// Remove balls whose top edge has passed the bottom bound. Losing the last
/// ball costs a life; at zero lives the run ends, otherwise one fresh ball
/// is served at field center.
fn cull_lost_balls(state: &mut GameState) {
    state
        .entities
        .balls
        .retain(|b| b.pos.y - b.radius <= FIELD_HEIGHT);

    if state.entities.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!(
                "game over at level {} with score {}",
                state.level,
                state.score
            );
        } else {
            let speed = level_config(state.level).ball_speed;
            state.entities.spawn_ball_centered(speed, &mut state.rng);
            log::debug!("ball lost, {} lives left", state.lives);
        }
    }
}

/// Apply movement intents to the paddle, clamped to the field
fn step_paddle(state: &mut GameState, input: &TickInput) {
    if let Some(x) = input.pointer_x {
        state.paddle.set_center(x);
    }
    if input.move_left {
        state.paddle.move_by(-PADDLE_SPEED);
    }
    if input.move_right {
        state.paddle.move_by(PADDLE_SPEED);
    }
}

/// Bounce balls off the paddle. The vertical velocity is forced upward and
/// the horizontal velocity comes from the hit offset, giving the player
/// control over the deflection angle.
fn step_paddle_collision(state: &mut GameState) {
    let paddle = state.paddle.rect();
    for ball in &mut state.entities.balls {
        if ball_overlaps_rect(ball.pos, ball.radius, &paddle) {
            ball.vel.y = -ball.vel.y.abs();
            ball.vel.x = paddle_deflection(ball.pos.x, &paddle, PADDLE_DEFLECT_SPEED);
        }
    }
}

/// Destroy bricks hit by balls. Each visible brick reacts to at most one
/// ball per tick: the first overlapping ball has its vertical velocity
/// reversed, and the brick awards points, bursts into particles, drops its
/// power-up if it carries one, and goes invisible for good.
fn step_brick_collision(state: &mut GameState) {
    let points = BRICK_SCORE * state.level;
    for brick in &mut state.bricks {
        if !brick.visible {
            continue;
        }
        let rect = brick.rect();
        let Some(ball) = state
            .entities
            .balls
            .iter_mut()
            .find(|b| ball_overlaps_rect(b.pos, b.radius, &rect))
        else {
            continue;
        };

        ball.vel.y = -ball.vel.y;
        brick.visible = false;
        state.score += points;
        state.entities.spawn_particles(brick, &mut state.rng);
        if let Some(kind) = brick.power_up {
            state.entities.spawn_power_up(kind, brick.center());
        }
    }
}

/// Advance falling power-ups, apply paddle pickups, drop the rest off the
/// bottom edge.
fn step_power_ups(state: &mut GameState) {
    let paddle = state.paddle.rect();
    let mut collected: Vec<PowerUpKind> = Vec::new();

    for power_up in &mut state.entities.power_ups {
        power_up.pos.y += power_up.fall_speed;
    }
    state.entities.power_ups.retain(|p| {
        if p.rect().overlaps(&paddle) {
            collected.push(p.kind);
            return false;
        }
        p.pos.y <= FIELD_HEIGHT
    });

    for kind in collected {
        match kind {
            PowerUpKind::ExtraLife => {
                state.lives += 1;
                log::debug!("extra life collected, {} lives", state.lives);
            }
            PowerUpKind::MultiBall => {
                // Clone an existing ball's trajectory, fanned out sideways
                if let Some(template) = state.entities.balls.first().cloned() {
                    state.entities.spawn_ball(
                        template.pos,
                        Vec2::new(template.vel.x + MULTI_BALL_SPREAD, template.vel.y),
                    );
                    state.entities.spawn_ball(
                        template.pos,
                        Vec2::new(template.vel.x - MULTI_BALL_SPREAD, template.vel.y),
                    );
                    log::debug!("multi-ball: {} balls in play", state.entities.balls.len());
                }
            }
        }
    }
}

/// Advance particles under gravity and expire them
fn step_particles(state: &mut GameState) {
    for particle in &mut state.entities.particles {
        particle.pos += particle.vel;
        particle.vel.y += PARTICLE_GRAVITY;
        particle.life -= 1.0;
    }
    state.entities.particles.retain(|p| p.life > 0.0);
}

/// Once the field is clear, move on: a bonus life and the between-levels
/// screen when catalog levels remain, the victory screen otherwise.
fn check_win(state: &mut GameState) {
    if state.visible_bricks() > 0 {
        return;
    }
    if (state.level as usize) < LEVELS.len() {
        state.lives += 1;
        state.phase = GamePhase::NextLevel;
        log::info!("level {} cleared, score {}", state.level, state.score);
    } else {
        state.phase = GamePhase::Won;
        log::info!("all levels cleared, final score {}", state.score);
    }
}
