//! Headless demo driver
//!
//! Runs an autoplay session against the simulation: the paddle tracks the
//! lowest ball via the pointer signal, levels auto-advance, and the final
//! frame snapshot is dumped as JSON. Useful for smoke-testing the sim
//! without a renderer attached.

use std::cmp::Ordering;

use brickfall::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB1C4_FA11);
    log::info!("Brickfall headless demo starting (seed {seed})");

    let mut state = GameState::new(seed);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );

    // Five simulated minutes at 60 ticks per second
    let tick_budget = 5 * 60 * 60;
    for _ in 0..tick_budget {
        let input = match state.phase {
            GamePhase::Playing => TickInput {
                pointer_x: state
                    .entities
                    .balls
                    .iter()
                    .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal))
                    .map(|ball| ball.pos.x),
                ..Default::default()
            },
            GamePhase::NextLevel => TickInput {
                advance: true,
                ..Default::default()
            },
            _ => break,
        };
        tick(&mut state, &input);
    }

    log::info!(
        "demo finished after {} ticks: phase {:?}, level {}, score {}, lives {}",
        state.time_ticks,
        state.phase,
        state.level,
        state.score,
        state.lives
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
