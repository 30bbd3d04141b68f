//! Headless match driver
//!
//! Plays one match to completion with a simple ball-chasing policy on both
//! paddles (the agent reacts on a slower cadence so matches actually end).
//! Useful for smoke-testing the simulation and watching score flow in the
//! logs.
//!
//! Usage: pong-match [seed] [config.json]

use std::{env, fs, process};

use pong_core::sim::{self, GameEvent, GameState, PaddleSide};
use pong_core::GameConfig;

/// Hard cap so a perfectly matched rally cannot spin forever.
const MAX_TICKS: u64 = 200_000;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = match args.get(1) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                log::error!("seed must be an unsigned integer, got {raw:?}");
                process::exit(2);
            }
        },
        None => rand::random(),
    };
    let config = match args.get(2) {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load config from {path}: {err}");
                process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut game = match GameState::new(config, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("invalid config: {err}");
            process::exit(1);
        }
    };
    log::info!("match started with seed {seed}");

    while !game.game_over && game.time_ticks < MAX_TICKS {
        chase(&mut game, PaddleSide::Human);
        if game.time_ticks % 3 != 0 {
            chase(&mut game, PaddleSide::Agent);
        }
        for event in sim::tick(&mut game) {
            if let GameEvent::GameFinished { score, winner } = event {
                log::info!(
                    "{winner} wins {}-{}",
                    score.of(winner),
                    score.of(winner.opponent())
                );
            }
        }
    }

    let snapshot = game.snapshot();
    if !game.game_over {
        log::warn!("tick cap reached after {} ticks, calling it off", snapshot.tick);
    }
    log::info!(
        "final state after {} ticks: human {} | agent {}",
        snapshot.tick,
        snapshot.score.human,
        snapshot.score.agent
    );
}

/// Nudge a paddle one step toward the ball.
fn chase(game: &mut GameState, side: PaddleSide) {
    let delta = game.ball.pos.y - game.paddle(side).y;
    if delta.abs() < 1.0 {
        return;
    }
    let dir = if delta < 0.0 { -1 } else { 1 };
    game.move_paddle(side, dir)
        .expect("chase only issues -1 or 1");
}

fn load_config(path: &str) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
