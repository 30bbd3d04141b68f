//! Fixed timestep simulation tick
//!
//! One tick: evaluate contacts on the current ball position, fold the
//! applicable reflections, settle scoring, then translate the ball. The
//! caller supplies the fixed cadence; a tick itself is synchronous and
//! never blocks, so clients can never observe a mid-tick state.

use super::collision::{Contacts, reflect};
use super::state::{GameEvent, GameState, PaddleSide};

/// Advance the match by one fixed timestep.
///
/// Returns the lifecycle events produced this tick, for the session layer
/// to forward. A finished match ignores further ticks and returns none.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.game_over {
        return events;
    }
    state.time_ticks += 1;
    let tick_no = state.time_ticks;

    let contacts = Contacts::detect(&state.ball, &state.human, &state.agent, &state.config);
    let dir = contacts.surfaces().fold(state.ball.dir, |dir, surface| {
        log::trace!("tick {tick_no}: reflecting off {surface:?}");
        reflect(dir, surface.normal())
    });
    state.ball.dir = dir;

    // A goal only counts if the ball got past both paddle faces.
    if !contacts.any_paddle() {
        if state.ball.pos.x >= state.config.right_goal_x() {
            settle_point(state, PaddleSide::Human, &mut events);
        } else if state.ball.pos.x <= state.config.left_goal_x() {
            settle_point(state, PaddleSide::Agent, &mut events);
        }
    }

    // Unconditional translation, with the direction as reflected above or
    // as re-served by a scoring event.
    state.ball.pos += state.ball.speed * state.ball.dir;

    events
}

/// Credit one point, latch game over at the winning score, re-serve.
fn settle_point(state: &mut GameState, side: PaddleSide, events: &mut Vec<GameEvent>) {
    state.score.increment(side);
    let score = state.score;
    log::info!("score update: human {} | agent {}", score.human, score.agent);
    events.push(GameEvent::ScoreChanged { score });

    if score.of(side) >= state.config.winning_score {
        state.game_over = true;
        log::info!(
            "game over: {side} wins {}-{}",
            score.of(side),
            score.of(side.opponent())
        );
        events.push(GameEvent::GameFinished {
            score,
            winner: side,
        });
    }

    // Re-serve even on the match point, so the final snapshot still holds
    // a valid playfield.
    state.serve();
}
