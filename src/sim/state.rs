//! Match state and core simulation types
//!
//! All state that must survive a suspend/resume lives here and serializes
//! with serde, the in-state RNG included, so a resumed match replays the
//! exact random sequence it would have produced uninterrupted.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::heading_to_dir;

/// Which paddle a command or a point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleSide {
    /// Left paddle, defending the left goal line.
    Human,
    /// Right paddle, defending the right goal line.
    Agent,
}

impl PaddleSide {
    pub fn as_str(self) -> &'static str {
        match self {
            PaddleSide::Human => "human",
            PaddleSide::Agent => "agent",
        }
    }

    pub fn opponent(self) -> PaddleSide {
        match self {
            PaddleSide::Human => PaddleSide::Agent,
            PaddleSide::Agent => PaddleSide::Human,
        }
    }
}

impl fmt::Display for PaddleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected command. The match state is untouched when one of these comes
/// back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid paddle direction {0}: up and down are -1 and 1")]
    InvalidDirection(i32),
}

/// The ball: a position, a unit direction vector and a constant speed.
///
/// Direction is stored as a vector rather than an angle so a reflection is
/// one dot product instead of trigonometry per bounce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Unit length at all times; scaled by `speed` when translating.
    pub dir: Vec2,
    /// Displacement per tick. Never changes after construction.
    pub speed: f32,
}

/// A paddle: fixed x per side, mutable center y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    /// Vertical center of the paddle body.
    pub y: f32,
    /// Displacement per accepted move command.
    pub vel: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, vel: f32) -> Self {
        Self { x, y, vel }
    }

    /// Apply one move step, keeping the whole body inside the canvas. A
    /// paddle already flush against the target boundary stays put.
    fn step(&mut self, dir: f32, half_height: f32, canvas_height: f32) {
        let candidate = self.y + dir * self.vel;
        self.y = candidate.clamp(half_height, canvas_height - half_height);
    }
}

/// Score pair. Both sides only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub human: u32,
    pub agent: u32,
}

impl Score {
    pub fn of(&self, side: PaddleSide) -> u32 {
        match side {
            PaddleSide::Human => self.human,
            PaddleSide::Agent => self.agent,
        }
    }

    pub(crate) fn increment(&mut self, side: PaddleSide) {
        match side {
            PaddleSide::Human => self.human += 1,
            PaddleSide::Agent => self.agent += 1,
        }
    }
}

/// Lifecycle events emitted by a tick, for the session/archival layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { score: Score },
    GameFinished { score: Score, winner: PaddleSide },
}

/// Per-tick state snapshot, the unit the session layer serializes toward
/// both clients. A pure read: querying twice yields identical values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_pos: Vec2,
    pub ball_dir: Vec2,
    pub ball_speed: f32,
    pub human_y: f32,
    pub agent_y: f32,
    pub score: Score,
    pub game_over: bool,
}

/// Complete match state (deterministic, serializable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Match seed for reproducibility.
    pub seed: u64,
    pub config: GameConfig,
    pub ball: Ball,
    pub human: Paddle,
    pub agent: Paddle,
    pub score: Score,
    /// Latches true permanently once a side reaches the winning score.
    pub game_over: bool,
    /// Simulation tick counter, carried into every snapshot.
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a match: validate the config, center both paddles, serve.
    ///
    /// A rejected config is fatal; the match never becomes active.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mid_y = config.canvas_height as f32 / 2.0;
        let vel = config.paddle_velocity as f32;
        let mut state = Self {
            seed,
            human: Paddle::new(config.human_paddle_x(), mid_y, vel),
            agent: Paddle::new(config.agent_paddle_x(), mid_y, vel),
            ball: Ball {
                pos: Vec2::ZERO,
                dir: Vec2::X,
                speed: config.ball_speed,
            },
            score: Score::default(),
            game_over: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        state.serve();
        Ok(state)
    }

    /// (Re)initialize the ball for a new point.
    ///
    /// Vertical spawn is normal-distributed around the canvas midline so
    /// serves cluster near the center without being predictable; the
    /// heading goes toward either paddle with up to 45 degrees of tilt, so
    /// a serve is never purely horizontal. Score and game_over are
    /// untouched.
    pub(crate) fn serve(&mut self) {
        let width = self.config.canvas_width as f32;
        let height = self.config.canvas_height as f32;

        let jitter: f32 = self.rng.sample(StandardNormal);
        let y = (height / 2.0 + jitter * height / 16.0).clamp(0.0, height);
        self.ball.pos = Vec2::new(width / 2.0, y);

        let base: f32 = if self.rng.random_bool(0.5) { 0.0 } else { 180.0 };
        let heading = base + self.rng.random_range(-45.0..45.0);
        self.ball.dir = heading_to_dir(heading);
        log::debug!(
            "serve: pos=({:.1}, {:.1}) heading={:.1} deg",
            self.ball.pos.x,
            self.ball.pos.y,
            heading
        );
    }

    /// Move one paddle by one step. Up is -1, down is 1; anything else is
    /// rejected without touching the match. After game over the command is
    /// accepted but does nothing: the terminal state stays frozen.
    pub fn move_paddle(&mut self, side: PaddleSide, dir: i32) -> Result<(), GameError> {
        if dir != -1 && dir != 1 {
            return Err(GameError::InvalidDirection(dir));
        }
        if self.game_over {
            return Ok(());
        }
        let half = self.config.paddle_half_height();
        let height = self.config.canvas_height as f32;
        let paddle = match side {
            PaddleSide::Human => &mut self.human,
            PaddleSide::Agent => &mut self.agent,
        };
        paddle.step(dir as f32, half, height);
        Ok(())
    }

    pub fn paddle(&self, side: PaddleSide) -> &Paddle {
        match side {
            PaddleSide::Human => &self.human,
            PaddleSide::Agent => &self.agent,
        }
    }

    /// The winning side, once the match is finished.
    pub fn winner(&self) -> Option<PaddleSide> {
        if !self.game_over {
            return None;
        }
        if self.score.human >= self.config.winning_score {
            Some(PaddleSide::Human)
        } else {
            Some(PaddleSide::Agent)
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            ball_pos: self.ball.pos,
            ball_dir: self.ball.dir,
            ball_speed: self.ball.speed,
            human_y: self.human.y,
            agent_y: self.agent.y,
            score: self.score,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_serve_positions_ball() {
        for seed in 0..50 {
            let s = state(seed);
            assert_eq!(s.ball.pos.x, 400.0);
            assert!(s.ball.pos.y >= 0.0 && s.ball.pos.y <= 600.0);
            assert!((s.ball.dir.length() - 1.0).abs() < 1e-5);
            // within 45 degrees of horizontal: a serve always travels
            // toward one of the paddles
            assert!(s.ball.dir.x.abs() > 0.7);
        }
    }

    #[test]
    fn test_serves_go_both_ways() {
        let mut toward_agent = 0;
        for seed in 0..50 {
            if state(seed).ball.dir.x > 0.0 {
                toward_agent += 1;
            }
        }
        assert!(toward_agent > 5 && toward_agent < 45);
    }

    #[test]
    fn test_same_seed_serves_identically() {
        let a = state(1234);
        let b = state(1234);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.dir, b.ball.dir);
    }

    #[test]
    fn test_move_paddle_rejects_bad_direction() {
        let mut s = state(1);
        let before = s.human.y;
        for dir in [0, 2, -2, 7] {
            assert_eq!(
                s.move_paddle(PaddleSide::Human, dir),
                Err(GameError::InvalidDirection(dir))
            );
        }
        assert_eq!(s.human.y, before);
    }

    #[test]
    fn test_five_up_moves_from_center() {
        let mut s = state(1);
        assert_eq!(s.human.y, 300.0);
        for _ in 0..5 {
            s.move_paddle(PaddleSide::Human, -1).unwrap();
        }
        assert_eq!(s.human.y, 275.0);
    }

    #[test]
    fn test_paddle_clamps_at_half_height() {
        let mut s = state(1);
        for _ in 0..200 {
            s.move_paddle(PaddleSide::Agent, -1).unwrap();
        }
        assert_eq!(s.agent.y, 50.0);
        // flush against the top wall: further up-moves do nothing
        s.move_paddle(PaddleSide::Agent, -1).unwrap();
        assert_eq!(s.agent.y, 50.0);

        for _ in 0..500 {
            s.move_paddle(PaddleSide::Agent, 1).unwrap();
        }
        assert_eq!(s.agent.y, 550.0);
    }

    #[test]
    fn test_move_after_game_over_is_frozen() {
        let mut s = state(1);
        s.game_over = true;
        let before = s.snapshot();
        s.move_paddle(PaddleSide::Human, 1).unwrap();
        s.move_paddle(PaddleSide::Agent, -1).unwrap();
        assert_eq!(s.snapshot(), before);
        // repeated queries of a finished match are bit-identical
        assert_eq!(s.snapshot(), s.snapshot());
    }

    #[test]
    fn test_bad_config_never_becomes_active() {
        let config = GameConfig {
            winning_score: 0,
            ..Default::default()
        };
        assert!(GameState::new(config, 7).is_err());
    }

    #[test]
    fn test_state_roundtrips_through_serde() {
        let s = state(42);
        let json = serde_json::to_string(&s).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, s.seed);
        assert_eq!(back.snapshot(), s.snapshot());
    }
}
