//! Per-match configuration
//!
//! The session layer decides where these numbers come from (file, env,
//! hardcoded defaults); the simulation only ever sees the validated struct.

use serde::{Deserialize, Serialize};

/// Immutable numeric parameters for one match.
///
/// All coordinates are in canvas pixels with the origin at the top-left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub paddle_width: u32,
    pub paddle_height: u32,
    /// Horizontal gap between each side wall and its paddle.
    pub paddle_offset: u32,
    pub ball_size: u32,
    /// Ball displacement per tick; the direction vector stays unit length.
    pub ball_speed: f32,
    /// Paddle displacement per accepted move command.
    pub paddle_velocity: u32,
    pub winning_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            paddle_width: 10,
            paddle_height: 100,
            paddle_offset: 20,
            ball_size: 10,
            ball_speed: 7.0,
            paddle_velocity: 5,
            winning_score: 3,
        }
    }
}

/// Rejected configuration. Fatal at match construction: the match never
/// becomes active.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("ball_speed must be a positive finite number, got {0}")]
    BadBallSpeed(f32),

    #[error("paddle height {paddle} does not fit canvas height {canvas}")]
    PaddleTooTall { paddle: u32, canvas: u32 },

    #[error("paddles and offsets leave no playfield between the goal lines")]
    NoPlayfield,
}

impl GameConfig {
    /// Check every parameter the simulation depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            (self.canvas_width, "canvas_width"),
            (self.canvas_height, "canvas_height"),
            (self.paddle_width, "paddle_width"),
            (self.paddle_height, "paddle_height"),
            (self.paddle_offset, "paddle_offset"),
            (self.ball_size, "ball_size"),
            (self.paddle_velocity, "paddle_velocity"),
            (self.winning_score, "winning_score"),
        ];
        for (value, name) in positives {
            if value == 0 {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if !self.ball_speed.is_finite() || self.ball_speed <= 0.0 {
            return Err(ConfigError::BadBallSpeed(self.ball_speed));
        }
        if self.paddle_height > self.canvas_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                canvas: self.canvas_height,
            });
        }
        if 2 * (self.paddle_offset + self.paddle_width) >= self.canvas_width {
            return Err(ConfigError::NoPlayfield);
        }
        Ok(())
    }

    /// X of the human (left) paddle's wall-side face.
    pub fn human_paddle_x(&self) -> f32 {
        self.paddle_offset as f32
    }

    /// X of the agent (right) paddle's playfield-side face.
    pub fn agent_paddle_x(&self) -> f32 {
        (self.canvas_width - self.paddle_offset - self.paddle_width) as f32
    }

    /// Crossing this line with no paddle contact is a point for the agent.
    pub fn left_goal_x(&self) -> f32 {
        (self.paddle_offset + self.paddle_width) as f32
    }

    /// Crossing this line with no paddle contact is a point for the human.
    pub fn right_goal_x(&self) -> f32 {
        (self.canvas_width - (self.paddle_offset + self.paddle_width)) as f32
    }

    pub fn paddle_half_height(&self) -> f32 {
        self.paddle_height as f32 / 2.0
    }
}
