//! Contact detection and reflection for the rectangular arena
//!
//! The arena has exactly four reflective surfaces: the two horizontal walls
//! and the two paddle faces. Each maps to a fixed unit normal, so resolving
//! a tick is evaluating four predicates against the pre-move ball position
//! and folding the reflection formula over whichever surfaces are in
//! contact.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::config::GameConfig;

/// A reflective surface of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Top,
    Bottom,
    /// Playfield face of the left (human) paddle.
    HumanFace,
    /// Playfield face of the right (agent) paddle.
    AgentFace,
}

impl Surface {
    /// Unit normal pointing into the playfield.
    pub fn normal(self) -> Vec2 {
        match self {
            Surface::Top => Vec2::Y,
            Surface::Bottom => Vec2::NEG_Y,
            Surface::HumanFace => Vec2::X,
            Surface::AgentFace => Vec2::NEG_X,
        }
    }
}

/// Reflect a direction vector about a surface normal.
///
/// Standard reflection: `d - 2(d . n)n`. Preserves magnitude, so a unit
/// direction stays unit.
#[inline]
pub fn reflect(dir: Vec2, normal: Vec2) -> Vec2 {
    dir - 2.0 * dir.dot(normal) * normal
}

/// Which surfaces the ball touches, evaluated on the pre-move position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub top: bool,
    pub bottom: bool,
    pub human_paddle: bool,
    pub agent_paddle: bool,
}

impl Contacts {
    pub fn detect(ball: &Ball, human: &Paddle, agent: &Paddle, config: &GameConfig) -> Self {
        let ball_size = config.ball_size as f32;
        let height = config.canvas_height as f32;
        let paddle_width = config.paddle_width as f32;
        let half = config.paddle_half_height();

        let within = |paddle: &Paddle| (ball.pos.y - paddle.y).abs() <= half;

        Self {
            top: ball.pos.y <= ball_size,
            bottom: ball.pos.y >= height - ball_size,
            human_paddle: within(human) && ball.pos.x <= human.x + paddle_width + ball_size,
            agent_paddle: within(agent) && ball.pos.x >= agent.x - ball_size,
        }
    }

    /// True when either paddle is in contact. A paddle contact voids a goal
    /// and takes precedence over wall reflections on the same tick.
    pub fn any_paddle(&self) -> bool {
        self.human_paddle || self.agent_paddle
    }

    /// Surfaces to reflect about this tick, in evaluation order. Wall
    /// contacts yield to a simultaneous paddle contact; multiple applicable
    /// contacts compose sequentially.
    pub fn surfaces(self) -> impl Iterator<Item = Surface> {
        let wall_ok = !self.any_paddle();
        [
            (self.top && wall_ok).then_some(Surface::Top),
            (self.bottom && wall_ok).then_some(Surface::Bottom),
            self.human_paddle.then_some(Surface::HumanFace),
            self.agent_paddle.then_some(Surface::AgentFace),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            dir: Vec2::X,
            speed: 7.0,
        }
    }

    fn paddles(config: &GameConfig) -> (Paddle, Paddle) {
        let vel = config.paddle_velocity as f32;
        (
            Paddle::new(config.human_paddle_x(), 300.0, vel),
            Paddle::new(config.agent_paddle_x(), 300.0, vel),
        )
    }

    #[test]
    fn test_reflect_off_vertical_surface() {
        // Ball moving right into the agent face (normal pointing left)
        let reflected = reflect(Vec2::new(1.0, 0.0), Vec2::NEG_X);
        assert!((reflected.x - (-1.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_preserves_magnitude() {
        let dir = Vec2::new(0.6, -0.8);
        for surface in [
            Surface::Top,
            Surface::Bottom,
            Surface::HumanFace,
            Surface::AgentFace,
        ] {
            let out = reflect(dir, surface.normal());
            assert!((out.length() - dir.length()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_reflect_twice_restores_direction() {
        let dir = Vec2::new(0.5, -0.866);
        let normal = Surface::Bottom.normal();
        let twice = reflect(reflect(dir, normal), normal);
        assert!((twice - dir).length() < 1e-6);
    }

    #[test]
    fn test_detect_walls() {
        let config = GameConfig::default();
        let (human, agent) = paddles(&config);

        let top = Contacts::detect(&ball_at(400.0, 10.0), &human, &agent, &config);
        assert!(top.top && !top.bottom && !top.any_paddle());

        let bottom = Contacts::detect(&ball_at(400.0, 590.0), &human, &agent, &config);
        assert!(bottom.bottom && !bottom.top);

        let open = Contacts::detect(&ball_at(400.0, 300.0), &human, &agent, &config);
        assert_eq!(open, Contacts::default());
    }

    #[test]
    fn test_detect_paddle_faces() {
        let config = GameConfig::default();
        let (human, agent) = paddles(&config);

        // Human face plane is x = 20 + 10 + 10 = 40
        assert!(
            Contacts::detect(&ball_at(40.0, 300.0), &human, &agent, &config).human_paddle
        );
        assert!(
            !Contacts::detect(&ball_at(41.0, 300.0), &human, &agent, &config).human_paddle
        );
        // Outside the vertical half-extent
        assert!(
            !Contacts::detect(&ball_at(40.0, 351.0), &human, &agent, &config).human_paddle
        );

        // Agent face plane is x = 770 - 10 = 760
        assert!(
            Contacts::detect(&ball_at(760.0, 300.0), &human, &agent, &config).agent_paddle
        );
        assert!(
            !Contacts::detect(&ball_at(759.0, 300.0), &human, &agent, &config).agent_paddle
        );
    }

    #[test]
    fn test_paddle_contact_suppresses_wall_reflection() {
        let contacts = Contacts {
            top: true,
            human_paddle: true,
            ..Default::default()
        };
        let surfaces: Vec<_> = contacts.surfaces().collect();
        assert_eq!(surfaces, vec![Surface::HumanFace]);
    }

    #[test]
    fn test_wall_contacts_compose_in_order() {
        let contacts = Contacts {
            top: true,
            bottom: true,
            ..Default::default()
        };
        let surfaces: Vec<_> = contacts.surfaces().collect();
        assert_eq!(surfaces, vec![Surface::Top, Surface::Bottom]);
    }
}
