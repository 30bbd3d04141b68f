//! Pong simulation core - authoritative physics for a two-player match
//!
//! Core modules:
//! - `config`: immutable per-match numeric parameters
//! - `sim`: deterministic simulation (entities, collisions, scoring)
//!
//! Everything network-facing (session handshake, input transport, snapshot
//! broadcast, archival of finished matches) lives in the surrounding server,
//! not here. The server owns one [`sim::GameState`] per match and drives it
//! with paddle commands and fixed-rate ticks; each tick returns the
//! lifecycle events the session layer forwards to its collaborators.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GameError, GameEvent, GameState, PaddleSide, Score, Snapshot};

use glam::Vec2;

/// Convert a heading in degrees into a unit direction vector.
///
/// Canvas coordinates have the origin top-left, so 0 degrees points at the
/// right wall and positive headings tilt downward.
#[inline]
pub fn heading_to_dir(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
