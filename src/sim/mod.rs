//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the match state
//! - No I/O beyond `log` macros
//!
//! One match = one [`GameState`], driven by an external fixed-rate
//! scheduler. Concurrent matches are independent values with no shared
//! mutable state.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Contacts, Surface, reflect};
pub use state::{Ball, GameError, GameEvent, GameState, Paddle, PaddleSide, Score, Snapshot};
pub use tick::tick;
