//! The Flappy Bird clone's simulation core.
//!
//! Plain per-frame arithmetic with no cross-cutting state, so unlike the
//! chase game it is a bare state struct advanced by a tick function.

pub mod state;
pub mod tick;

pub use state::{Bird, FlappyGame, FlappyPhase, Pipe};
pub use tick::{tick, TickInput};
