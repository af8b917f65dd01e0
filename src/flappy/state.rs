//! Flappy game state and core simulation types.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::flappy::*;

/// Current phase of a flappy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyPhase {
    /// Active gameplay.
    Running,
    /// The run ended on a collision.
    GameOver,
}

/// The bird: fixed x, gravity-driven y.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub y: f32,
    pub velocity: f32,
    pub radius: f32,
}

impl Bird {
    fn new() -> Self {
        Bird {
            y: AREA.y / 2.0,
            velocity: 0.0,
            radius: BIRD_RADIUS,
        }
    }
}

/// One pipe pair, keyed by its left edge and the gap it leaves open.
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    pub x: f32,
    /// Height of the top pipe, i.e. the gap's upper edge.
    pub top: f32,
    /// Height of the bottom pipe, measured up from the floor.
    pub bottom: f32,
    /// Whether this pipe has already been scored.
    pub scored: bool,
}

/// One flappy run. Plain state advanced by [`super::tick`]; all fields are
/// readable by the renderer.
#[derive(Debug)]
pub struct FlappyGame {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub phase: FlappyPhase,
    pub tick_no: u64,
    pub(super) rng: SmallRng,
}

impl FlappyGame {
    /// A fresh run seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// A fresh run with an injected random source, for reproducible tests.
    pub fn with_rng(rng: SmallRng) -> Self {
        FlappyGame {
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            phase: FlappyPhase::Running,
            tick_no: 0,
            rng,
        }
    }

    /// Resets everything for a new run, keeping the random source.
    pub fn restart(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
        self.phase = FlappyPhase::Running;
        self.tick_no = 0;
    }

    pub fn is_over(&self) -> bool {
        self.phase == FlappyPhase::GameOver
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        FlappyGame::new()
    }
}
