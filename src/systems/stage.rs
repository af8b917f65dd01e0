use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};

use crate::systems::components::{DeltaTime, SessionClock};

/// A resource to track the overall stage of the session from a high-level
/// perspective.
#[derive(Resource, Debug, PartialEq, Clone, Copy, Default)]
pub enum GameStage {
    /// The opening safe period: no enemy exists yet.
    #[default]
    Warmup,
    /// The enemy is in the arena and pursuing.
    Chase,
    /// The session reached a terminal result. Ticking stops here.
    Ended(GameOutcome),
}

impl GameStage {
    pub fn is_ended(&self) -> bool {
        matches!(self, GameStage::Ended(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameStage::Ended(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Terminal result of a session, delivered once to the caller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GameOutcome {
    pub victory: bool,
    pub coins_collected: u32,
}

/// Advances the logical clock. Runs first in the tick order so every other
/// system observes the same `elapsed` value.
pub fn clock_system(delta_time: Res<DeltaTime>, mut clock: ResMut<SessionClock>) {
    clock.elapsed += delta_time.0;
}
