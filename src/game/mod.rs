//! The chase game's composition root.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::{schedule::Schedule, world::World};

use crate::constants::{COIN_SPAWN_INTERVAL, FIXED_DT};
use crate::events::{GameCommand, GameEvent};
use crate::systems::{
    capture_system, chase_entry_system, clock_system, coin_spawn_system, coin_system, collision_system,
    danger_system, dash_system, enemy_system, input_system, player_movement_system, whiteout_system,
    CoinSpawnTimer, CoinsCollected, DashState, DeltaTime, GameOutcome, GameRng, GameStage, InputState, MoveIntent,
    PlayerBundle, PlayerInDanger, SessionClock, Whiteout,
};

pub mod snapshot;

pub use snapshot::{CoinView, DashView, EnemyView, PlayerView, Snapshot};

/// The `Game` struct owns one session of the chase game.
///
/// It holds the ECS world and the fixed system chain, accepts queued input
/// commands, advances one tick at a time, and exposes a read-only snapshot
/// for the external renderer.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// A fresh session seeded from OS entropy.
    pub fn new() -> Game {
        Game::with_rng(GameRng::from_entropy())
    }

    /// A fresh session with an injected random source, for reproducible runs.
    pub fn with_rng(mut rng: GameRng) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameEvent>(&mut world);

        world.insert_resource(Whiteout::rearm(&mut rng.0));
        world.insert_resource(rng);
        world.insert_resource(DeltaTime(FIXED_DT));
        world.insert_resource(SessionClock::default());
        world.insert_resource(CoinsCollected::default());
        world.insert_resource(PlayerInDanger::default());
        world.insert_resource(MoveIntent::default());
        world.insert_resource(CoinSpawnTimer(COIN_SPAWN_INTERVAL));
        world.insert_resource(InputState::default());
        world.insert_resource(DashState::default());
        world.insert_resource(GameStage::default());

        world.spawn(PlayerBundle::centered());

        schedule.add_systems(
            (
                clock_system,
                input_system,
                dash_system,
                player_movement_system,
                chase_entry_system,
                coin_spawn_system,
                collision_system,
                coin_system,
                danger_system,
                whiteout_system,
                enemy_system,
                capture_system,
            )
                .chain(),
        );

        Game { world, schedule }
    }

    /// Queues an input command for the next tick.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.world.send_event(GameEvent::Command(command));
    }

    /// Advances the session by one tick of `dt` seconds.
    ///
    /// Once the session has reached a terminal stage, ticking is a no-op
    /// that keeps returning the same outcome.
    pub fn tick(&mut self, dt: f32) -> Option<GameOutcome> {
        if let Some(outcome) = self.outcome() {
            return Some(outcome);
        }

        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.insert_resource(DeltaTime(dt));
        self.schedule.run(&mut self.world);

        self.outcome()
    }

    /// The terminal result, once one exists.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.world.resource::<GameStage>().outcome()
    }

    /// Captures the read-only view of the current tick for the renderer.
    pub fn snapshot(&mut self) -> Snapshot {
        snapshot::capture(&mut self.world)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
