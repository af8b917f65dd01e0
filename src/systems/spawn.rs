//! Spawning: the one-time chase-phase entry and the steady trickle of coins.

use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use glam::Vec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::constants::{COIN_SPAWN_DELAY, COIN_SPAWN_INTERVAL, MAX_COINS_ON_SCREEN, PLAY_AREA, SAFE_TIME};
use crate::systems::components::{Coin, CoinBundle, CoinSpawnTimer, DeltaTime, GameRng, Position, SessionClock};
use crate::systems::enemy::EnemyBundle;
use crate::systems::stage::GameStage;

/// Ends the safe period exactly once: flips the stage to `Chase` and drops
/// the enemy onto a random point of the left or right edge.
pub fn chase_entry_system(
    clock: Res<SessionClock>,
    mut stage: ResMut<GameStage>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    if *stage != GameStage::Warmup || clock.elapsed <= SAFE_TIME {
        return;
    }
    *stage = GameStage::Chase;

    let x = if rng.0.random_bool(0.5) { 0.0 } else { PLAY_AREA.x };
    let y = rng.0.random_range(0.0..PLAY_AREA.y);
    commands.spawn(EnemyBundle::at(Vec2::new(x, y), &mut rng.0));
    debug!(x, y, "Safe period over, enemy entering from the edge");
}

/// Places a coin whenever the spawn timer fills and a slot is free.
///
/// The timer starts accumulating a few seconds into the session and resets
/// only when a coin is actually placed, so while three coins sit uncollected
/// it saturates and the next spawn fires the moment a slot frees.
pub fn coin_spawn_system(
    clock: Res<SessionClock>,
    delta_time: Res<DeltaTime>,
    mut timer: ResMut<CoinSpawnTimer>,
    coins: Query<(), With<Coin>>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    if clock.elapsed <= COIN_SPAWN_DELAY {
        return;
    }
    timer.0 += delta_time.0;
    if timer.0 < COIN_SPAWN_INTERVAL || coins.iter().count() >= MAX_COINS_ON_SCREEN {
        return;
    }

    let coin = Coin::standard();
    let half = coin.size / 2.0;
    let position = Vec2::new(
        rng.0.random_range(half..PLAY_AREA.x - half),
        rng.0.random_range(half..PLAY_AREA.y - half),
    );
    commands.spawn(CoinBundle {
        coin,
        position: Position(position),
    });
    timer.0 = 0.0;
    trace!(x = position.x, y = position.y, "Coin spawned");
}
