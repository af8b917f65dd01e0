use bevy_ecs::event::EventReader;
use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query, ResMut};
use tracing::{debug, trace};

use crate::constants::COINS_TO_WIN;
use crate::events::GameEvent;
use crate::systems::components::{Coin, CoinsCollected};
use crate::systems::stage::{GameOutcome, GameStage};

/// Consumes collision events: removes the touched coin, bumps the counter,
/// and declares victory at the win threshold.
pub fn coin_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    mut collected: ResMut<CoinsCollected>,
    mut stage: ResMut<GameStage>,
    coins: Query<(), With<Coin>>,
) {
    for event in events.read() {
        let GameEvent::Collision(_, coin_entity) = event else { continue };
        // Once the session has ended, remaining events this tick are moot;
        // this also keeps the counter capped at the win threshold.
        if stage.is_ended() || coins.get(*coin_entity).is_err() {
            continue;
        }

        commands.entity(*coin_entity).despawn();
        collected.0 += 1;
        trace!(total = collected.0, "Coin collected");

        if collected.0 >= COINS_TO_WIN {
            debug!(coins = collected.0, "All coins collected, victory");
            *stage = GameStage::Ended(GameOutcome {
                victory: true,
                coins_collected: collected.0,
            });
        }
    }
}
