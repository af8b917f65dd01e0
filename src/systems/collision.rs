use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::Query;

use crate::events::GameEvent;
use crate::systems::components::{Coin, Collider, PlayerControlled, Position};

/// Detects the player overlapping coins and emits collision events for the
/// coin system to handle counting and removal.
///
/// Distance-based: a coin counts as touched when the center distance drops
/// under the player radius plus half the coin size.
pub fn collision_system(
    player: Query<(Entity, &Position, &Collider), With<PlayerControlled>>,
    coins: Query<(Entity, &Position, &Coin), Without<PlayerControlled>>,
    mut events: EventWriter<GameEvent>,
) {
    let Ok((player_entity, player_pos, player_collider)) = player.single() else {
        return;
    };

    for (coin_entity, coin_pos, coin) in coins.iter() {
        if player_pos.0.distance(coin_pos.0) < coin.pickup_radius(player_collider) {
            events.write(GameEvent::Collision(player_entity, coin_entity));
        }
    }
}
