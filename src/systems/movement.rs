use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;

use crate::constants::PLAY_AREA;
use crate::systems::components::{Collider, MoveIntent, MoveSpeed, PlayerControlled, Position, SessionClock};
use crate::systems::dash::DashState;
use crate::systems::input::InputState;

/// Moves the player by the held input vector at the dash-selected speed and
/// clamps the result into the play area.
pub fn player_movement_system(
    input: Res<InputState>,
    dash: Res<DashState>,
    clock: Res<SessionClock>,
    mut intent: ResMut<MoveIntent>,
    mut player: Query<(&mut Position, &Collider, &MoveSpeed), With<PlayerControlled>>,
) {
    let direction = input.held.vector().normalize_or_zero();
    intent.0 = direction;

    let Ok((mut position, collider, speed)) = player.single_mut() else {
        return;
    };

    if direction != Vec2::ZERO {
        position.0 += direction * dash.effective_speed(clock.elapsed, speed);
    }
    position.0 = position
        .0
        .clamp(Vec2::splat(collider.radius), PLAY_AREA - collider.radius);
}
