//! The whiteout: a periodic blinding event that relocates the enemy.
//!
//! While active, the renderer inverts the play area and the enemy is neither
//! drawn nor able to catch the player. When it lifts, the enemy reappears
//! somewhere around the player, always stunned, with the spawn angle biased
//! away from the player's direction of travel.

use std::f32::consts::{PI, TAU};

use bevy_ecs::query::{With, Without};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use tracing::debug;

use crate::constants::{
    PLAY_AREA, TELEPORT_AHEAD_CONE, TELEPORT_AHEAD_OFFSET, TELEPORT_EXTRA_MAX, TELEPORT_MIN_OFFSET,
    WHITEOUT_DELAY_MAX, WHITEOUT_DELAY_MIN, WHITEOUT_DURATION_MAX, WHITEOUT_DURATION_MIN,
};
use crate::systems::components::{Collider, DeltaTime, GameRng, MoveIntent, PlayerControlled, Position};
use crate::systems::enemy::EnemyAi;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub enum Whiteout {
    /// Counting down to the next occurrence.
    Idle { timer: f32, next_at: f32 },
    /// The screen is blanked; expires after `duration`.
    Active { timer: f32, duration: f32 },
}

impl Whiteout {
    /// A fresh idle state with a newly drawn trigger threshold.
    pub fn rearm(rng: &mut SmallRng) -> Self {
        Whiteout::Idle {
            timer: 0.0,
            next_at: rng.random_range(WHITEOUT_DELAY_MIN..WHITEOUT_DELAY_MAX),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Whiteout::Active { .. })
    }
}

/// Advances the whiteout cycle and teleports the enemy when one expires.
///
/// The timers only run during the chase phase; before the enemy exists this
/// system is a no-op.
pub fn whiteout_system(
    delta_time: Res<DeltaTime>,
    mut whiteout: ResMut<Whiteout>,
    mut rng: ResMut<GameRng>,
    intent: Res<MoveIntent>,
    mut enemy: Query<(&mut Position, &mut EnemyAi, &Collider)>,
    player: Query<(&Position, &Collider), (With<PlayerControlled>, Without<EnemyAi>)>,
) {
    let Ok((mut enemy_pos, mut ai, enemy_collider)) = enemy.single_mut() else {
        return;
    };
    let Ok((player_pos, player_collider)) = player.single() else {
        return;
    };

    match *whiteout {
        Whiteout::Idle { timer, next_at } => {
            let timer = timer + delta_time.0;
            if timer > next_at {
                let duration = rng.0.random_range(WHITEOUT_DURATION_MIN..WHITEOUT_DURATION_MAX);
                debug!(duration, "Whiteout started");
                *whiteout = Whiteout::Active { timer: 0.0, duration };
            } else {
                *whiteout = Whiteout::Idle { timer, next_at };
            }
        }
        Whiteout::Active { timer, duration } => {
            let timer = timer + delta_time.0;
            if timer <= duration {
                *whiteout = Whiteout::Active { timer, duration };
                return;
            }
            *whiteout = Whiteout::rearm(&mut rng.0);

            // Relocate the enemy around the player. If the drawn angle lies
            // within the ahead-cone of a moving player, push the minimum
            // offset out so the enemy cannot reappear directly in their path.
            let angle = rng.0.random_range(0.0..TAU);
            let mut min_offset = TELEPORT_MIN_OFFSET;
            if intent.0 != Vec2::ZERO {
                let travel_angle = intent.0.y.atan2(intent.0.x);
                let mut difference = (angle - travel_angle).abs();
                if difference > PI {
                    difference = TAU - difference;
                }
                if difference < TELEPORT_AHEAD_CONE {
                    min_offset = TELEPORT_AHEAD_OFFSET;
                }
            }

            let distance = player_collider.radius
                + enemy_collider.radius
                + min_offset
                + rng.0.random_range(0.0..TELEPORT_EXTRA_MAX);
            let target = player_pos.0 + Vec2::from_angle(angle) * distance;
            enemy_pos.0 = target.clamp(
                Vec2::splat(enemy_collider.radius),
                PLAY_AREA - enemy_collider.radius,
            );
            ai.end_dash_and_stun();
            debug!(x = enemy_pos.0.x, y = enemy_pos.0.y, "Whiteout lifted, enemy relocated");
        }
    }
}
