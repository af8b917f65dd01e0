//! The chase enemy: pursuit, dash lunges, and stun recovery.

use bevy_ecs::bundle::Bundle;
use bevy_ecs::component::Component;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::constants::{
    DANGER_DISTANCE, ENEMY_DASH_COOLDOWN, ENEMY_DASH_MULTIPLIER, ENEMY_NEXT_DASH_MAX, ENEMY_NEXT_DASH_MIN,
    ENEMY_RADIUS, ENEMY_SPEED, ENEMY_STOP_FACTOR, PROXIMITY_THRESHOLD, STUN_DURATION,
};
use crate::systems::components::{
    Collider, CoinsCollected, DeltaTime, GameRng, MoveSpeed, PlayerControlled, PlayerInDanger, Position,
};
use crate::systems::stage::{GameOutcome, GameStage};
use crate::systems::whiteout::Whiteout;

/// The enemy's behavior state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyState {
    /// Closing on the player at cruising (or matched) speed.
    Pursuing,
    /// Lunging at the player at many times cruising speed.
    Dashing,
    /// Briefly inert after a dash ends.
    Stunned { timer: f32 },
}

/// Enemy AI state. Speed is recomputed every tick from the current state, so
/// no stale value survives a mode change.
#[derive(Component, Debug)]
pub struct EnemyAi {
    pub state: EnemyState,
    pub speed: f32,
    pub normal_speed: f32,
    /// Accumulates while not stunned; a dash fires once it exceeds both the
    /// fixed cooldown and the per-cycle threshold.
    pub dash_cooldown: f32,
    /// Per-cycle dash threshold, redrawn after every dash.
    pub next_dash_at: f32,
}

impl EnemyAi {
    pub fn new(rng: &mut SmallRng) -> Self {
        EnemyAi {
            state: EnemyState::Pursuing,
            speed: ENEMY_SPEED,
            normal_speed: ENEMY_SPEED,
            dash_cooldown: 0.0,
            next_dash_at: rng.random_range(ENEMY_NEXT_DASH_MIN..ENEMY_NEXT_DASH_MAX),
        }
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.state, EnemyState::Dashing)
    }

    pub fn is_stunned(&self) -> bool {
        matches!(self.state, EnemyState::Stunned { .. })
    }

    /// Ends any dash and leaves the enemy stunned at cruising speed. Applied
    /// both when a dash reaches its stop distance and when a whiteout
    /// teleport resolves.
    pub fn end_dash_and_stun(&mut self) {
        self.state = EnemyState::Stunned { timer: 0.0 };
        self.speed = self.normal_speed;
    }
}

#[derive(Bundle)]
pub struct EnemyBundle {
    pub position: Position,
    pub collider: Collider,
    pub ai: EnemyAi,
}

impl EnemyBundle {
    pub fn at(position: Vec2, rng: &mut SmallRng) -> Self {
        EnemyBundle {
            position: Position(position),
            collider: Collider { radius: ENEMY_RADIUS },
            ai: EnemyAi::new(rng),
        }
    }
}

/// Raises the danger signal while the enemy is close and visible. Evaluated
/// before the whiteout and enemy updates, on this tick's starting distance.
pub fn danger_system(
    whiteout: Res<Whiteout>,
    mut danger: ResMut<PlayerInDanger>,
    enemy: Query<&Position, With<EnemyAi>>,
    player: Query<&Position, (With<PlayerControlled>, Without<EnemyAi>)>,
) {
    let (Ok(enemy_pos), Ok(player_pos)) = (enemy.single(), player.single()) else {
        danger.0 = false;
        return;
    };
    danger.0 = !whiteout.is_active() && enemy_pos.0.distance(player_pos.0) < DANGER_DISTANCE;
}

/// Advances the enemy state machine and moves it toward the player.
///
/// No-op while no enemy exists (the warmup period).
pub fn enemy_system(
    delta_time: Res<DeltaTime>,
    mut rng: ResMut<GameRng>,
    mut enemy: Query<(&mut Position, &mut EnemyAi)>,
    player: Query<(&Position, &Collider, &MoveSpeed), (With<PlayerControlled>, Without<EnemyAi>)>,
) {
    let Ok((mut position, mut ai)) = enemy.single_mut() else {
        return;
    };
    let Ok((player_pos, player_collider, player_speed)) = player.single() else {
        return;
    };

    let to_player = player_pos.0 - position.0;
    let distance = to_player.length();

    if let EnemyState::Stunned { timer } = ai.state {
        let timer = timer + delta_time.0;
        if timer > STUN_DURATION {
            trace!("Enemy recovered from stun");
            ai.state = EnemyState::Pursuing;
        } else {
            ai.state = EnemyState::Stunned { timer };
        }
        return;
    }

    // Speed selection. A dash triggered below only takes effect on the next
    // tick's movement, matching the cooldown reset.
    ai.speed = if ai.is_dashing() {
        ai.normal_speed * ENEMY_DASH_MULTIPLIER
    } else if distance < PROXIMITY_THRESHOLD {
        player_speed.base
    } else {
        ai.normal_speed
    };

    ai.dash_cooldown += delta_time.0;
    if !ai.is_dashing() && ai.dash_cooldown > ENEMY_DASH_COOLDOWN && ai.dash_cooldown > ai.next_dash_at {
        ai.state = EnemyState::Dashing;
        ai.dash_cooldown = 0.0;
        ai.next_dash_at = rng.0.random_range(ENEMY_NEXT_DASH_MIN..ENEMY_NEXT_DASH_MAX);
        debug!(next_dash_at = ai.next_dash_at, "Enemy dash started");
    }

    let step = ai.speed;
    let stop_distance = player_collider.radius * ENEMY_STOP_FACTOR;

    if ai.is_dashing() && distance <= step + stop_distance {
        // Snap to the stop ring instead of overshooting through the player.
        if distance > 0.0 {
            position.0 = player_pos.0 - (to_player / distance) * stop_distance;
        }
        ai.end_dash_and_stun();
        trace!(stop_distance, "Enemy dash ended at stop distance");
    } else if distance > 0.0 {
        position.0 += (to_player / distance) * step;
    }
}

/// Ends the session when the enemy reaches the player while visible.
///
/// Runs on post-movement positions; suppressed entirely while a whiteout is
/// active, and never overrides a terminal stage set earlier this tick.
pub fn capture_system(
    whiteout: Res<Whiteout>,
    collected: Res<CoinsCollected>,
    mut stage: ResMut<GameStage>,
    enemy: Query<(&Position, &Collider), With<EnemyAi>>,
    player: Query<(&Position, &Collider), (With<PlayerControlled>, Without<EnemyAi>)>,
) {
    if stage.is_ended() || whiteout.is_active() {
        return;
    }
    let Ok((enemy_pos, enemy_collider)) = enemy.single() else {
        return;
    };
    let Ok((player_pos, player_collider)) = player.single() else {
        return;
    };

    let distance = player_pos.0.distance(enemy_pos.0);
    if player_collider.touches(enemy_collider, distance) {
        debug!(coins = collected.0, "Player caught by the enemy");
        *stage = GameStage::Ended(GameOutcome {
            victory: false,
            coins_collected: collected.0,
        });
    }
}
