use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::{COIN_SIZE_FACTOR, PLAYER_DASH_SPEED, PLAYER_RADIUS, PLAYER_SPEED, PLAY_AREA};

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// World-space position, in pixels from the top-left of the play area.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// A circular collision boundary.
#[derive(Component, Debug, Clone, Copy)]
pub struct Collider {
    pub radius: f32,
}

impl Collider {
    /// Whether two circles at the given center distance overlap.
    pub fn touches(&self, other: &Collider, distance: f32) -> bool {
        distance < self.radius + other.radius
    }
}

/// The player's two movement speeds, in pixels per tick. Which one applies
/// on a given tick is decided by the dash controller.
#[derive(Component, Debug, Clone, Copy)]
pub struct MoveSpeed {
    pub base: f32,
    pub dash: f32,
}

/// A coin waiting to be collected. `size` is the square's edge length.
#[derive(Component, Debug, Clone, Copy)]
pub struct Coin {
    pub size: f32,
}

impl Coin {
    pub fn standard() -> Self {
        Coin {
            size: PLAYER_RADIUS * COIN_SIZE_FACTOR,
        }
    }

    /// Pickup range against the player: the coin counts as touched when the
    /// center distance drops under the player radius plus half the coin.
    pub fn pickup_radius(&self, player: &Collider) -> f32 {
        player.radius + self.size / 2.0
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub collider: Collider,
    pub speed: MoveSpeed,
}

impl PlayerBundle {
    /// The player starts each session centered in the play area.
    pub fn centered() -> Self {
        PlayerBundle {
            player: PlayerControlled,
            position: Position(PLAY_AREA / 2.0),
            collider: Collider { radius: PLAYER_RADIUS },
            speed: MoveSpeed {
                base: PLAYER_SPEED,
                dash: PLAYER_DASH_SPEED,
            },
        }
    }
}

#[derive(Bundle)]
pub struct CoinBundle {
    pub coin: Coin,
    pub position: Position,
}

/// The fixed delta applied to this tick, in seconds.
#[derive(Resource)]
pub struct DeltaTime(pub f32);

/// Logical session clock. Advances by the fixed dt once per tick, so every
/// timer in the engine is reproducible under test.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SessionClock {
    pub elapsed: f32,
}

/// Coins collected so far this session. Monotonically non-decreasing.
#[derive(Resource, Default, Debug)]
pub struct CoinsCollected(pub u32);

/// Raised while the enemy is close and the whiteout is not hiding it.
/// Purely observational; only the renderer reads it.
#[derive(Resource, Default, Debug)]
pub struct PlayerInDanger(pub bool);

/// The normalized movement vector the player input produced this tick.
/// Zero when no (or cancelling) directions are held.
#[derive(Resource, Default, Debug)]
pub struct MoveIntent(pub Vec2);

/// Accumulator for coin spawning. Starts at the full interval so the first
/// coin appears as soon as spawning unlocks; resets only when a coin is
/// actually placed.
#[derive(Resource, Debug)]
pub struct CoinSpawnTimer(pub f32);

/// The session's random number source. Production seeds from OS entropy;
/// tests construct a seeded one for reproducible runs.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    pub fn from_entropy() -> Self {
        GameRng(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        GameRng(SmallRng::seed_from_u64(seed))
    }
}
