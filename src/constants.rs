//! This module contains all the constants used by both games.

use std::time::Duration;

use glam::Vec2;

/// Duration of one loop iteration at 60 FPS.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The fixed per-tick delta, in seconds. Game logic always advances by this
/// amount regardless of the real frame interval.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// The size of the chase game's play area, in pixels.
pub const PLAY_AREA: Vec2 = Vec2::new(800.0, 600.0);

/// The player's collision radius, in pixels.
pub const PLAYER_RADIUS: f32 = 15.0;
/// Base player movement speed, in pixels per tick.
pub const PLAYER_SPEED: f32 = 2.8;
/// Player movement speed while a dash is being sustained, in pixels per tick.
pub const PLAYER_DASH_SPEED: f32 = 6.0;

/// Duration of the dash window opened by the first trigger, in seconds.
pub const DASH_WINDOW_DURATION: f32 = 5.0;
/// Cooldown after a dash window closes, in seconds. Triggers are ignored
/// while it runs.
pub const DASH_COOLDOWN: f32 = 5.0;
/// Maximum gap between dash triggers that still sustains dash speed, in
/// seconds.
pub const MASH_THRESHOLD: f32 = 0.2;

/// Seconds before the enemy enters the arena and the chase begins.
pub const SAFE_TIME: f32 = 20.0;
/// Seconds before the first coin may appear.
pub const COIN_SPAWN_DELAY: f32 = 3.0;
/// Seconds the spawn timer must accumulate before a coin is placed.
pub const COIN_SPAWN_INTERVAL: f32 = 7.0;
/// Maximum number of uncollected coins on screen at once.
pub const MAX_COINS_ON_SCREEN: usize = 3;
/// Collecting this many coins wins the session.
pub const COINS_TO_WIN: u32 = 20;
/// Coin edge length as a multiple of the player radius.
pub const COIN_SIZE_FACTOR: f32 = 1.5;

/// The enemy's collision radius, in pixels.
pub const ENEMY_RADIUS: f32 = 15.0;
/// The enemy's cruising speed, in pixels per tick.
pub const ENEMY_SPEED: f32 = 3.0;
/// Speed multiplier applied to the enemy's cruising speed while dashing.
pub const ENEMY_DASH_MULTIPLIER: f32 = 10.0;
/// Minimum seconds between enemy dashes.
pub const ENEMY_DASH_COOLDOWN: f32 = 10.0;
/// Per-cycle dash threshold is drawn uniformly from this range, in seconds.
pub const ENEMY_NEXT_DASH_MIN: f32 = 10.0;
pub const ENEMY_NEXT_DASH_MAX: f32 = 20.0;
/// Seconds the enemy stays stunned after a dash ends.
pub const STUN_DURATION: f32 = 0.2;
/// Within this distance the enemy matches the player's base speed instead of
/// cruising, in pixels.
pub const PROXIMITY_THRESHOLD: f32 = 150.0;
/// A dashing enemy stops this many player radii short of the player.
pub const ENEMY_STOP_FACTOR: f32 = 3.0;
/// Distance under which the danger signal raises (whiteout permitting), in
/// pixels.
pub const DANGER_DISTANCE: f32 = 50.0;

/// Whiteout trigger delay is drawn uniformly from this range, in seconds.
pub const WHITEOUT_DELAY_MIN: f32 = 20.0;
pub const WHITEOUT_DELAY_MAX: f32 = 30.0;
/// Whiteout active duration is drawn uniformly from this range, in seconds.
pub const WHITEOUT_DURATION_MIN: f32 = 1.0;
pub const WHITEOUT_DURATION_MAX: f32 = 2.0;
/// Base minimum offset between player and teleported enemy, in pixels.
pub const TELEPORT_MIN_OFFSET: f32 = 50.0;
/// Minimum offset when the teleport angle lies ahead of a moving player, in
/// pixels.
pub const TELEPORT_AHEAD_OFFSET: f32 = 200.0;
/// Half-angle of the "ahead of the player" cone, in radians.
pub const TELEPORT_AHEAD_CONE: f32 = std::f32::consts::FRAC_PI_4;
/// Random extra teleport distance is drawn uniformly from [0, this), in
/// pixels.
pub const TELEPORT_EXTRA_MAX: f32 = 100.0;

/// Constants for the Flappy Bird clone.
pub mod flappy {
    use glam::Vec2;

    /// The size of the flappy play area, in pixels.
    pub const AREA: Vec2 = Vec2::new(400.0, 600.0);
    /// The bird's fixed horizontal position, in pixels.
    pub const BIRD_X: f32 = 50.0;
    /// The bird's collision radius, in pixels.
    pub const BIRD_RADIUS: f32 = 15.0;
    /// Downward acceleration, in pixels per tick squared.
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity set by a jump, in pixels per tick.
    pub const JUMP_IMPULSE: f32 = 9.0;
    /// Pipe width, in pixels.
    pub const PIPE_WIDTH: f32 = 50.0;
    /// Vertical gap between a pipe pair, in pixels.
    pub const PIPE_GAP: f32 = 160.0;
    /// Horizontal scroll speed, in pixels per tick.
    pub const PIPE_SPEED: f32 = 2.0;
    /// A new pipe pair spawns every this many ticks.
    pub const PIPE_SPAWN_TICKS: u64 = 180;
    /// Minimum clearance between a gap edge and the top/bottom of the area,
    /// in pixels.
    pub const PIPE_MARGIN: f32 = 50.0;
}
