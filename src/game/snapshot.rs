//! The immutable per-tick view handed to the external renderer.

use bevy_ecs::query::{With, Without};
use bevy_ecs::world::World;
use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{DASH_COOLDOWN, DASH_WINDOW_DURATION, MAX_COINS_ON_SCREEN};
use crate::systems::{
    Coin, CoinsCollected, Collider, DashPhase, DashState, EnemyAi, PlayerControlled, PlayerInDanger, Position,
    SessionClock, Whiteout,
};

#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyView {
    pub position: Vec2,
    pub radius: f32,
    pub stunned: bool,
    pub dashing: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CoinView {
    pub position: Vec2,
    pub size: f32,
}

/// What the HUD should say about the dash, mirroring the three display
/// states: ready, window open (with time left), cooling down (with time
/// left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashView {
    Ready,
    Active { remaining: f32 },
    Cooldown { remaining: f32 },
}

impl From<&DashState> for DashView {
    fn from(dash: &DashState) -> Self {
        match dash.phase {
            DashPhase::Ready => DashView::Ready,
            DashPhase::Window { timer } => DashView::Active {
                remaining: (DASH_WINDOW_DURATION - timer).max(0.0),
            },
            DashPhase::Cooldown { timer } => DashView::Cooldown {
                remaining: (DASH_COOLDOWN - timer).max(0.0),
            },
        }
    }
}

/// Read-only state of one tick. The update always completes before this is
/// captured, so a renderer never observes a half-applied tick.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub player: PlayerView,
    /// Absent until the chase phase begins.
    pub enemy: Option<EnemyView>,
    pub coins: SmallVec<[CoinView; MAX_COINS_ON_SCREEN]>,
    pub whiteout_active: bool,
    pub danger: bool,
    pub dash: DashView,
    pub elapsed: f32,
    pub coins_collected: u32,
}

pub(crate) fn capture(world: &mut World) -> Snapshot {
    let (player_pos, player_collider) = world
        .query_filtered::<(&Position, &Collider), With<PlayerControlled>>()
        .single(world)
        .expect("Player entity missing from world");
    let player = PlayerView {
        position: player_pos.0,
        radius: player_collider.radius,
    };

    let enemy = world
        .query_filtered::<(&Position, &Collider, &EnemyAi), Without<PlayerControlled>>()
        .single(world)
        .ok()
        .map(|(position, collider, ai)| EnemyView {
            position: position.0,
            radius: collider.radius,
            stunned: ai.is_stunned(),
            dashing: ai.is_dashing(),
        });

    let coins = world
        .query::<(&Position, &Coin)>()
        .iter(world)
        .map(|(position, coin)| CoinView {
            position: position.0,
            size: coin.size,
        })
        .collect();

    Snapshot {
        player,
        enemy,
        coins,
        whiteout_active: world.resource::<Whiteout>().is_active(),
        danger: world.resource::<PlayerInDanger>().0,
        dash: DashView::from(world.resource::<DashState>()),
        elapsed: world.resource::<SessionClock>().elapsed,
        coins_collected: world.resource::<CoinsCollected>().0,
    }
}
