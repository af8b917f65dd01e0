//! The chase game's update systems and their components and resources.
//!
//! One tick runs these in a fixed chain: clock, input, dash, player
//! movement, spawning, coin pickup, danger, whiteout, enemy, capture.

pub mod coin;
pub mod collision;
pub mod components;
pub mod dash;
pub mod enemy;
pub mod input;
pub mod movement;
pub mod spawn;
pub mod stage;
pub mod whiteout;

pub use coin::coin_system;
pub use collision::collision_system;
pub use components::{
    Coin, CoinBundle, CoinSpawnTimer, CoinsCollected, Collider, DeltaTime, GameRng, MoveIntent, MoveSpeed,
    PlayerBundle, PlayerControlled, PlayerInDanger, Position, SessionClock,
};
pub use dash::{dash_system, DashPhase, DashState};
pub use enemy::{capture_system, danger_system, enemy_system, EnemyAi, EnemyBundle, EnemyState};
pub use input::{input_system, InputState};
pub use movement::player_movement_system;
pub use spawn::{chase_entry_system, coin_spawn_system};
pub use stage::{clock_system, GameOutcome, GameStage};
pub use whiteout::{whiteout_system, Whiteout};
