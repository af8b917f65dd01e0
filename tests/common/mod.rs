#![allow(dead_code)]

use bevy_ecs::query::With;
use glam::Vec2;

use arcade::constants::{FIXED_DT, SAFE_TIME};
use arcade::events::GameCommand;
use arcade::game::Game;
use arcade::systems::{
    Coin, CoinBundle, EnemyAi, GameOutcome, GameRng, PlayerControlled, Position, SessionClock,
};

/// A session with a fixed random source so runs are reproducible.
pub fn seeded_game(seed: u64) -> Game {
    Game::with_rng(GameRng::seeded(seed))
}

pub fn tick(game: &mut Game) -> Option<GameOutcome> {
    game.tick(FIXED_DT)
}

pub fn tick_n(game: &mut Game, ticks: u32) -> Option<GameOutcome> {
    let mut outcome = None;
    for _ in 0..ticks {
        outcome = game.tick(FIXED_DT);
    }
    outcome
}

pub fn tick_seconds(game: &mut Game, seconds: f32) -> Option<GameOutcome> {
    tick_n(game, (seconds / FIXED_DT).ceil() as u32)
}

/// Fast-forwards the logical clock without running the intervening ticks.
pub fn set_elapsed(game: &mut Game, seconds: f32) {
    game.world.resource_mut::<SessionClock>().elapsed = seconds;
}

/// Jumps past the safe period and ticks once so the enemy spawns.
pub fn enter_chase(game: &mut Game) {
    set_elapsed(game, SAFE_TIME + 0.05);
    tick(game);
}

pub fn player_pos(game: &mut Game) -> Vec2 {
    game.world
        .query_filtered::<&Position, With<PlayerControlled>>()
        .single(&game.world)
        .expect("player missing")
        .0
}

pub fn set_player_pos(game: &mut Game, position: Vec2) {
    game.world
        .query_filtered::<&mut Position, With<PlayerControlled>>()
        .single_mut(&mut game.world)
        .expect("player missing")
        .0 = position;
}

pub fn enemy_pos(game: &mut Game) -> Option<Vec2> {
    game.world
        .query_filtered::<&Position, With<EnemyAi>>()
        .single(&game.world)
        .ok()
        .map(|position| position.0)
}

pub fn set_enemy_pos(game: &mut Game, position: Vec2) {
    game.world
        .query_filtered::<&mut Position, With<EnemyAi>>()
        .single_mut(&mut game.world)
        .expect("enemy missing")
        .0 = position;
}

pub fn with_enemy_ai(game: &mut Game, edit: impl FnOnce(&mut EnemyAi)) {
    let mut ai = game
        .world
        .query::<&mut EnemyAi>()
        .single_mut(&mut game.world)
        .expect("enemy missing");
    edit(&mut ai);
}

pub fn enemy_ai<T>(game: &mut Game, read: impl FnOnce(&EnemyAi) -> T) -> T {
    let ai = game
        .world
        .query::<&EnemyAi>()
        .single(&game.world)
        .expect("enemy missing");
    read(ai)
}

pub fn spawn_coin_at(game: &mut Game, position: Vec2) {
    game.world.spawn(CoinBundle {
        coin: Coin::standard(),
        position: Position(position),
    });
}

pub fn coin_count(game: &mut Game) -> usize {
    game.world.query::<&Coin>().iter(&game.world).count()
}

pub fn press(game: &mut Game, direction: arcade::direction::Direction) {
    game.queue_command(GameCommand::Press(direction));
}

pub fn release(game: &mut Game, direction: arcade::direction::Direction) {
    game.queue_command(GameCommand::Release(direction));
}

pub fn dash(game: &mut Game) {
    game.queue_command(GameCommand::Dash);
}
