use arcade::constants::COINS_TO_WIN;
use arcade::events::GameEvent;
use arcade::systems::{coin_system, Coin, CoinBundle, CoinsCollected, GameStage, Position};
use bevy_ecs::event::EventRegistry;
use bevy_ecs::system::RunSystemOnce;
use bevy_ecs::world::World;
use glam::Vec2;
use speculoos::prelude::*;

mod common;

#[test]
fn test_pickup_removes_coin_and_counts() {
    let mut game = common::seeded_game(3);
    let pos = common::player_pos(&mut game);
    common::spawn_coin_at(&mut game, pos);

    common::tick(&mut game);

    assert_that(&game.world.resource::<CoinsCollected>().0).is_equal_to(1);
    assert_that(&common::coin_count(&mut game)).is_equal_to(0);
}

#[test]
fn test_distant_coin_is_not_picked_up() {
    let mut game = common::seeded_game(3);
    let pos = common::player_pos(&mut game) + Vec2::new(100.0, 0.0);
    common::spawn_coin_at(&mut game, pos);

    common::tick(&mut game);

    assert_that(&game.world.resource::<CoinsCollected>().0).is_equal_to(0);
    assert_that(&common::coin_count(&mut game)).is_equal_to(1);
}

#[test]
fn test_count_is_monotonic_across_ticks() {
    let mut game = common::seeded_game(3);
    let mut last = 0;
    for _ in 0..600 {
        common::tick(&mut game);
        let collected = game.world.resource::<CoinsCollected>().0;
        assert!(collected >= last);
        last = collected;
    }
}

#[test]
fn test_victory_at_win_threshold() {
    let mut game = common::seeded_game(3);
    game.world.insert_resource(CoinsCollected(COINS_TO_WIN - 1));
    let pos = common::player_pos(&mut game);
    common::spawn_coin_at(&mut game, pos);

    let outcome = common::tick(&mut game).expect("collecting the last coin should end the session");
    assert_that(&outcome.victory).is_true();
    assert_that(&outcome.coins_collected).is_equal_to(COINS_TO_WIN);
}

#[test]
fn test_count_never_exceeds_win_threshold() {
    // Even with several coins underfoot on the winning tick, the counter
    // stops exactly at the threshold.
    let mut game = common::seeded_game(3);
    game.world.insert_resource(CoinsCollected(COINS_TO_WIN - 1));
    let player = common::player_pos(&mut game);
    for offset in [Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0)] {
        common::spawn_coin_at(&mut game, player + offset);
    }

    let outcome = common::tick(&mut game).expect("session should end");
    assert_that(&outcome.coins_collected).is_equal_to(COINS_TO_WIN);
    assert_that(&game.world.resource::<CoinsCollected>().0).is_equal_to(COINS_TO_WIN);
}

#[test]
fn test_coin_system_in_isolation() {
    let mut world = World::new();
    EventRegistry::register_event::<GameEvent>(&mut world);
    world.insert_resource(CoinsCollected(0));
    world.insert_resource(GameStage::Chase);

    let coin = world
        .spawn(CoinBundle {
            coin: Coin::standard(),
            position: Position(Vec2::new(100.0, 100.0)),
        })
        .id();
    world.send_event(GameEvent::Collision(coin, coin));

    world.run_system_once(coin_system).expect("System should run successfully");

    assert_that(&world.resource::<CoinsCollected>().0).is_equal_to(1);
    let remaining = world.query::<&Coin>().iter(&world).count();
    assert_that(&remaining).is_equal_to(0);
}
