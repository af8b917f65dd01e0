use arcade::constants::{
    ENEMY_RADIUS, PLAYER_RADIUS, PLAY_AREA, TELEPORT_MIN_OFFSET, WHITEOUT_DELAY_MAX, WHITEOUT_DELAY_MIN,
    WHITEOUT_DURATION_MAX, WHITEOUT_DURATION_MIN,
};
use arcade::direction::Direction;
use arcade::systems::{EnemyState, Whiteout};
use glam::Vec2;

mod common;

#[test]
fn test_idle_before_chase_phase() {
    // Whiteout timers only run while the enemy exists.
    let mut game = common::seeded_game(5);
    let before = *game.world.resource::<Whiteout>();
    common::tick_seconds(&mut game, 2.0);
    assert_eq!(*game.world.resource::<Whiteout>(), before);
}

#[test]
fn test_initial_threshold_in_range() {
    let game = common::seeded_game(5);
    let Whiteout::Idle { timer, next_at } = *game.world.resource::<Whiteout>() else {
        panic!("whiteout should start idle");
    };
    assert_eq!(timer, 0.0);
    assert!((WHITEOUT_DELAY_MIN..WHITEOUT_DELAY_MAX).contains(&next_at));
}

#[test]
fn test_expiry_rearms_with_fresh_thresholds() {
    let mut game = common::seeded_game(5);
    common::enter_chase(&mut game);
    common::set_enemy_pos(&mut game, Vec2::new(700.0, 100.0));
    game.world.insert_resource(Whiteout::Active { timer: 0.0, duration: 0.05 });

    common::tick_seconds(&mut game, 0.2);

    let Whiteout::Idle { next_at, .. } = *game.world.resource::<Whiteout>() else {
        panic!("whiteout should have lifted");
    };
    assert!((WHITEOUT_DELAY_MIN..WHITEOUT_DELAY_MAX).contains(&next_at));
}

#[test]
fn test_cycle_triggers_after_threshold() {
    let mut game = common::seeded_game(5);
    common::enter_chase(&mut game);
    common::set_enemy_pos(&mut game, Vec2::new(700.0, 100.0));
    game.world.insert_resource(Whiteout::Idle { timer: 0.0, next_at: 0.1 });

    common::tick_seconds(&mut game, 0.2);

    let Whiteout::Active { duration, .. } = *game.world.resource::<Whiteout>() else {
        panic!("whiteout should have started");
    };
    assert!((WHITEOUT_DURATION_MIN..WHITEOUT_DURATION_MAX).contains(&duration));
}

#[test]
fn test_enemy_reappears_stunned() {
    let mut game = common::seeded_game(5);
    common::enter_chase(&mut game);
    common::set_enemy_pos(&mut game, Vec2::new(700.0, 100.0));
    common::with_enemy_ai(&mut game, |ai| ai.state = EnemyState::Dashing);
    game.world.insert_resource(Whiteout::Active { timer: 0.0, duration: 0.05 });

    // Tick exactly through the expiry so the stun has no time to wear off.
    common::tick_n(&mut game, 4);

    assert!(common::enemy_ai(&mut game, |ai| ai.is_stunned()));
    assert!(!game.world.resource::<Whiteout>().is_active());
}

#[test]
fn test_teleport_keeps_minimum_offset() {
    let mut game = common::seeded_game(5);
    common::enter_chase(&mut game);
    common::set_enemy_pos(&mut game, Vec2::new(700.0, 100.0));
    game.world.insert_resource(Whiteout::Active { timer: 0.0, duration: 0.05 });

    common::tick_n(&mut game, 4);

    // Player sits centered, so clamping can only trim the far end of the
    // teleport, never push the enemy inside the contact ring.
    let minimum = PLAYER_RADIUS + ENEMY_RADIUS + TELEPORT_MIN_OFFSET;
    let distance = common::enemy_pos(&mut game)
        .unwrap()
        .distance(common::player_pos(&mut game));
    assert!(distance >= minimum - 1e-3, "teleport too close: {distance}");
}

#[test]
fn test_teleport_lands_inside_play_area() {
    for seed in [5, 6, 7, 8, 9] {
        let mut game = common::seeded_game(seed);
        common::enter_chase(&mut game);
        common::set_enemy_pos(&mut game, Vec2::new(700.0, 100.0));
        game.world.insert_resource(Whiteout::Active { timer: 0.0, duration: 0.05 });
        // Keep the player moving so the ahead-bias path is exercised too.
        common::press(&mut game, Direction::Up);

        common::tick_n(&mut game, 4);

        let position = common::enemy_pos(&mut game).unwrap();
        assert!(position.x >= ENEMY_RADIUS && position.x <= PLAY_AREA.x - ENEMY_RADIUS);
        assert!(position.y >= ENEMY_RADIUS && position.y <= PLAY_AREA.y - ENEMY_RADIUS);
    }
}

#[test]
fn test_repeated_cycles_rearm_each_time() {
    let mut game = common::seeded_game(5);
    common::enter_chase(&mut game);
    common::set_enemy_pos(&mut game, Vec2::new(700.0, 100.0));

    for _ in 0..3 {
        game.world.insert_resource(Whiteout::Idle { timer: 0.0, next_at: 0.05 });
        common::tick_n(&mut game, 4);
        assert!(game.world.resource::<Whiteout>().is_active());

        game.world.insert_resource(Whiteout::Active { timer: 0.0, duration: 0.05 });
        common::tick_n(&mut game, 4);
        assert!(!game.world.resource::<Whiteout>().is_active());
        assert!(common::enemy_ai(&mut game, |ai| ai.is_stunned()));
    }
}
