//! Integration tests for the simulation rules

use std::time::Duration;

use tui_shooter::core::{Entity, Inbound, RecordingSurface, SurfaceCall, World};
use tui_shooter::types::{
    ArenaConfig, EntityKind, InputCommand, Rect, SessionState, Size, SpriteKind, Vec2,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn enemy_at(world: &World, x: f32, y: f32) -> Entity {
    let config = world.config();
    Entity::new(
        world.ids().next_id(),
        EntityKind::Enemy,
        Vec2::new(x, y),
        config.enemy_size,
        Vec2::new(0.0, config.enemy_speed),
    )
}

fn bullet_at(world: &World, x: f32, y: f32) -> Entity {
    let config = world.config();
    Entity::new(
        world.ids().next_id(),
        EntityKind::Bullet,
        Vec2::new(x, y),
        config.bullet_size,
        Vec2::new(0.0, -config.bullet_speed),
    )
}

#[test]
fn test_session_start() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    world.start(&mut surface);

    assert_eq!(world.state(), SessionState::Running);
    assert_eq!(world.score(), 0);
    assert_eq!(world.ship().rect(), Rect::new(265.0, 350.0, 50.0, 50.0));
    assert!(world.bullets().is_empty());
    assert!(world.enemies().is_empty());
    assert!(surface.presented(world.ship().id()));
}

#[test]
fn test_fire_from_start_position() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();

    assert!(world.apply_input(InputCommand::Fire, &mut surface));
    assert_eq!(world.bullets().len(), 1);

    let bullet = &world.bullets()[0];
    assert_eq!(bullet.rect(), Rect::new(287.5, 350.0, 5.0, 20.0));
    assert_eq!(bullet.velocity(), Vec2::new(0.0, -5.0));

    world.tick(ms(5), &mut surface);
    assert_eq!(world.bullets()[0].position(), Vec2::new(287.5, 345.0));
}

#[test]
fn test_bullet_hits_enemy() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();

    let bullet = bullet_at(&world, 100.0, 100.0);
    let enemy = enemy_at(&world, 100.0, 110.0);
    let (bullet_id, enemy_id) = (bullet.id(), enemy.id());
    assert!(world.insert(bullet, &mut surface));
    assert!(world.accept(Inbound::Enemy(enemy), &mut surface));

    let outcome = world.tick(ms(5), &mut surface);
    assert_eq!(outcome.hits, 1);
    assert_eq!(world.score(), 1);
    assert!(world.bullets().is_empty());
    assert!(world.enemies().is_empty());

    let removed = surface.removed();
    assert!(removed.contains(&bullet_id));
    assert!(removed.contains(&enemy_id));

    // Explosion at the enemy's post-move position
    let explosions: Vec<_> = world.effects().sprites().collect();
    assert_eq!(explosions.len(), 1);
    assert_eq!(explosions[0].kind, SpriteKind::Explosion);
    assert_eq!(explosions[0].rect, Rect::new(100.0, 112.0, 40.0, 40.0));
}

#[test]
fn test_enemy_touching_floor_is_not_a_loss() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();

    // 380 + 2 + 18 == 400
    world.insert(enemy_at(&world, 50.0, 380.0), &mut surface);
    let outcome = world.tick(ms(5), &mut surface);
    assert!(!outcome.game_over());
    assert_eq!(world.enemies()[0].rect().bottom(), 400.0);
}

#[test]
fn test_enemy_crossing_floor_ends_session() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();

    world.insert(enemy_at(&world, 50.0, 381.0), &mut surface);
    world.insert(enemy_at(&world, 300.0, 10.0), &mut surface);
    world.fire(&mut surface);

    let outcome = world.tick(ms(5), &mut surface);
    assert!(outcome.game_over());
    assert_eq!(world.state(), SessionState::GameOver);
    assert!(world.bullets().is_empty());
    assert!(world.enemies().is_empty());
    assert!(surface.calls.contains(&SurfaceCall::GameOver));
}

#[test]
fn test_loss_skips_collisions_of_that_tick() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();

    // This pair would collide, but the loss is detected first.
    world.insert(bullet_at(&world, 100.0, 100.0), &mut surface);
    world.insert(enemy_at(&world, 500.0, 390.0), &mut surface);
    world.insert(enemy_at(&world, 100.0, 110.0), &mut surface);

    world.tick(ms(5), &mut surface);
    assert_eq!(world.state(), SessionState::GameOver);
    assert_eq!(world.score(), 0);
    assert!(world.effects().is_empty());
}

#[test]
fn test_game_over_is_irreversible() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    world.insert(enemy_at(&world, 0.0, 399.0), &mut surface);
    world.tick(ms(5), &mut surface);
    assert_eq!(world.state(), SessionState::GameOver);

    let ship_before = world.ship().rect();
    assert!(!world.apply_input(InputCommand::MoveLeft, &mut surface));
    assert!(!world.apply_input(InputCommand::Fire, &mut surface));
    assert!(!world.insert(enemy_at(&world, 0.0, 0.0), &mut surface));
    assert_eq!(world.ship().rect(), ship_before);

    let ticks = world.ticks();
    let outcome = world.tick(ms(10), &mut surface);
    assert!(outcome.game_over());
    assert_eq!(world.ticks(), ticks);
    assert!(world.bullets().is_empty());
    assert!(world.enemies().is_empty());
}

#[test]
fn test_ship_is_clamped_to_margins() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();

    for _ in 0..100 {
        world.apply_input(InputCommand::MoveLeft, &mut surface);
    }
    assert_eq!(world.ship().position().x, 10.0);

    for _ in 0..100 {
        world.apply_input(InputCommand::MoveRight, &mut surface);
    }
    assert_eq!(world.ship().position().x, 550.0);
}

#[test]
fn test_vertical_movement_needs_flag() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    assert!(!world.apply_input(InputCommand::MoveUp, &mut surface));
    assert_eq!(world.ship().position().y, 350.0);

    let config = ArenaConfig {
        vertical_movement_enabled: true,
        ..ArenaConfig::default()
    };
    let mut world = World::new(config);
    assert!(world.apply_input(InputCommand::MoveUp, &mut surface));
    assert_eq!(world.ship().position().y, 340.0);

    for _ in 0..100 {
        world.apply_input(InputCommand::MoveUp, &mut surface);
    }
    assert_eq!(world.ship().position().y, 10.0);
}

#[test]
fn test_bullet_leaving_top_is_removed() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    let bullet = bullet_at(&world, 50.0, 0.0);
    let id = bullet.id();
    world.insert(bullet, &mut surface);

    world.tick(ms(5), &mut surface);
    assert!(world.bullets().is_empty());
    assert_eq!(surface.removed(), vec![id]);
}

#[test]
fn test_explosion_expires_after_duration() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    world.insert(bullet_at(&world, 100.0, 100.0), &mut surface);
    world.insert(enemy_at(&world, 100.0, 110.0), &mut surface);

    world.tick(ms(5), &mut surface);
    assert_eq!(world.effects().len(), 1);
    assert_eq!(world.next_effect_deadline(), Some(ms(505)));

    world.tick(ms(504), &mut surface);
    assert_eq!(world.effects().len(), 1);

    surface.clear();
    world.tick(ms(505), &mut surface);
    assert!(world.effects().is_empty());
    assert_eq!(surface.removed().len(), 1);
}

#[test]
fn test_score_counts_every_hit_in_a_tick() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    for x in [0.0, 100.0, 200.0] {
        world.insert(bullet_at(&world, x, 100.0), &mut surface);
        world.insert(enemy_at(&world, x, 110.0), &mut surface);
    }

    let outcome = world.tick(ms(5), &mut surface);
    assert_eq!(outcome.hits, 3);
    assert_eq!(world.score(), 3);
    assert_eq!(world.effects().len(), 3);
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, SurfaceCall::Score(3, _))));
}

#[test]
fn test_one_bullet_destroys_one_enemy() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    world.insert(bullet_at(&world, 100.0, 100.0), &mut surface);
    world.insert(enemy_at(&world, 95.0, 110.0), &mut surface);
    world.insert(enemy_at(&world, 98.0, 112.0), &mut surface);

    world.tick(ms(5), &mut surface);
    assert_eq!(world.score(), 1);
    assert_eq!(world.enemies().len(), 1);
}

#[test]
fn test_snapshot_matches_world() {
    let mut world = World::new(ArenaConfig::default());
    let mut surface = RecordingSurface::new();
    world.fire(&mut surface);
    world.insert(enemy_at(&world, 10.0, 10.0), &mut surface);
    world.tick(ms(5), &mut surface);

    let snap = world.snapshot();
    assert!(snap.playable());
    assert_eq!(snap.entity_count(), 3);
    assert_eq!(snap.ticks, 1);
    assert_eq!(snap.enemies[0].size(), Size::new(36.0, 18.0));

    let report = world.report();
    assert_eq!(report.bullets_fired, 1);
    assert_eq!(report.enemies_spawned, 1);
    assert_eq!(report.state, SessionState::Running);
}
