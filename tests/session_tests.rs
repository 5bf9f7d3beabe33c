//! End-to-end session tests on a paused tokio clock

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, Instant};

use tui_shooter::core::{RecordingSurface, Surface, SurfaceCall};
use tui_shooter::engine::{session, EngineError};
use tui_shooter::types::{
    ArenaConfig, EntityId, InputCommand, Margins, SessionState, Size, Sprite, SpriteKind, Vec2,
};

/// Recording surface the test can inspect while the loop owns a clone.
#[derive(Clone, Default)]
struct Shared(Arc<Mutex<RecordingSurface>>);

impl Shared {
    fn calls(&self) -> Vec<SurfaceCall> {
        self.0.lock().unwrap().calls.clone()
    }

    fn removed(&self) -> Vec<EntityId> {
        self.0.lock().unwrap().removed()
    }

    fn explosions(&self) -> Vec<EntityId> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                SurfaceCall::Present(s) if s.kind == SpriteKind::Explosion => Some(s.id),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Shared {
    fn present(&mut self, sprite: &Sprite) {
        self.0.lock().unwrap().present(sprite);
    }
    fn remove(&mut self, id: EntityId) {
        self.0.lock().unwrap().remove(id);
    }
    fn show_score(&mut self, score: u32, anchor: tui_shooter::core::ScoreAnchor) {
        self.0.lock().unwrap().show_score(score, anchor);
    }
    fn show_game_over(&mut self) {
        self.0.lock().unwrap().show_game_over();
    }
    fn refresh(&mut self) {
        self.0.lock().unwrap().refresh();
    }
}

/// A one-column arena: enemies always spawn at x = 0, right above the ship.
fn narrow_arena() -> ArenaConfig {
    ArenaConfig {
        width: 36.0,
        height: 200.0,
        ship_size: Size::new(10.0, 10.0),
        ship_start: Vec2::new(10.0, 190.0),
        ship_margin: Margins::default(),
        spawn_period_ms: 100,
        explosion_duration_ms: 2000,
        ..ArenaConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn unopposed_enemy_ends_session() {
    let config = ArenaConfig {
        height: 40.0,
        ship_size: Size::new(10.0, 10.0),
        ship_start: Vec2::new(10.0, 30.0),
        spawn_period_ms: 100,
        ..ArenaConfig::default()
    };
    let surface = Shared::default();
    let start = Instant::now();
    let mut handle = session::start(config, 11, surface.clone()).unwrap();
    assert_eq!(handle.state(), SessionState::Running);

    handle.game_over().await;
    assert_eq!(handle.state(), SessionState::GameOver);
    // First enemy at 100 ms needs 12 ticks of 2 units to pass y = 22.
    assert!(start.elapsed() >= Duration::from_millis(150));

    let report = handle.finish().await.unwrap();
    assert_eq!(report.state, SessionState::GameOver);
    assert_eq!(report.score, 0);
    assert_eq!(report.enemies_spawned, 1);

    let calls = surface.calls();
    assert!(calls.contains(&SurfaceCall::GameOver));
    assert_eq!(calls.iter().filter(|c| **c == SurfaceCall::GameOver).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn controller_rejects_input_after_game_over() {
    let config = ArenaConfig {
        height: 40.0,
        ship_size: Size::new(10.0, 10.0),
        ship_start: Vec2::new(10.0, 30.0),
        spawn_period_ms: 50,
        ..ArenaConfig::default()
    };
    let mut handle = session::start(config, 5, Shared::default()).unwrap();
    let controller = handle.controller();
    assert!(controller.send(InputCommand::MoveRight));

    handle.game_over().await;
    assert_eq!(controller.state(), SessionState::GameOver);
    assert!(!controller.send(InputCommand::Fire));

    let report = handle.finish().await.unwrap();
    assert_eq!(report.bullets_fired, 0);
}

#[tokio::test(start_paused = true)]
async fn explosion_outlives_game_over_then_expires() {
    let surface = Shared::default();
    let start = Instant::now();
    let mut handle = session::start(narrow_arena(), 1, surface.clone()).unwrap();
    assert!(handle.controller().send(InputCommand::Fire));

    handle.game_over().await;
    let explosions = surface.explosions();
    assert_eq!(explosions.len(), 1);
    assert!(!surface.removed().contains(&explosions[0]));
    assert!(!handle.is_finished());

    let report = handle.finish().await.unwrap();
    assert_eq!(report.score, 1);
    assert!(surface.removed().contains(&explosions[0]));
    assert!(start.elapsed() >= Duration::from_millis(2100));
}

#[tokio::test(start_paused = true)]
async fn abort_cancels_pending_explosions() {
    let surface = Shared::default();
    let mut handle = session::start(narrow_arena(), 1, surface.clone()).unwrap();
    assert!(handle.controller().send(InputCommand::Fire));

    handle.game_over().await;
    let explosions = surface.explosions();
    assert_eq!(explosions.len(), 1);

    handle.abort();
    time::sleep(Duration::from_secs(5)).await;
    assert!(!surface.removed().contains(&explosions[0]));

    match handle.finish().await {
        Err(EngineError::Simulation(e)) => assert!(e.is_cancelled()),
        other => panic!("expected cancelled simulation, got {:?}", other.map(|r| r.score)),
    }
}

#[tokio::test(start_paused = true)]
async fn same_seed_spawns_same_columns() {
    async fn spawn_columns(seed: u64) -> Vec<f32> {
        let config = ArenaConfig {
            height: 40.0,
            ship_size: Size::new(10.0, 10.0),
            ship_start: Vec2::new(10.0, 30.0),
            spawn_period_ms: 10,
            ..ArenaConfig::default()
        };
        let surface = Shared::default();
        let mut handle = session::start(config, seed, surface.clone()).unwrap();
        handle.game_over().await;
        handle.finish().await.unwrap();
        surface
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                SurfaceCall::Present(s) if s.kind == SpriteKind::Enemy && s.rect.y == 0.0 => {
                    Some(s.rect.x)
                }
                _ => None,
            })
            .collect()
    }

    let a = spawn_columns(99).await;
    let b = spawn_columns(99).await;
    let n = a.len().min(b.len());
    assert!(n > 0);
    assert_eq!(a[..n], b[..n]);
    assert!(a.iter().all(|x| (0.0..=564.0).contains(x)));
}

#[tokio::test(start_paused = true)]
async fn queued_move_lands_before_queued_fire() {
    let surface = Shared::default();
    let handle = session::start(ArenaConfig::default(), 3, surface.clone()).unwrap();
    let controller = handle.controller();
    assert!(controller.send(InputCommand::MoveRight));
    assert!(controller.send(InputCommand::Fire));

    time::sleep(Duration::from_millis(20)).await;
    handle.abort();

    // Ship moved from 265 to 275, so the bullet starts at 275 + 25 - 2.5.
    let bullet_xs: Vec<f32> = surface
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            SurfaceCall::Present(s) if s.kind == SpriteKind::Bullet => Some(s.rect.x),
            _ => None,
        })
        .collect();
    assert!(!bullet_xs.is_empty());
    assert!(bullet_xs.iter().all(|&x| x == 297.5));
}

#[tokio::test]
async fn zero_tick_interval_is_refused() {
    let config = ArenaConfig {
        tick_interval_ms: 0,
        ..ArenaConfig::default()
    };
    match session::start(config, 1, Shared::default()) {
        Err(EngineError::Config(e)) => assert!(e.to_string().contains("tick_interval_ms")),
        Err(other) => panic!("expected a config error, got {other}"),
        Ok(_) => panic!("session started with a zero tick interval"),
    }
}
