//! Arena configuration.
//!
//! Every tunable of a session lives here. Defaults reproduce the reference
//! game: a 600x400 arena, 5 ms ticks and one enemy every 4 seconds.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::{Size, Vec2};
use crate::{
    ARENA_HEIGHT, ARENA_WIDTH, BULLET_SPEED, ENEMY_SPEED, EXPLOSION_MS, SHIP_STEP, SPAWN_PERIOD_MS,
    TICK_MS,
};

/// Keep-out distances the ship must respect from each arena edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 10.0,
            right: 0.0,
            top: 10.0,
            bottom: 0.0,
        }
    }
}

/// Tunable constants for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub ship_size: Size,
    pub bullet_size: Size,
    pub enemy_size: Size,
    pub explosion_size: Size,
    /// Top-left corner of the ship when the session starts.
    pub ship_start: Vec2,
    pub ship_margin: Margins,
    /// Displacement applied per move command.
    pub ship_speed_step: f32,
    /// Upward displacement per tick.
    pub bullet_speed: f32,
    /// Downward displacement per tick.
    pub enemy_speed: f32,
    pub tick_interval_ms: u64,
    pub spawn_period_ms: u64,
    pub explosion_duration_ms: u64,
    pub vertical_movement_enabled: bool,
    /// Score label position while running.
    pub score_hud_anchor: Vec2,
    /// Score label position once the session is over.
    pub score_final_anchor: Vec2,
    pub game_over_anchor: Vec2,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            ship_size: Size::new(50.0, 50.0),
            bullet_size: Size::new(5.0, 20.0),
            enemy_size: Size::new(36.0, 18.0),
            explosion_size: Size::new(40.0, 40.0),
            ship_start: Vec2::new(265.0, 350.0),
            ship_margin: Margins::default(),
            ship_speed_step: SHIP_STEP,
            bullet_speed: BULLET_SPEED,
            enemy_speed: ENEMY_SPEED,
            tick_interval_ms: TICK_MS,
            spawn_period_ms: SPAWN_PERIOD_MS,
            explosion_duration_ms: EXPLOSION_MS,
            vertical_movement_enabled: false,
            score_hud_anchor: Vec2::new(10.0, 10.0),
            score_final_anchor: Vec2::new(200.0, 240.0),
            game_over_anchor: Vec2::new(200.0, 200.0),
        }
    }
}

impl ArenaConfig {
    pub fn arena_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn spawn_period(&self) -> Duration {
        Duration::from_millis(self.spawn_period_ms)
    }

    pub fn explosion_duration(&self) -> Duration {
        Duration::from_millis(self.explosion_duration_ms)
    }

    /// Horizontal range the ship's top-left corner may occupy.
    pub fn ship_x_range(&self) -> (f32, f32) {
        let min = self.ship_margin.left;
        let max = self.width - self.ship_size.width - self.ship_margin.right;
        (min, max.max(min))
    }

    /// Vertical range the ship's top-left corner may occupy.
    pub fn ship_y_range(&self) -> (f32, f32) {
        let min = self.ship_margin.top;
        let max = self.height - self.ship_size.height - self.ship_margin.bottom;
        (min, max.max(min))
    }

    /// Largest x an enemy can spawn at while staying fully inside the arena.
    pub fn enemy_spawn_max_x(&self) -> f32 {
        (self.width - self.enemy_size.width).max(0.0)
    }
}
