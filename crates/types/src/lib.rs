//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from the simulation core, the
//! terminal renderer and the input mapping alike.
//!
//! # Arena
//!
//! The reference arena is 600 units wide and 400 units tall, origin at the
//! top-left corner, `y` growing downward.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 5 | Fixed simulation step |
//! | `SPAWN_PERIOD_MS` | 4000 | One enemy per period |
//! | `EXPLOSION_MS` | 500 | Lifetime of a hit explosion |
//!
//! # Examples
//!
//! ```
//! use tui_shooter_types::{EntityKind, SessionState, SpriteKind};
//!
//! assert_eq!(SpriteKind::from(EntityKind::Enemy), SpriteKind::Enemy);
//!
//! assert!(SessionState::Running.is_running());
//! assert!(!SessionState::GameOver.is_running());
//! ```

pub mod config;
pub mod geometry;

pub use config::{ArenaConfig, Margins};
pub use geometry::{overlapping, Rect, Size, Vec2};

/// Reference arena width.
pub const ARENA_WIDTH: f32 = 600.0;

/// Reference arena height.
pub const ARENA_HEIGHT: f32 = 400.0;

/// Fixed simulation step in milliseconds.
pub const TICK_MS: u64 = 5;

/// Enemy spawn period in milliseconds.
pub const SPAWN_PERIOD_MS: u64 = 4000;

/// Explosion overlay lifetime in milliseconds.
pub const EXPLOSION_MS: u64 = 500;

/// Ship displacement per move command.
pub const SHIP_STEP: f32 = 10.0;

/// Bullet displacement per tick (upward).
pub const BULLET_SPEED: f32 = 5.0;

/// Enemy displacement per tick (downward).
pub const ENEMY_SPEED: f32 = 2.0;


/// Unique identifier of a simulated or cosmetic object within a session.
///
/// Used as the key when publishing to and retracting from a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

/// The three kinds of simulated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Player ship, exactly one per session
    Ship,
    /// Projectile travelling upward
    Bullet,
    /// Descending target
    Enemy,
}

/// What a rendering surface is asked to draw.
///
/// Explosions are cosmetic and never take part in the simulation, so they are
/// a sprite kind but not an entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Ship,
    Bullet,
    Enemy,
    Explosion,
}

impl From<EntityKind> for SpriteKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Ship => SpriteKind::Ship,
            EntityKind::Bullet => SpriteKind::Bullet,
            EntityKind::Enemy => SpriteKind::Enemy,
        }
    }
}

/// A visual representation published to a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: EntityId,
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Session lifecycle.
///
/// The only transition is `Running -> GameOver`, and it is irreversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Running,
    GameOver,
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }
}

/// Discrete commands delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCommand {
    /// Move the ship one step left
    MoveLeft,
    /// Move the ship one step right
    MoveRight,
    /// Move the ship one step up (only with vertical movement enabled)
    MoveUp,
    /// Move the ship one step down (only with vertical movement enabled)
    MoveDown,
    /// Launch a bullet from the ship's horizontal center
    Fire,
}
