//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the rules of the shooter: entities, movement, hit
//! detection, scoring, and the running/game-over state machine. It has **no
//! timers, threads or I/O**: time is passed in, randomness is seeded, and all
//! visual output goes through the [`Surface`] trait.
//!
//! # Module Structure
//!
//! - [`world`]: Complete session state and the fixed tick
//! - [`entity`]: Ship/bullet/enemy entities and id allocation
//! - [`collision`]: Bullet/enemy pairing
//! - [`effects`]: Explosion lifetimes
//! - [`input`]: Ship movement clamping and bullet placement
//! - [`spawner`]: Seeded enemy factory
//! - [`surface`]: Rendering seam
//! - [`config`]: Loading and validating [`ArenaConfig`]
//!
//! # Tick Order
//!
//! 1. Bullets advance; those leaving the arena are removed
//! 2. Enemies advance; the first whose bottom edge passes the floor ends the session
//! 3. Bullets and enemies that overlap destroy each other and score a point
//! 4. Inactive entities are compacted away
//! 5. Expired explosions are retracted
//! 6. The surface is refreshed
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_shooter_core::{NullSurface, World};
//! use tui_shooter_types::{ArenaConfig, InputCommand};
//!
//! let mut world = World::new(ArenaConfig::default());
//! let mut surface = NullSurface;
//!
//! world.apply_input(InputCommand::MoveLeft, &mut surface);
//! world.apply_input(InputCommand::Fire, &mut surface);
//! assert_eq!(world.bullets().len(), 1);
//!
//! world.tick(Duration::from_millis(5), &mut surface);
//! assert_eq!(world.score(), 0);
//! ```

pub mod collision;
pub mod config;
pub mod effects;
pub mod entity;
pub mod input;
pub mod snapshot;
pub mod spawner;
pub mod surface;
pub mod world;

pub use tui_shooter_types as types;

pub use collision::{resolve_hits, Hit};
pub use config::{load_config, validate, ConfigError};
pub use effects::EffectTimeline;
pub use entity::{Entity, EntityIds};
pub use snapshot::WorldSnapshot;
pub use spawner::EnemyFactory;
pub use surface::{NullSurface, RecordingSurface, ScoreAnchor, Surface, SurfaceCall};
pub use types::ArenaConfig;
pub use world::{Inbound, SessionReport, TickOutcome, World};
