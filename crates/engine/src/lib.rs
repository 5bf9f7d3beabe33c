//! Real-time engine: runs a session as concurrent tokio tasks.
//!
//! - [`sim_loop`]: fixed-tick task that owns the world
//! - [`spawner`]: fixed-period task that creates enemies
//! - [`controller`]: non-blocking handle for player commands
//! - [`session`]: starts the tasks and hands back a [`SessionHandle`]
//!
//! The spawner and the controller never mutate the world. They push
//! [`core::Inbound`] messages into an unbounded channel that the simulation
//! loop drains at the start of every tick, so the loop is the single writer
//! of the entity collections. Session state flows the other way through a
//! `watch` channel written only by the loop.
//!
//! # Example
//!
//! ```no_run
//! use tui_shooter_engine::{session, core::{ArenaConfig, NullSurface}};
//! use tui_shooter_engine::types::InputCommand;
//!
//! # async fn demo() -> Result<(), tui_shooter_engine::EngineError> {
//! let mut handle = session::start(ArenaConfig::default(), 42, NullSurface)?;
//! handle.controller().send(InputCommand::Fire);
//! handle.game_over().await;
//! let report = handle.finish().await?;
//! println!("score: {}", report.score);
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod session;
pub mod sim_loop;
pub mod spawner;

pub use tui_shooter_core as core;
pub use tui_shooter_types as types;

pub use controller::InputController;
pub use session::{start, EngineError, SessionHandle};
