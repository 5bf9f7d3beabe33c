//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It skips widget toolkits and
//! renders into a plain framebuffer that is flushed to the terminal with
//! cell-level diffing.
//!
//! Pipeline:
//! - [`SceneSurface`] receives the simulation's present/remove calls and
//!   publishes a [`Scene`] on every refresh
//! - [`ArenaView`] scales the arena into terminal cells
//! - [`TerminalRenderer`] writes only the cells that changed

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod scene;

pub use tui_shooter_core as core;
pub use tui_shooter_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, ArenaView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{Scene, SceneSurface};
