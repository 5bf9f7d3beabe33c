//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputCommand`] and
//! recognizes the application-level keys (quit, restart). Nothing here knows
//! about sessions or timing; the binary forwards mapped commands to the
//! engine's input controller.

pub mod map;

pub use tui_shooter_types as types;

pub use map::{handle_key_event, is_command_event, should_quit, should_restart};
