//! Input controller handle.
//!
//! Called from whatever thread delivers key events. It never touches the
//! world directly: commands are queued for the simulation loop, which applies
//! them at the start of its next tick, in arrival order.

use tokio::sync::{mpsc, watch};

use crate::core::Inbound;
use crate::types::{InputCommand, SessionState};

/// Cloneable, non-blocking entry point for player commands.
#[derive(Clone)]
pub struct InputController {
    inbound: mpsc::UnboundedSender<Inbound>,
    state: watch::Receiver<SessionState>,
}

impl InputController {
    pub(crate) fn new(
        inbound: mpsc::UnboundedSender<Inbound>,
        state: watch::Receiver<SessionState>,
    ) -> Self {
        Self { inbound, state }
    }

    /// Queue `command` for the next tick.
    ///
    /// Returns `false` (and drops the command) once the session is over or
    /// the simulation loop has stopped.
    pub fn send(&self, command: InputCommand) -> bool {
        if !self.state.borrow().is_running() {
            return false;
        }
        self.inbound.send(Inbound::Input(command)).is_ok()
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }
}
