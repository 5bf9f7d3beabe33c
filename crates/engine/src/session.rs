//! Session wiring: one simulation loop, one spawner, one input controller.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::controller::InputController;
use crate::core::{
    validate, ArenaConfig, ConfigError, EnemyFactory, EntityIds, SessionReport, Surface, World,
};
use crate::types::SessionState;
use crate::{sim_loop, spawner};

/// Errors surfaced when starting a session or collecting its result.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("cannot start session: {0}")]
    Config(#[from] ConfigError),

    #[error("simulation task did not complete: {0}")]
    Simulation(#[source] tokio::task::JoinError),

    #[error("spawner task did not complete: {0}")]
    Spawner(#[source] tokio::task::JoinError),
}

/// Handle to a running session.
///
/// Dropping the handle does not stop the session; call [`SessionHandle::abort`]
/// to cancel it early.
pub struct SessionHandle {
    controller: InputController,
    state: watch::Receiver<SessionState>,
    simulation: JoinHandle<SessionReport>,
    spawner: JoinHandle<u32>,
}

/// Start a session on the current tokio runtime.
///
/// `seed` drives enemy placement. Must be called from within a runtime
/// context. Fails without spawning anything if `config` does not validate.
pub fn start<S>(config: ArenaConfig, seed: u64, surface: S) -> Result<SessionHandle, EngineError>
where
    S: Surface + Send + 'static,
{
    validate(&config)?;
    let ids = EntityIds::new();
    let factory = EnemyFactory::new(&config, ids.clone(), seed);
    let spawn_period = config.spawn_period();
    log::info!(
        "session start: arena {}x{}, tick {:?}, spawn every {:?}, seed {}",
        config.width,
        config.height,
        config.tick_interval(),
        spawn_period,
        seed
    );
    let world = World::with_ids(config, ids);

    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(SessionState::Running);

    let simulation = tokio::spawn(sim_loop::run(world, inbound_rx, state_tx, surface));
    let spawner = tokio::spawn(spawner::run(
        factory,
        inbound_tx.clone(),
        state_rx.clone(),
        spawn_period,
    ));

    Ok(SessionHandle {
        controller: InputController::new(inbound_tx, state_rx.clone()),
        state: state_rx,
        simulation,
        spawner,
    })
}

impl SessionHandle {
    pub fn controller(&self) -> InputController {
        self.controller.clone()
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Whether the simulation task has fully wound down (including effects).
    pub fn is_finished(&self) -> bool {
        self.simulation.is_finished()
    }

    /// Resolve once the session has reached game over.
    pub async fn game_over(&mut self) {
        // An error means the loop is gone, which also means no further play.
        let _ = self.state.wait_for(|s| !s.is_running()).await;
    }

    /// Wait for both tasks and return the final report.
    pub async fn finish(self) -> Result<SessionReport, EngineError> {
        let report = self.simulation.await.map_err(EngineError::Simulation)?;
        self.spawner.await.map_err(EngineError::Spawner)?;
        Ok(report)
    }

    /// Cancel the session immediately, including pending explosion expirations.
    pub fn abort(&self) {
        self.simulation.abort();
        self.spawner.abort();
    }
}
