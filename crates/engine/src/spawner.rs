//! Enemy spawner task.
//!
//! Runs on its own period, unsynchronized with the simulation tick. The
//! session state is checked right before creating an enemy and again right
//! before publishing it, so nothing is queued once the session has ended.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::{EnemyFactory, Inbound};
use crate::types::SessionState;

/// Publish one enemy every `period` until the session ends.
///
/// The first enemy appears one full period after start. Returns the number of
/// enemies published.
pub async fn run(
    mut factory: EnemyFactory,
    inbound: mpsc::UnboundedSender<Inbound>,
    mut state: watch::Receiver<SessionState>,
    period: Duration,
) -> u32 {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut published = 0u32;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            changed = state.changed() => {
                if changed.is_err() || !state.borrow_and_update().is_running() {
                    break;
                }
                continue;
            }
        }

        if !state.borrow().is_running() {
            break;
        }
        let enemy = factory.next_enemy();

        if !state.borrow().is_running() {
            break;
        }
        if inbound.send(Inbound::Enemy(enemy)).is_err() {
            break;
        }
        published += 1;
    }

    log::debug!("spawner stopped after {published} enemies");
    published
}
