//! Simulation loop task.
//!
//! Owns the [`World`] exclusively. Each tick it first drains the inbound
//! queue (player commands and spawned enemies), then advances the world one
//! fixed step. When the world reports game over the new state is published,
//! the queue is closed, and the loop stops ticking.

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::{Inbound, SessionReport, Surface, World};
use crate::types::SessionState;

/// Run the simulation until game over, then retire outstanding explosions.
pub async fn run<S: Surface>(
    mut world: World,
    mut inbound: mpsc::UnboundedReceiver<Inbound>,
    state: watch::Sender<SessionState>,
    mut surface: S,
) -> SessionReport {
    let period = world.config().tick_interval();
    let started = Instant::now();
    world.start(&mut surface);

    let mut ticker = time::interval_at(started + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let now = started.elapsed();

        while let Ok(message) = inbound.try_recv() {
            world.accept(message, &mut surface);
        }

        if world.tick(now, &mut surface).game_over() {
            state.send_replace(SessionState::GameOver);
            break;
        }
    }
    inbound.close();

    // Explosions still on screen expire on schedule even though ticking stopped.
    while let Some(deadline) = world.next_effect_deadline() {
        time::sleep_until(started + deadline).await;
        if world.expire_effects(started.elapsed(), &mut surface) > 0 {
            surface.refresh();
        }
    }

    let report = world.report();
    log::info!(
        "session over: score {} after {} ticks ({} bullets, {} enemies)",
        report.score,
        report.ticks,
        report.bullets_fired,
        report.enemies_spawned
    );
    report
}
