//! Terminal shooter runner (default binary).
//!
//! The simulation and the spawner run as tokio tasks; this thread only polls
//! crossterm for keys and draws the latest published scene.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tokio::sync::watch;

use tui_shooter::cli::{self, Options, USAGE};
use tui_shooter::core::ArenaConfig;
use tui_shooter::engine::{session, InputController, SessionHandle};
use tui_shooter::input::{handle_key_event, is_command_event, should_quit, should_restart};
use tui_shooter::term::{ArenaView, FrameBuffer, Scene, SceneSurface, TerminalRenderer, Viewport};

const FRAME: Duration = Duration::from_millis(16);

enum Next {
    Quit,
    Restart,
}

fn main() -> Result<()> {
    let opts = Options::parse(std::env::args().skip(1))?.with_env(|k| std::env::var(k).ok());
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }
    cli::init_logging()?;
    let config = opts.arena_config()?;

    let rt = Runtime::new().context("starting tokio runtime")?;
    let _guard = rt.enter();

    let mut term = TerminalRenderer::new("Space Traveler");
    term.enter().context("terminal not available")?;

    let result = run(&mut term, &config, opts.session_seed());

    // Always try to restore terminal state.
    let _ = term.exit();
    let score = result?;
    println!("Final score: {score}");
    Ok(())
}

/// Play sessions until the player quits. Returns the last session's score.
fn run(term: &mut TerminalRenderer, config: &ArenaConfig, mut seed: u64) -> Result<u32> {
    let view = ArenaView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (surface, scenes) = SceneSurface::channel(config);
        let handle = session::start(config.clone(), seed, surface)?;
        let next = play(term, &view, &mut fb, &handle, scenes.clone());

        // Pending explosions of a finished session are dropped with it.
        handle.abort();
        let score = scenes.borrow().score;
        match next? {
            Next::Quit => return Ok(score),
            Next::Restart => {
                seed = seed.wrapping_add(1);
                log::info!("restarting with seed {seed}");
                term.invalidate();
            }
        }
    }
}

fn play(
    term: &mut TerminalRenderer,
    view: &ArenaView,
    fb: &mut FrameBuffer,
    handle: &SessionHandle,
    mut scenes: watch::Receiver<Scene>,
) -> Result<Next> {
    let controller: InputController = handle.controller();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&scenes.borrow_and_update(), Viewport::new(w, h), fb);
        term.draw_swap(fb)?;

        if !event::poll(FRAME)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if is_command_event(&key) => {
                if should_quit(key) {
                    return Ok(Next::Quit);
                }
                if !handle.state().is_running() && should_restart(key) {
                    return Ok(Next::Restart);
                }
                if let Some(command) = handle_key_event(key) {
                    controller.send(command);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
