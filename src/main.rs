use std::fs::File;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use crossterm::event;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use torus_life::config::LOG_FILE;
use torus_life::config::Layout;
use torus_life::config::Palette;
use torus_life::config::SNAPSHOT_DIR;
use torus_life::config::TICK;
use torus_life::config::TITLE;
use torus_life::controller::Controller;
use torus_life::frame::Frame;
use torus_life::grid::Grid;
use torus_life::io::convert_event;
use torus_life::snapshot::SnapshotDir;
use torus_life::terminal::Screen;
use torus_life::terminal::TerminalGuard;
use torus_life::terminal::status_line;

fn init_logging() -> anyhow::Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("Failed to create {LOG_FILE}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run(ctl: &mut Controller, screen: &mut Screen) -> anyhow::Result<()> {
    let mut note = String::new();

    loop {
        let deadline = Instant::now() + TICK;

        screen.set_status(status_line(ctl.state(), ctl.generation(), &note));
        let report = ctl.tick(screen).context("Failed to draw")?;

        match report.snapshot {
            Some(Ok(path)) => note = format!("saved {}", path.display()),
            Some(Err(err)) => note = format!("snapshot failed: {err}"),
            None => {}
        }

        // Take input for whatever is left of this tick
        loop {
            let time_left = deadline.saturating_duration_since(Instant::now());

            if !event::poll(time_left)? {
                break;
            }

            let Some(event) = convert_event(event::read()?) else {
                continue;
            };

            if ctl.handle(event).is_break() {
                return Ok(());
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let layout = Layout::default();
    let seed: u64 = rand::random();
    tracing::info!(seed, rows = layout.rows(), cols = layout.cols(), "starting");

    let grid = Grid::random(layout.rows(), layout.cols(), &mut StdRng::seed_from_u64(seed));
    let mut ctl = Controller::new(grid, SnapshotDir::new(SNAPSHOT_DIR));
    let mut screen = Screen::new(Frame::new(layout, Palette::default()));
    tracing::info!(dir = %ctl.snapshots().root().display(), "snapshots");

    let guard = TerminalGuard::enter(TITLE).context("Failed to set up the terminal")?;
    let res = run(&mut ctl, &mut screen);
    drop(guard);

    match &res {
        Ok(()) => tracing::info!(generation = ctl.generation(), "bye"),
        Err(err) => tracing::error!("{err:#}"),
    }

    res
}
