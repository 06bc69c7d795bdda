use std::fmt;
use std::mem;
use std::ops::ControlFlow;
use std::path::PathBuf;

use crate::error::RenderError;
use crate::error::SnapshotError;
use crate::events::Event;
use crate::grid::Grid;
use crate::render::Renderer;
use crate::rules;
use crate::snapshot::SnapshotDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Running,
            Self::Running => Self::Paused,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paused => "paused",
            Self::Running => "running",
        })
    }
}

/// What happened during a [`Controller::tick`]
#[derive(Debug, Default)]
pub struct TickReport {
    /// Whether the grid moved to the next generation
    pub advanced: bool,

    /// Outcome of the snapshot taken this tick, if one was requested
    pub snapshot: Option<Result<PathBuf, SnapshotError>>,
}

/// Owns the simulation: the current grid, whether it is running, and pending snapshot requests.
pub struct Controller {
    grid: Grid,
    state: RunState,
    generation: u64,
    capture_requested: bool,
    snapshots: SnapshotDir,
}

impl Controller {
    /// Starts out paused on `grid`
    pub fn new(grid: Grid, snapshots: SnapshotDir) -> Self {
        Self {
            grid,
            state: RunState::Paused,
            generation: 0,
            capture_requested: false,
            snapshots,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    /// Number of generations computed since startup
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshots(&self) -> &SnapshotDir {
        &self.snapshots
    }

    pub fn capture_requested(&self) -> bool {
        self.capture_requested
    }

    pub fn toggle_pause(&mut self) {
        self.state = self.state.toggled();
        tracing::debug!(state = %self.state, generation = self.generation, "toggled");
    }

    /// Pause and ask for the grid on screen to be saved on the next tick.
    ///
    /// Only honoured while running. Returns whether the request was taken.
    pub fn step_and_capture(&mut self) -> bool {
        if self.is_paused() {
            tracing::debug!("capture ignored while paused");
            return false;
        }

        self.state = RunState::Paused;
        self.capture_requested = true;

        true
    }

    pub fn handle(&mut self, event: Event) -> ControlFlow<()> {
        match event {
            Event::TogglePause => self.toggle_pause(),
            Event::StepAndCapture => {
                self.step_and_capture();
            }
            Event::Exit => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    /// Move to the next generation if running
    pub fn advance(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }

        self.grid = rules::next_generation(&self.grid);
        self.generation += 1;

        true
    }

    /// One beat of the loop: draw the current grid, save it if a snapshot was requested, then
    /// advance.
    ///
    /// Drawing errors are returned. Snapshot errors are logged and reported, but don't stop the
    /// simulation.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> Result<TickReport, RenderError> {
        renderer.draw(&self.grid)?;

        let snapshot = mem::take(&mut self.capture_requested).then(|| self.capture(&*renderer));

        let advanced = self.advance();

        Ok(TickReport { advanced, snapshot })
    }

    fn capture<R: Renderer>(&self, renderer: &R) -> Result<PathBuf, SnapshotError> {
        let result = self
            .snapshots
            .next_path()
            .and_then(|path| renderer.save_png(&path).map(|_| path));

        match &result {
            Ok(path) => {
                tracing::info!(path = %path.display(), generation = self.generation, "saved")
            }
            Err(err) => {
                tracing::error!(error = %err, cause = ?std::error::Error::source(err), "snapshot failed")
            }
        }

        result
    }
}
