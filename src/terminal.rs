use std::io;
use std::io::Stdout;
use std::io::Write;
use std::path::Path;

use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::camera::Camera;
use crate::config::CELL_DOTS;
use crate::controller::RunState;
use crate::error::RenderError;
use crate::error::SnapshotError;
use crate::frame::Frame;
use crate::grid::Grid;
use crate::render::Renderer;

/// Puts the terminal in raw mode on the alternate screen with mouse capture, and undoes all of it
/// when dropped, including on early returns and panics.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter(title: &str) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // from here on, dropping the guard restores what was done
        let guard = Self;

        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            terminal::SetTitle(title),
            EnableMouseCapture,
            cursor::Hide,
        )?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(
            out,
            style::ResetColor,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// The terminal view: the raster frame kept for snapshots, plus its braille rendition on screen
/// and a status line underneath.
pub struct Screen {
    frame: Frame,
    cam: Camera,
    status: String,
    out: Stdout,
}

impl Screen {
    pub fn new(frame: Frame) -> Self {
        let layout = frame.layout();
        let cam = Camera::new(layout.cols() * CELL_DOTS, layout.rows() * CELL_DOTS);

        Self {
            frame,
            cam,
            status: String::new(),
            out: io::stdout(),
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

impl Renderer for Screen {
    fn draw(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.frame.draw(grid)?;

        self.cam.draw_grid(grid, CELL_DOTS);
        let s = self.cam.render();

        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in s.lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        queue!(self.out, style::Print(&self.status))?;
        self.out.flush()?;

        Ok(())
    }

    fn save_png(&self, path: &Path) -> Result<(), SnapshotError> {
        self.frame.save_png(path)
    }
}

/// The line shown under the grid
pub fn status_line(state: RunState, generation: u64, note: &str) -> String {
    let hint = match state {
        RunState::Paused => "click to run",
        RunState::Running => "click to pause, space to capture",
    };

    let mut line = format!("[{state}] gen {generation} | {hint} | q to quit");

    if !note.is_empty() {
        line.push_str(" | ");
        line.push_str(note);
    }

    line
}
