use std::time::Duration;

/// Generations per second while running. Also the redraw rate.
pub const TICK_RATE: u32 = 10;

pub const TICK: Duration = Duration::from_millis((1_000 / TICK_RATE) as u64);

/// Where snapshots go, relative to the working directory
pub const SNAPSHOT_DIR: &str = "image_save";

/// Log output. The terminal is in raw mode, so logs can't go to stderr.
pub const LOG_FILE: &str = "life.log";

pub const TITLE: &str = "Conway's Game of Life - Evolution";

/// Braille dots per cell side in the terminal presenter
pub const CELL_DOTS: usize = 2;

pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub alive: Rgb,
    pub gridline: Rgb,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            background: [0, 0, 0],
            alive: [255, 255, 255],
            gridline: [50, 50, 50],
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Canvas geometry. The grid dimensions are derived from it once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Side length of a cell in pixels
    pub cell_size: u32,
}

impl Layout {
    pub const fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub const fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    pub const fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(800, 600, 20)
    }
}
