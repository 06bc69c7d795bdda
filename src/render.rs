use std::path::Path;

use crate::error::RenderError;
use crate::error::SnapshotError;
use crate::grid::Grid;

/// Something that can show a grid, and save what it last showed.
pub trait Renderer {
    /// Draw `grid` as the current frame
    fn draw(&mut self, grid: &Grid) -> Result<(), RenderError>;

    /// Encode the current frame as a PNG at `path`
    fn save_png(&self, path: &Path) -> Result<(), SnapshotError>;
}
