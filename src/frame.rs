use std::path::Path;

use image::ImageFormat;
use image::Rgb;
use image::RgbImage;

use crate::config::Layout;
use crate::config::Palette;
use crate::error::RenderError;
use crate::error::SnapshotError;
use crate::grid::Grid;
use crate::render::Renderer;

/// An off-screen RGB raster of the canvas.
///
/// Each draw clears to the background, fills alive cells, then lays the gridlines on top, one
/// line every `cell_size` pixels in both directions.
pub struct Frame {
    layout: Layout,
    palette: Palette,
    img: RgbImage,
}

impl Frame {
    pub fn new(layout: Layout, palette: Palette) -> Self {
        let mut frame = Self {
            layout,
            palette,
            img: RgbImage::new(layout.width, layout.height),
        };
        frame.clear();

        frame
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    fn clear(&mut self) {
        let bg = Rgb(self.palette.background);

        for px in self.img.pixels_mut() {
            *px = bg;
        }
    }

    /// Fill a `s` by `s` square with its top left corner at `(x, y)`, clipped to the canvas
    fn fill_square(&mut self, x: u32, y: u32, s: u32, color: Rgb<u8>) {
        let x_end = (x + s).min(self.img.width());
        let y_end = (y + s).min(self.img.height());

        for py in y..y_end {
            for px in x..x_end {
                self.img.put_pixel(px, py, color);
            }
        }
    }

    fn draw_gridlines(&mut self) {
        let color = Rgb(self.palette.gridline);
        let (w, h) = (self.img.width(), self.img.height());
        let spacing = self.layout.cell_size as usize;

        // vertical lines
        for x in (0..w).step_by(spacing) {
            for y in 0..h {
                self.img.put_pixel(x, y, color);
            }
        }

        // horizontal lines
        for y in (0..h).step_by(spacing) {
            for x in 0..w {
                self.img.put_pixel(x, y, color);
            }
        }
    }
}

impl Renderer for Frame {
    fn draw(&mut self, grid: &Grid) -> Result<(), RenderError> {
        let s = self.layout.cell_size;
        let alive = Rgb(self.palette.alive);

        self.clear();

        for (row, col) in grid.iter_alive() {
            self.fill_square(col as u32 * s, row as u32 * s, s, alive);
        }

        self.draw_gridlines();

        Ok(())
    }

    fn save_png(&self, path: &Path) -> Result<(), SnapshotError> {
        self.img
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| SnapshotError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
