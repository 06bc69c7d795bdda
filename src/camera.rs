use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Presents a grid in the terminal, two dots wide and four dots tall per character.
pub struct Camera {
    /// The dot buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the dot buffer
    w: usize,

    /// Height of the dot buffer
    h: usize,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        // Let `w` and `h` refer to width and height of the dot buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        // Each braille character is 3 bytes, and newlines one byte.
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            cb: vec![false; w * h],
            fb,
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    /// A camera sized to show `grid` with `dots` by `dots` dots per cell
    pub fn for_grid(grid: &Grid, dots: usize) -> Self {
        Self::new(grid.cols() * dots, grid.rows() * dots)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Turns on a square of dots, clipped to the buffer
    pub fn draw_square(&mut self, x: usize, y: usize, s: usize) {
        for dy in 0..s {
            for dx in 0..s {
                let (x, y) = (x + dx, y + dy);

                if x < self.w && y < self.h {
                    let i = self.xy_from(x, y);
                    self.cb[i] = true;
                }
            }
        }
    }

    /// Reset the dot buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Clear, then turn on the dots of every alive cell
    pub fn draw_grid(&mut self, grid: &Grid, dots: usize) {
        self.reset();

        for (row, col) in grid.iter_alive() {
            self.draw_square(col * dots, row * dots, dots);
        }
    }

    /// Build the braille text of the dot buffer, one line per character row
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = self.xy_to(n);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every sum of dots stays inside the braille block
            self.fb
                .push(char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_camera() {
        let mut cam = Camera::new(4, 4);

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn single_dots() {
        let mut cam = Camera::new(2, 4);

        cam.draw_square(0, 0, 1);
        assert_eq!(cam.render(), "\u{2801}\n");

        cam.reset();
        cam.draw_square(1, 3, 1);
        assert_eq!(cam.render(), "\u{2880}\n");
    }

    #[test]
    fn full_character() {
        let mut cam = Camera::new(2, 4);
        cam.draw_square(0, 0, 4);

        assert_eq!(cam.render(), "\u{28FF}\n");
    }

    #[test]
    fn grid_with_two_dots_per_cell() {
        let grid: Grid = "
            #.
            .#
        "
        .parse()
        .unwrap();

        let mut cam = Camera::for_grid(&grid, 2);
        assert_eq!((cam.width(), cam.height()), (4, 4));

        cam.draw_grid(&grid, 2);

        // left character: top two dot rows on (1 + 8 + 2 + 10)
        // right character: bottom two dot rows on (4 + 20 + 40 + 80)
        insta::assert_snapshot!(cam.render(), @"⠛⣤");
    }

    #[test]
    fn default_grid_fits_a_terminal() {
        let cam = Camera::for_grid(&Grid::new(30, 40), 2);
        let (bw, bh) = (cam.width().div_ceil(2), cam.height().div_ceil(4));

        assert_eq!((bw, bh), (40, 15));
    }
}
