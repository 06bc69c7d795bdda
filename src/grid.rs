use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::GridError;

/// Offsets of the eight Moore neighbors, as `(dr, dc)`.
pub const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed size field of cells on a torus.
///
/// Cells are stored row-major. Every coordinate is taken modulo the grid dimensions, so the row
/// above row `0` is row `rows - 1`, and the column right of `cols - 1` is column `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Create a grid where each cell is alive with probability 1/2, independently of the others
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows * cols).map(|_| rng.gen_bool(0.5)).collect();

        Self { rows, cols, cells }
    }

    /// Create a grid from a list of rows. All rows must have the same, non-zero, length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);

        if cols == 0 {
            return Err(GridError::Empty);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    got: cells.len(),
                    exp: cols,
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// State of the cell at `(row, col)`, wrapping around the edges
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Like [`Grid::get`], but accepts coordinates on either side of the grid
    pub fn get_wrapped(&self, row: isize, col: isize) -> bool {
        let row = row.rem_euclid(self.rows as isize) as usize;
        let col = col.rem_euclid(self.cols as isize) as usize;

        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.index(row, col);
        self.cells[i] = alive;
    }

    /// Number of alive cells among the eight wrapped neighbors of `(row, col)`
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);

        NEIGHBORS
            .iter()
            .filter(|&&(dr, dc)| self.get_wrapped(row + dr, col + dc))
            .count() as u8
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of every alive cell, in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (row % self.rows) * self.cols + (col % self.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Parses a picture of the grid, one line per row. `#`, `O` and `*` are alive, `.` and `_` are
/// dead. Blank lines and surrounding whitespace are ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        '#' | 'O' | '*' => Ok(true),
                        '.' | '_' => Ok(false),
                        ch => Err(GridError::InvalidChar { ch, row, col }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}
