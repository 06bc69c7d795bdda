use crate::grid::Grid;

/// # Representation
/// The life rule is held as two neighbor-count sets, one bit per count:
/// ```notrust
/// births:    0_0000_1000   (b3)
/// survivals: 0_0000_1100   (s23)
/// ```
/// Bit `i` set means a cell with `i` alive neighbors is born (resp. survives).
///
/// See: https://conwaylife.com/wiki/Rulestring
const BIRTHS: u16 = 0b0_0000_1000;
const SURVIVALS: u16 = 0b0_0000_1100;

/// Whether a cell is alive in the next generation, given its state and its number of alive
/// neighbors. Counts past 8 are never alive.
pub fn is_alive_next(alive: bool, neighbors: u8) -> bool {
    let Some(count) = 1u16.checked_shl(neighbors as u32) else {
        return false;
    };

    let set = if alive { SURVIVALS } else { BIRTHS };

    set & count == count
}

/// Compute the generation following `grid`.
///
/// Every cell is evaluated against the unchanged input, so the update is synchronous. The input
/// is left as is and a freshly allocated grid is returned.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let neighbors = grid.count_neighbors(row, col);

            if is_alive_next(grid.get(row, col), neighbors) {
                next.set(row, col, true);
            }
        }
    }

    next
}

/// Advance `grid` by `generations` steps
pub fn evolve(grid: &Grid, generations: usize) -> Grid {
    let mut grid = grid.clone();

    for _ in 0..generations {
        grid = next_generation(&grid);
    }

    grid
}
