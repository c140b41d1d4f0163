use crate::grid::Grid;
use crate::rules::GameRules;

/// Byte copy of a grid surrounded by a one-cell border of dead cells, so every
/// in-grid cell has eight addressable neighbors and edges need no bounds checks.
struct PaddedBoard {
    stride: usize,
    cells: Vec<u8>,
}

impl PaddedBoard {
    fn new(grid: &Grid) -> Self {
        let (rows, cols) = grid.shape();
        let stride = cols + 2;
        let mut cells = vec![0u8; (rows + 2) * stride];
        for (row, bytes) in grid.as_bytes().chunks_exact(cols).enumerate() {
            let start = (row + 1) * stride + 1;
            cells[start..start + cols].copy_from_slice(bytes);
        }
        Self { stride, cells }
    }

    /// Live Moore neighbors of grid cell (row, col).
    #[inline]
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        // In padded coordinates the neighborhood's top-left corner is (row, col).
        let top = row * self.stride + col;
        let mid = top + self.stride;
        let bot = mid + self.stride;
        let c = &self.cells;
        c[top]
            + c[top + 1]
            + c[top + 2]
            + c[mid]
            + c[mid + 2]
            + c[bot]
            + c[bot + 1]
            + c[bot + 2]
    }
}

/// Compute the next generation of `grid` under B3/S23 with dead cells beyond the
/// edges. The input is left untouched and the result has the same shape.
pub fn next_generation(grid: &Grid) -> Grid {
    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Grid::dead(rows, cols);
    }

    let rules = GameRules::conway();
    let padded = PaddedBoard::new(grid);
    let mut next = Vec::with_capacity(rows * cols);
    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            next.push(rules.next_state(cell, padded.live_neighbors(row, col)));
        }
    }

    Grid::from_parts(rows, cols, next)
}

/// Successive generations starting after `grid`. The iterator never ends.
pub fn generations(grid: &Grid) -> impl Iterator<Item = Grid> {
    std::iter::successors(Some(next_generation(grid)), |g| Some(next_generation(g)))
}

/// Number of live cells in each generation, the seed first.
pub fn population(grid: &Grid, steps: usize) -> Vec<usize> {
    std::iter::once(grid.live_count())
        .chain(generations(grid).take(steps).map(|g| g.live_count()))
        .collect()
}
