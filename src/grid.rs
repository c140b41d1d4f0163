use std::fmt;

use crate::error::GridError;
use crate::rules::Cell;

/// One generation of the board: a fixed `rows x cols` matrix of cells stored
/// row-major.
///
/// A grid is a value. The step function always builds a new one, and the only
/// way to change cells is through builders that consume the grid before it is
/// shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Wrap a row-major cell buffer, checking that it fills the grid exactly.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != rows * cols {
            return Err(GridError::BufferSize {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Build a grid from rows of raw 0/1 values.
    ///
    /// Every row must have the width of the first one and every value must be
    /// 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_u8(value).ok_or(GridError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Return this grid with the given cells set alive.
    pub fn with_alive<I>(mut self, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (row, col) in cells {
            if row >= self.rows || col >= self.cols {
                return Err(GridError::OutOfBounds {
                    row,
                    col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            self.insert_alive(row, col);
        }
        Ok(self)
    }

    /// Caller guarantees the coordinate is in range.
    pub(crate) fn insert_alive(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Alive;
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(i, _)| (i / cols, i % cols))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Raw row-major view, one byte per cell (0 dead, 1 alive).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

/// Text form: one line per row, `O` for live cells and `.` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
