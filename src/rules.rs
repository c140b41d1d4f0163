//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the rule definition, the cell state representation, and
//! the preset patterns used to seed a grid.
mod patterns;

use std::fmt;
use std::str::FromStr;

use bytemuck::NoUninit;

use crate::error::GridError;
use crate::grid::Grid;

/// State of a single cell. The discriminants double as the neighbor weight, so a
/// row of cells can be summed directly as bytes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, NoUninit)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Decode a raw cell value, accepting only 0 and 1.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Game of Life standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    survival_min: u8,
    survival_max: u8,
    birth_count: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 3,
        }
    }
}

impl GameRules {
    /// Conway's classic Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::default()
    }

    /// State of a cell in the next generation given its live Moore neighbors.
    #[inline]
    pub fn next_state(&self, cell: Cell, neighbors: u8) -> Cell {
        match cell {
            Cell::Alive => {
                Cell::from((self.survival_min..=self.survival_max).contains(&neighbors))
            }
            Cell::Dead => Cell::from(neighbors == self.birth_count),
        }
    }
}

/// Predefined patterns for initializing the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small oscillator
    Blinker,
    /// A small oscillator
    Toad,
    /// A small stationary pattern
    Block,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Block,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::GosperGliderGun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Block => "block",
            Pattern::Glider => "glider",
            Pattern::LightweightSpaceship => "lwss",
            Pattern::GosperGliderGun => "gosper-gun",
        }
    }

    /// Height and width of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells().iter().fold((0, 0), |(h, w), &(r, c)| {
            (h.max(r + 1), w.max(c + 1))
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Pattern::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| GridError::UnknownPattern(s.to_string()))
    }
}

/// Place a pattern with its top-left corner at (row, col). Cells that fall
/// outside the grid are clipped.
pub fn place_pattern_on_grid(mut grid: Grid, pattern: Pattern, row: isize, col: isize) -> Grid {
    let (rows, cols) = grid.shape();
    for &(dr, dc) in pattern.cells() {
        let r = row + dr as isize;
        let c = col + dc as isize;
        if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
            grid.insert_alive(r as usize, c as usize);
        }
    }
    grid
}

/// Initialize an empty grid with a pattern at its center
pub fn initialize_grid_with_pattern(rows: usize, cols: usize, pattern: Pattern) -> Grid {
    let (height, width) = pattern.extent();
    let row = (rows as isize - height as isize) / 2;
    let col = (cols as isize - width as isize) / 2;
    log::debug!("placing {} at ({}, {}) on {}x{}", pattern, row, col, rows, cols);
    place_pattern_on_grid(Grid::dead(rows, cols), pattern, row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rule_table() {
        let rules = GameRules::conway();
        for n in 0..=8 {
            let born = rules.next_state(Cell::Dead, n);
            let kept = rules.next_state(Cell::Alive, n);
            assert_eq!(born.is_alive(), n == 3, "dead cell with {n} neighbors");
            assert_eq!(kept.is_alive(), n == 2 || n == 3, "live cell with {n} neighbors");
        }
    }

    #[test]
    fn pattern_names_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().unwrap(), pattern);
        }
        assert!(matches!(
            "pentadecathlon".parse::<Pattern>(),
            Err(GridError::UnknownPattern(_))
        ));
    }

    #[test]
    fn centered_block_lands_in_middle() {
        let grid = initialize_grid_with_pattern(6, 6, Pattern::Block);
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let grid = initialize_grid_with_pattern(5, 5, Pattern::GosperGliderGun);
        assert_eq!(grid.shape(), (5, 5));
        assert!(grid.live_count() < Pattern::GosperGliderGun.cells().len());
    }

    #[test]
    fn cell_decoding_rejects_non_binary() {
        assert_eq!(Cell::from_u8(0), Some(Cell::Dead));
        assert_eq!(Cell::from_u8(1), Some(Cell::Alive));
        assert_eq!(Cell::from_u8(2), None);
    }
}
