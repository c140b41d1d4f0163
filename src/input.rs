//! Initial grid suppliers: preset patterns, random soups and text boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GridError;
use crate::grid::Grid;
use crate::rules::{initialize_grid_with_pattern, Cell, Pattern};

/// A `rows x cols` grid with `pattern` at its center.
pub fn from_pattern(pattern: Pattern, rows: usize, cols: usize) -> Grid {
    initialize_grid_with_pattern(rows, cols, pattern)
}

/// A random soup where each cell is alive with probability `density`.
/// The same seed always yields the same grid.
pub fn random(
    rows: usize,
    cols: usize,
    density: f64,
    seed: Option<u64>,
) -> Result<Grid, GridError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GridError::InvalidDensity(density));
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cells = (0..rows * cols)
        .map(|_| Cell::from(rng.gen_bool(density)))
        .collect();
    Grid::from_cells(rows, cols, cells)
}

/// Parse a text board: one row per line, `.` or `0` dead, `O`, `*` or `1` alive.
///
/// Blank lines and lines starting with `!` or `#` are skipped, so plaintext
/// `.cells` files load as-is. Every row must have the same width.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('!') || line.starts_with('#') {
            continue;
        }
        let row = line
            .chars()
            .enumerate()
            .map(|(col, ch)| match ch {
                '.' | '0' => Ok(0),
                'O' | 'o' | '*' | '1' => Ok(1),
                _ => Err(GridError::InvalidChar {
                    line: idx + 1,
                    col: col + 1,
                    ch,
                }),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        rows.push(row);
    }
    Grid::from_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cells_format() {
        let text = "!Name: Glider\n.O.\n..O\nOOO\n";
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.shape(), (3, 3));
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn parses_binary_digits_and_skips_comments() {
        let grid = parse_grid("# block\n\n0000\n0110\n0110\n0000\n").unwrap();
        assert_eq!(grid.shape(), (4, 4));
        assert_eq!(grid.live_count(), 4);
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = parse_grid("..\n.x\n").unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidChar {
                line: 2,
                col: 2,
                ch: 'x'
            }
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_grid("...\n..\n").unwrap_err();
        assert!(matches!(err, GridError::Ragged { row: 1, .. }));
    }

    #[test]
    fn empty_text_is_an_empty_grid() {
        assert_eq!(parse_grid("! nothing here\n").unwrap().shape(), (0, 0));
    }

    #[test]
    fn seeded_soup_is_reproducible() {
        let a = random(16, 16, 0.3, Some(7)).unwrap();
        let b = random(16, 16, 0.3, Some(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.shape(), (16, 16));
    }

    #[test]
    fn density_extremes() {
        assert_eq!(random(4, 5, 0.0, Some(1)).unwrap().live_count(), 0);
        assert_eq!(random(4, 5, 1.0, Some(1)).unwrap().live_count(), 20);
        assert!(matches!(
            random(4, 5, 1.5, None),
            Err(GridError::InvalidDensity(_))
        ));
    }

    #[test]
    fn pattern_seed_is_centered() {
        let grid = from_pattern(Pattern::Blinker, 5, 5);
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(2, 1), (2, 2), (2, 3)]);
    }
}
