//! Error types shared across the simulation.
//!
//! `GridError` covers malformed or inconsistent boards, `RenderError` anything
//! a renderer reports, and `RunError` is what the driver hands back to its
//! caller.

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("unexpected character {ch:?} at line {line}, column {col}")]
    InvalidChar { line: usize, col: usize, ch: char },
    #[error("{len} cells cannot fill a {rows}x{cols} grid")]
    BufferSize { rows: usize, cols: usize, len: usize },
    #[error("cell ({row}, {col}) lies outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
    #[error("density {0} is outside 0.0..=1.0")]
    InvalidDensity(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("renderer rejected frame: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("pause of {0} seconds is not a valid duration")]
    InvalidPause(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error("invalid value {value:?} for --{name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}
