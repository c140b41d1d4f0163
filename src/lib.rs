//! Conway's Game of Life on a fixed-size grid whose borders count as dead cells.
//!
//! [`compute::next_generation`] is the step function; [`driver::Driver`] runs it
//! repeatedly and feeds each generation to a [`render::RenderSink`].

pub mod compute;
pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod input;
pub mod render;
pub mod rules;

pub use compute::next_generation;
pub use driver::{run, Driver, Pacer, StopSignal, ThreadPacer};
pub use error::{ConfigError, GridError, RenderError, RunError};
pub use grid::Grid;
pub use render::{RenderSink, TerminalRenderer, TextRenderer};
pub use rules::{Cell, Pattern};
