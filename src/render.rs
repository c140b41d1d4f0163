use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::error::RenderError;
use crate::grid::Grid;
use crate::rules::Cell;

// Ends of the plasma colormap
pub const DEAD_COLOR: Color = Color::Rgb { r: 13, g: 8, b: 135 };
pub const LIVE_COLOR: Color = Color::Rgb { r: 240, g: 249, b: 33 };

/// Consumer of grid snapshots. Each call replaces the previous frame.
pub trait RenderSink {
    fn display(&mut self, grid: &Grid, step: usize) -> Result<(), RenderError>;
}

pub fn frame_title(step: usize) -> String {
    format!("Board State at Step {}", step)
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Alive => LIVE_COLOR,
        Cell::Dead => DEAD_COLOR,
    }
}

/// Heat-map style renderer for ANSI terminals. Clears the screen before every
/// frame so successive calls animate in place.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn display(&mut self, grid: &Grid, step: usize) -> Result<(), RenderError> {
        queue!(self.out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
        queue!(
            self.out,
            SetForegroundColor(Color::Cyan),
            Print(frame_title(step)),
            ResetColor,
            Print("\n")
        )?;

        for row in grid.iter_rows() {
            for &cell in row {
                // Two columns per cell keeps cells roughly square.
                queue!(self.out, SetBackgroundColor(cell_color(cell)), Print("  "))?;
            }
            queue!(self.out, ResetColor, Print("\n"))?;
        }

        queue!(
            self.out,
            Print(format!(
                "Live cells: {} / {}\n",
                grid.live_count(),
                grid.rows() * grid.cols()
            ))
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Plain text frames (`O` alive, `.` dead), one after another. Suited to pipes
/// and log files where clearing the screen makes no sense.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn display(&mut self, grid: &Grid, step: usize) -> Result<(), RenderError> {
        writeln!(self.out, "{}", frame_title(step))?;
        write!(self.out, "{}", grid)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        Grid::dead(3, 3).with_alive([(1, 0), (1, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn text_frames_carry_title_and_cells() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.display(&blinker(), 1).unwrap();
        renderer.display(&Grid::dead(1, 2), 2).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            text,
            "Board State at Step 1\n...\nOOO\n...\n\nBoard State at Step 2\n..\n\n"
        );
    }

    #[test]
    fn terminal_frame_clears_then_draws() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.display(&blinker(), 7).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let clear = text.find("\u{1b}[2J").expect("clear sequence");
        let title = text.find("Board State at Step 7").expect("title");
        assert!(clear < title);
        assert!(text.contains("Live cells: 3 / 9"));
        // 9 cells, each drawn as a two-space block
        assert_eq!(text.matches("  ").count(), 9);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_surface_as_io_errors() {
        let mut renderer = TextRenderer::new(BrokenPipe);
        let err = renderer.display(&blinker(), 1).unwrap_err();
        assert!(matches!(err, RenderError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
