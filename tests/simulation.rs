//! End-to-end runs through the public API
use std::time::Duration;

use life_board::input::{from_pattern, parse_grid};
use life_board::{
    next_generation, Driver, Grid, Pacer, Pattern, RenderError, RenderSink, RunError,
    TextRenderer,
};

struct NoPause(usize);

impl Pacer for NoPause {
    fn pause(&mut self, _: Duration) {
        self.0 += 1;
    }
}

#[test]
fn text_run_shows_blinker_oscillating() {
    let grid = from_pattern(Pattern::Blinker, 5, 5);
    let mut driver = Driver::with_pacer(Duration::from_secs(1), NoPause(0));
    let mut renderer = TextRenderer::new(Vec::new());

    let last = driver.run(grid.clone(), 2, &mut renderer).unwrap();
    assert_eq!(last, grid);
    assert_eq!(driver.pacer().0, 1);

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    let expected = "\
Board State at Step 1
.....
..O..
..O..
..O..
.....

Board State at Step 2
.....
.....
.OOO.
.....
.....

";
    assert_eq!(text, expected);
}

#[test]
fn loaded_board_matches_preset() {
    let text = "!Name: Glider\n.O.\n..O\nOOO\n";
    let loaded = parse_grid(text).unwrap();
    let preset = from_pattern(Pattern::Glider, 3, 3);
    assert_eq!(loaded, preset);
}

#[test]
fn glider_dies_against_the_wall() {
    // Without wraparound a glider hitting the corner settles into a block.
    let mut grid = from_pattern(Pattern::Glider, 6, 6);
    for _ in 0..40 {
        grid = next_generation(&grid);
    }
    let block = Grid::dead(6, 6)
        .with_alive([(4, 4), (4, 5), (5, 4), (5, 5)])
        .unwrap();
    assert_eq!(grid, block);
}

struct FailAt(usize, Vec<usize>);

impl RenderSink for FailAt {
    fn display(&mut self, _: &Grid, step: usize) -> Result<(), RenderError> {
        if step == self.0 {
            return Err(RenderError::Rejected("display went away".into()));
        }
        self.1.push(step);
        Ok(())
    }
}

#[test]
fn renderer_failure_stops_the_run() {
    let mut driver = Driver::with_pacer(Duration::ZERO, NoPause(0));
    let mut sink = FailAt(4, Vec::new());

    let err = driver
        .run(from_pattern(Pattern::Toad, 6, 6), 8, &mut sink)
        .unwrap_err();

    assert!(matches!(err, RunError::Render(_)));
    assert_eq!(sink.1, vec![1, 2, 3]);
    assert_eq!(err.to_string(), "renderer rejected frame: display went away");
}
