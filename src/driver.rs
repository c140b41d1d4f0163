use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::compute::next_generation;
use crate::error::RunError;
use crate::grid::Grid;
use crate::render::RenderSink;

/// Source of the delay between frames.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Request to stop a run after the step in progress. Clones share the flag.
#[derive(Debug, Default, Clone)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Steps a grid forward and hands every generation to a renderer, pausing
/// between frames.
pub struct Driver<P: Pacer = ThreadPacer> {
    pause: Duration,
    pacer: P,
}

impl Driver<ThreadPacer> {
    pub fn new(pause: Duration) -> Self {
        Self::with_pacer(pause, ThreadPacer)
    }
}

impl<P: Pacer> Driver<P> {
    pub fn with_pacer(pause: Duration, pacer: P) -> Self {
        Self { pause, pacer }
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Run exactly `steps` generations. Returns the last rendered grid, or the
    /// initial one when `steps` is zero.
    pub fn run<R>(
        &mut self,
        initial: Grid,
        steps: usize,
        renderer: &mut R,
    ) -> Result<Grid, RunError>
    where
        R: RenderSink + ?Sized,
    {
        self.run_until(initial, steps, renderer, &StopSignal::new())
    }

    /// Like [`Driver::run`], but checks `stop` before each step and returns
    /// early once it is raised.
    pub fn run_until<R>(
        &mut self,
        initial: Grid,
        steps: usize,
        renderer: &mut R,
        stop: &StopSignal,
    ) -> Result<Grid, RunError>
    where
        R: RenderSink + ?Sized,
    {
        info!("running {} steps on a {}x{} grid", steps, initial.rows(), initial.cols());

        let mut current = initial;
        for step in 1..=steps {
            if stop.is_raised() {
                warn!("stop requested, halting after step {}", step - 1);
                break;
            }

            current = next_generation(&current);
            debug!("step {}: {} live cells", step, current.live_count());

            renderer.display(&current, step)?;

            // No pause after the last frame, including one cut short by `stop`.
            if step < steps && !stop.is_raised() {
                self.pacer.pause(self.pause);
            }
        }

        Ok(current)
    }
}

/// Run `steps` generations with a thread sleep of `pause_seconds` between frames.
pub fn run<R>(
    initial: Grid,
    steps: usize,
    pause_seconds: f64,
    renderer: &mut R,
) -> Result<Grid, RunError>
where
    R: RenderSink + ?Sized,
{
    let pause = Duration::try_from_secs_f64(pause_seconds)
        .map_err(|_| RunError::InvalidPause(pause_seconds))?;
    Driver::new(pause).run(initial, steps, renderer)
}
