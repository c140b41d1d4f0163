use std::io;

use anyhow::Context;
use log::info;

use life_board::config::{Config, RendererKind, Seed};
use life_board::{
    input, ConfigError, Driver, Grid, RenderSink, StopSignal, TerminalRenderer, TextRenderer,
};

fn initial_grid(config: &Config) -> anyhow::Result<Grid> {
    let grid = match &config.seed {
        Seed::Pattern(pattern) => input::from_pattern(*pattern, config.rows, config.cols),
        Seed::Random { density, seed } => input::random(config.rows, config.cols, *density, *seed)?,
        Seed::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            input::parse_grid(&text).with_context(|| format!("could not parse {}", path.display()))?
        }
    };
    Ok(grid)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match Config::from_args() {
        Ok(config) => config,
        Err(ConfigError::Clap(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let grid = initial_grid(&config)?;
    info!(
        "initial grid {}x{} with {} live cells ({:?})",
        grid.rows(),
        grid.cols(),
        grid.live_count(),
        config.seed
    );

    let stop = StopSignal::new();
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.raise()).context("could not install Ctrl-C handler")?;
    }

    let mut renderer: Box<dyn RenderSink> = match config.renderer {
        RendererKind::Terminal => Box::new(TerminalRenderer::stdout()),
        RendererKind::Plain => Box::new(TextRenderer::new(io::stdout())),
    };

    let last = Driver::new(config.pause).run_until(grid, config.steps, renderer.as_mut(), &stop)?;
    info!("finished with {} live cells", last.live_count());

    Ok(())
}
