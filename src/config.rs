use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};

use crate::error::ConfigError;
use crate::rules::Pattern;

const DEFAULT_STEPS: &str = "10";
const DEFAULT_PAUSE: &str = "0.5";
const DEFAULT_SIZE: &str = "20";
const DEFAULT_DENSITY: &str = "0.3";

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    Pattern(Pattern),
    Random { density: f64, seed: Option<u64> },
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Terminal,
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub steps: usize,
    pub pause: Duration,
    pub rows: usize,
    pub cols: usize,
    pub seed: Seed,
    pub renderer: RendererKind,
}

fn app() -> App<'static, 'static> {
    App::new("life_board")
        .about("Conway's Game of Life on a fixed grid with dead borders")
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .short("n")
                .takes_value(true)
                .help("number of generations to compute and show [default: 10]"),
        )
        .arg(
            Arg::with_name("pause")
                .long("pause")
                .takes_value(true)
                .help("seconds to wait between frames [default: 0.5]"),
        )
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .takes_value(true)
                .help("grid height for pattern and random seeds [default: 20]"),
        )
        .arg(
            Arg::with_name("cols")
                .long("cols")
                .takes_value(true)
                .help("grid width for pattern and random seeds [default: 20]"),
        )
        .arg(
            Arg::with_name("pattern")
                .long("pattern")
                .takes_value(true)
                .conflicts_with_all(&["random", "file"])
                .help("preset: blinker, toad, block, glider, lwss, gosper-gun [default: glider]"),
        )
        .arg(
            Arg::with_name("random")
                .long("random")
                .conflicts_with("file")
                .help("start from a random soup"),
        )
        .arg(
            Arg::with_name("density")
                .long("density")
                .takes_value(true)
                .requires("random")
                .help("fraction of live cells in a random soup [default: 0.3]"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .requires("random")
                .help("RNG seed for a reproducible soup"),
        )
        .arg(
            Arg::with_name("file")
                .long("file")
                .takes_value(true)
                .help("load the board from a text file (.cells or 0/1 rows)"),
        )
        .arg(
            Arg::with_name("plain")
                .long("plain")
                .help("print frames as plain text instead of redrawing the terminal"),
        )
}

fn parse_value<T>(
    matches: &ArgMatches,
    name: &'static str,
    default: Option<&str>,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match matches.value_of(name).or(default) {
        Some(raw) => raw.parse().map(Some).map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(None),
    }
}

fn required<T>(matches: &ArgMatches, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    Ok(parse_value(matches, name, Some(default))?.unwrap_or_default())
}

impl Config {
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::from_iter(std::env::args_os())
    }

    pub fn from_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;

        let steps: usize = required(&matches, "steps", DEFAULT_STEPS)?;
        let pause_secs: f64 = required(&matches, "pause", DEFAULT_PAUSE)?;
        let pause = Duration::try_from_secs_f64(pause_secs).map_err(|e| ConfigError::InvalidValue {
            name: "pause",
            value: pause_secs.to_string(),
            reason: e.to_string(),
        })?;
        let rows: usize = required(&matches, "rows", DEFAULT_SIZE)?;
        let cols: usize = required(&matches, "cols", DEFAULT_SIZE)?;

        let seed = if let Some(path) = matches.value_of_os("file") {
            Seed::File(PathBuf::from(path))
        } else if matches.is_present("random") {
            let density: f64 = required(&matches, "density", DEFAULT_DENSITY)?;
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::InvalidValue {
                    name: "density",
                    value: density.to_string(),
                    reason: "must lie within 0.0..=1.0".to_string(),
                });
            }
            Seed::Random {
                density,
                seed: parse_value(&matches, "seed", None)?,
            }
        } else {
            let pattern =
                parse_value::<Pattern>(&matches, "pattern", None)?.unwrap_or(Pattern::Glider);
            Seed::Pattern(pattern)
        };

        let renderer = if matches.is_present("plain") {
            RendererKind::Plain
        } else {
            RendererKind::Terminal
        };

        Ok(Self {
            steps,
            pause,
            rows,
            cols,
            seed,
            renderer,
        })
    }
}
