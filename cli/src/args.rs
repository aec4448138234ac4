//! Parsing command-line arguments.

use crate::load::load_config;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind, value_parser,
    Arg, ArgAction, ArgMatches, Command, Error,
};
use lifegrid_lib::{Boundary, Config, Coord};
use log::LevelFilter;
use std::{fmt::Display, path::PathBuf};

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(String::from("must be a positive integer")),
    }
}

/// Parses a cell given as `X,Y`.
pub(crate) fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, found {:?}", s))?;
    let x = x.trim().parse().map_err(|e| format!("invalid X: {}", e))?;
    let y = y.trim().parse().map_err(|e| format!("invalid Y: {}", e))?;
    Ok((x, y))
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) toggle: Vec<Coord>,
    pub(crate) generations: u64,
    pub(crate) verbose: u8,
}

impl Args {
    fn command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .long_about(
                "Runs Conway's Game of Life on a fixed-size grid\n\
                 \n\
                 The final grid is printed in Plaintext format:\n\
                 * Dead cells are represented by `.`;\n\
                 * Living cells are represented by `o`.\n",
            )
            .arg(
                Arg::new("X")
                    .help("Width of the grid [default: 80]")
                    .index(1)
                    .value_parser(parse_positive),
            )
            .arg(
                Arg::new("Y")
                    .help("Height of the grid [default: 60]")
                    .index(2)
                    .value_parser(parse_positive),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Configuration file")
                    .long_help(
                        "Configuration file\n\
                         JSON, YAML or TOML, according to the extension.\n\
                         Other arguments override the values in the file.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("BOUNDARY")
                    .help("How neighbors outside the grid are treated")
                    .long_help(
                        "How neighbors outside the grid are treated\n\
                         \"dead\" means they are always dead.\n\
                         \"torus\" means the grid wraps around at the edges.\n",
                    )
                    .short('b')
                    .long("boundary")
                    .value_parser(["dead", "torus", "d", "t"]),
            )
            .arg(
                Arg::new("TOGGLE")
                    .help("Toggles the cell at X,Y before running")
                    .long_help(
                        "Toggles the cell at X,Y before running\n\
                         Can be given multiple times. Cells outside the grid are ignored.\n",
                    )
                    .short('t')
                    .long("toggle")
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true)
                    .value_parser(parse_coord),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to run")
                    .short('g')
                    .long("generations")
                    .default_value("1")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("VERBOSE")
                    .help("Shows more logs; repeat for even more")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count),
            )
    }

    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let matches = Self::command().try_get_matches()?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => load_config(path).map_err(invalid)?,
            None => Config::default(),
        };
        if let Some(&width) = matches.get_one::<usize>("X") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<usize>("Y") {
            config.height = height;
        }
        if let Some(boundary) = matches.get_one::<String>("BOUNDARY") {
            config.boundary = boundary.parse::<Boundary>().map_err(invalid)?;
        }

        let toggle = matches
            .get_many::<Coord>("TOGGLE")
            .map(|cells| cells.copied().collect())
            .unwrap_or_default();
        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(1);
        let verbose = matches.get_count("VERBOSE");

        Ok(Args {
            config,
            toggle,
            generations,
            verbose,
        })
    }

    /// The log level chosen by the number of `-v` flags.
    pub(crate) fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// An error for a value that parses but cannot be used.
pub(crate) fn invalid<E: Display>(e: E) -> Error {
    Args::command().error(ErrorKind::InvalidValue, e)
}
