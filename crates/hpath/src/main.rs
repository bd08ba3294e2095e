//! Command‑line entry point for the `hpath` tool.
//!
//! Provides subcommands to map indices to coordinates and back, print the
//! path of a curve, and verify a curve end to end.

use std::{
    fmt::Display,
    io::{self, BufWriter, Write},
    ops::RangeInclusive,
    process,
    str::FromStr,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// CLI command implementations.
mod cmd;

/// Range of curve offsets parsed from `--chunk` as a half-open `START:END`.
///
/// `END` may be `2^64` so that the last cell of a full-width curve can be
/// named.
#[derive(Clone, Copy, Debug)]
struct ChunkOffsets {
    /// Inclusive start offset.
    start: u64,
    /// Inclusive last offset, `END - 1`.
    last: u64,
}

impl ChunkOffsets {
    /// Convert the offsets into an inclusive range.
    fn into_range(self) -> RangeInclusive<u64> {
        self.start..=self.last
    }
}

impl FromStr for ChunkOffsets {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (start, end) = value
            .split_once(':')
            .ok_or_else(|| "chunk must be in START:END form".to_string())?;

        let parse_bound = |label: &str, bound: &str| -> Result<u128, String> {
            bound.trim().parse::<u128>().map_err(|_| {
                format!("invalid {label} offset '{bound}': expected a non-negative integer")
            })
        };

        let start = parse_bound("start", start)?;
        let end = parse_bound("end", end)?;

        if start >= end {
            return Err(format!(
                "chunk start ({start}) must be less than end ({end})"
            ));
        }

        let too_large = |_| format!("chunk end ({end}) must be at most 2^64");
        Ok(Self {
            start: u64::try_from(start).map_err(too_large)?,
            last: u64::try_from(end - 1).map_err(too_large)?,
        })
    }
}

#[derive(Parser)]
#[command(name = "hpath")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Curve shape shared by every subcommand.
#[derive(Args, Clone, Copy, Debug)]
struct CurveArgs {
    #[arg(
        short = 'd',
        long = "dimension",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Number of axes"
    )]
    /// Number of axes.
    dimension: u32,

    #[arg(
        short = 'n',
        long = "order",
        help = "Subdivision levels (grid side is 2^ORDER)"
    )]
    /// Subdivision levels.
    order: u32,
}

#[derive(Subcommand)]
/// Subcommands supported by the `hpath` tool.
enum Commands {
    #[command(about = "Print the coordinate at a path index")]
    /// Map a path index to a coordinate.
    Point {
        /// Curve shape.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(help = "Path index")]
        /// Path index to encode.
        index: u64,
    },

    #[command(about = "Print the path index of a coordinate")]
    /// Map a coordinate to a path index.
    Index {
        /// Curve shape.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(required = true, num_args = 1.., help = "Coordinate components, one per axis")]
        /// Coordinate components.
        coords: Vec<u32>,
    },

    #[command(about = "Print the path as `index: (coordinate)` lines")]
    /// Print the curve in path order.
    Path {
        /// Curve shape.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(
            long = "chunk",
            value_name = "START:END",
            help = "Print only the path segment from START (inclusive) to END (exclusive)"
        )]
        /// Optional start/end offsets (START:END) for the printed segment.
        chunk: Option<ChunkOffsets>,
    },

    #[command(about = "Verify round trip, coverage and adjacency over a whole curve")]
    /// Walk a curve and verify it.
    Check {
        /// Curve shape.
        #[command(flatten)]
        curve: CurveArgs,
    },
}

/// Exit with an error, printing its full context chain, if `result` failed.
fn report<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber; `RUST_LOG` directives refine `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Handle the `point` subcommand.
fn handle_point(curve: CurveArgs, index: u64) -> Result<()> {
    let spec = cmd::curve(curve.dimension, curve.order)?;
    println!("{}", cmd::point(&spec, index)?);
    Ok(())
}

/// Handle the `index` subcommand.
fn handle_index(curve: CurveArgs, coords: &[u32]) -> Result<()> {
    let spec = cmd::curve(curve.dimension, curve.order)?;
    println!("{}", cmd::index(&spec, coords)?);
    Ok(())
}

/// Handle the `path` subcommand.
fn handle_path(curve: CurveArgs, chunk: Option<ChunkOffsets>) -> Result<()> {
    let spec = cmd::curve(curve.dimension, curve.order)?;
    let mut out = BufWriter::new(io::stdout().lock());
    cmd::path(&mut out, &spec, chunk.map(ChunkOffsets::into_range))?;
    out.flush()?;
    Ok(())
}

/// Handle the `check` subcommand.
fn handle_check(curve: CurveArgs) -> Result<()> {
    let spec = cmd::curve(curve.dimension, curve.order)?;
    let summary = cmd::check(&spec)?;
    println!(
        "OK! {}D order {}: {} cells",
        spec.dimension(),
        spec.order(),
        summary.cells
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Point { curve, index } => report(handle_point(curve, index)),
        Commands::Index { curve, coords } => report(handle_index(curve, &coords)),
        Commands::Path { curve, chunk } => report(handle_path(curve, chunk)),
        Commands::Check { curve } => report(handle_check(curve)),
    }
}
