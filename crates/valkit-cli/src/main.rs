//! valkit - value range, dimensionality and color checks
//!
//! Command-line front end for valkit-core and valkit-color.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use valkit_core::ElementType;

mod commands;

#[derive(Parser)]
#[command(name = "valkit")]
#[command(author, version, about = "Value range, dimensionality and color checks")]
#[command(long_about = "
Validate numeric ranges, inspect nesting depth and convert colors.

Examples:
  valkit color red                      # hex, rgb, rgba and bgra views
  valkit color 255,128,0 -a 0.5         # 8-bit tuple with alpha
  valkit color primary -p brand.yaml    # resolve through a palette
  valkit range 300 -k 8bit              # false
  valkit scale 0.5 --to 8bit            # 127
  valkit dims '[[1, 2], [3, 4]]'        # 2
  valkit typed '[1.0, 2.5]' -t float    # true
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a color and print its RGB, RGBA and BGRA forms
    #[command(visible_alias = "c")]
    Color(ColorArgs),

    /// Check whether a value lies in a numeric range
    #[command(visible_alias = "r")]
    Range(RangeArgs),

    /// Scale a value between unit range and 8 bits
    #[command(visible_alias = "s")]
    Scale(ScaleArgs),

    /// Print the nesting depth of a JSON value
    #[command(visible_alias = "d")]
    Dims(DimsArgs),

    /// Check that every element of a JSON array has the given type
    #[command(visible_alias = "t")]
    Typed(TypedArgs),
}

#[derive(Args)]
struct ColorArgs {
    /// Color name, hex string, or comma-separated channels (255,0,0 or 1.0,0,0)
    spec: String,

    /// Alpha for the RGBA and BGRA forms (0-1)
    #[arg(short, long, default_value = "1.0")]
    alpha: f64,

    /// YAML palette with additional color names
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Numeric range to check against.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum RangeKind {
    /// 0 to 1
    Unit,
    /// 0 to 255
    #[value(name = "8bit")]
    Bits8,
    /// 0 to 65535
    #[value(name = "16bit")]
    Bits16,
}

#[derive(Args)]
struct RangeArgs {
    /// Value to check (JSON literal; anything else is treated as a string)
    value: String,

    /// Range: unit, 8bit, 16bit
    #[arg(short, long, value_enum, default_value = "unit")]
    kind: RangeKind,
}

/// Scaling direction.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScaleTarget {
    /// Unit range to 8 bits: floor(v * 255)
    #[value(name = "8bit")]
    Bits8,
    /// 8 bits to unit range: v / 255
    Unit,
}

#[derive(Args)]
struct ScaleArgs {
    /// Value to scale
    value: String,

    /// Target range: 8bit, unit
    #[arg(short, long, value_enum)]
    to: ScaleTarget,
}

#[derive(Args)]
struct DimsArgs {
    /// JSON value, e.g. '[[1, 2], [3, 4]]'
    json: String,
}

#[derive(Args)]
struct TypedArgs {
    /// JSON array, e.g. '[1, 2, 3]'
    json: String,

    /// Element type: int, float, str, bool, list
    #[arg(short = 't', long = "type")]
    element_type: ElementType,
}

/// Installs the tracing subscriber. `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Color(args) => commands::color::run(args, cli.verbose),
        Commands::Range(args) => commands::range::run_range(args, cli.verbose),
        Commands::Scale(args) => commands::range::run_scale(args, cli.verbose),
        Commands::Dims(args) => commands::inspect::run_dims(args, cli.verbose),
        Commands::Typed(args) => commands::inspect::run_typed(args, cli.verbose),
    }
}
