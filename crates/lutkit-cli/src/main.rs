//! lutkit - apply and convert 3D color lookup tables

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "lutkit")]
#[command(author, version, about = "Apply and convert 3D color LUTs")]
#[command(long_about = "
Applies 3D color lookup tables (LUTs) to raster images and converts
between LUT encodings.

Examples:
  lutkit apply photo.png --lut sepia.cube --out graded.png
  lutkit apply photo.jpg --lut film.png --out graded.jpg --intensity 0.5
  lutkit apply photo.png --lut film.png --out graded.png --interp none
  lutkit apply photo.png --lut film.png --out graded.png --direct
  lutkit convert film.png --out film.cube --title \"Film Look\"
  lutkit convert grade.cube --out grade.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Adjust image colour according to a LUT
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Convert a LUT file to a different encoding
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

#[derive(Args)]
struct ApplyArgs {
    /// Source image (.png, .jpg)
    input: PathBuf,

    /// Path to LUT (.cube, .png, .jpg)
    #[arg(long)]
    lut: PathBuf,

    /// Path to write output
    #[arg(short = 'o', long = "out")]
    out: PathBuf,

    /// Intensity of the applied effect (0..=1)
    #[arg(long, default_value_t = 1.0)]
    intensity: f32,

    /// Interpolation: none, tri, tetra
    #[arg(long, default_value = "tri")]
    interp: String,

    /// Sample a Hald LUT image directly instead of building a cube
    #[arg(long)]
    direct: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source LUT (.cube, .png, .jpg)
    input: PathBuf,

    /// Path to write the converted LUT
    #[arg(short = 'o', long = "out")]
    out: PathBuf,

    /// Title for .cube output
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
    }
}
