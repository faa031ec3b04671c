//! blockgen CLI — generates the ArrayFire block factory and execution tests.
//!
//! Reads the block catalogue (the bundled `Blocks.yaml` unless `--spec` is
//! given) and writes `Factory.cpp` and `BlockExecutionTestAuto.cpp` into the
//! output directory. All the work happens in [`blockgen_core`].

mod commands;
mod output;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blockgen",
    about = "Generate the ArrayFire block factory and block execution tests",
    version
)]
struct Cli {
    /// Directory to write the generated sources to (must already exist)
    output_dir: PathBuf,

    /// Block specification to use instead of the bundled Blocks.yaml
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Still write the other file when one fails to render (exit status stays non-zero)
    #[arg(long)]
    keep_going: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::generate::run(&cli.output_dir, cli.spec.as_deref(), cli.keep_going)
}
