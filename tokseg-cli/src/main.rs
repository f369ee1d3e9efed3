//! tokseg command-line entry point

use clap::Parser;
use tokseg_cli::commands::Commands;
use tokseg_cli::CliResult;

/// Sentence segmentation over tokenizer output
#[derive(Debug, Parser)]
#[command(name = "tokseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
