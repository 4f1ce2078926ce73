use anyhow::Result;
use clap::Parser;
use tscan_cli::commands::Commands;

/// Readability analysis for annotated Dutch text
#[derive(Debug, Parser)]
#[command(name = "tscan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
