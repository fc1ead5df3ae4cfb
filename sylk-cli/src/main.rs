//! Command-line entry point for sylk

use clap::Parser;
use sylk_cli::commands::Commands;

/// Rule-based syllabification of IPA phoneme transcriptions
#[derive(Debug, Parser)]
#[command(name = "sylk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = sylk_cli::run(cli.command) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
