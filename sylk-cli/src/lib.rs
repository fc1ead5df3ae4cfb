//! Sylk CLI library
//!
//! This library provides the command-line interface for the sylk
//! syllabification system.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};

use commands::{Commands, ListCommands};

/// Execute a parsed CLI command
pub fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Syllabify(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Formats => {
                println!("text    one syllabified word per line");
                println!("json    array of word records with full syllable structure");
                Ok(())
            }
        },
    }
}
