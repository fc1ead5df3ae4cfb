//! CLI command implementations

use clap::Subcommand;

pub mod syllabify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Syllabify phonemic transcriptions
    Syllabify(syllabify::SyllabifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let syllabify_cmd = Commands::Syllabify(syllabify::SyllabifyArgs {
            words: vec!["k_ˈæ_n_j_ə_n".to_string()],
            input: None,
            separator: "_".to_string(),
            format: syllabify::OutputFormat::Text,
            destress: false,
            no_alaska_rule: false,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", syllabify_cmd);
        assert!(debug_str.contains("Syllabify"));
        assert!(debug_str.contains("k_ˈæ_n_j_ə_n"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
