//! Syllabify command implementation

use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use sylk_core::{destress, Syllabifier, SyllabifierConfig};

/// Arguments for the syllabify command
#[derive(Debug, Args)]
pub struct SyllabifyArgs {
    /// Transcriptions to syllabify, one word each (eSpeak --ipa=3 style,
    /// e.g. "ɐ_l_ˈæ_s_k_ə"); reads stdin lines when no word is given
    #[arg(value_name = "TRANSCRIPTION")]
    pub words: Vec<String>,

    /// Read transcriptions from a file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Separator between phonemes within a transcription
    #[arg(short, long, default_value = "_", value_name = "SEP")]
    pub separator: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Remove stress markers from nuclei before output
    #[arg(short, long)]
    pub destress: bool,

    /// Split medial clusters by onset maximization alone, without the
    /// stress-sensitive ambiguous-"s" rule
    #[arg(long)]
    pub no_alaska_rule: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One syllabified word per line
    Text,
    /// JSON array of word records with full syllable structure
    Json,
}

impl SyllabifyArgs {
    /// Execute the syllabify command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting syllabification");
        log::debug!("Arguments: {:?}", self);

        if self.separator.is_empty() {
            return Err(CliError::InvalidSeparator("must not be empty".to_string()).into());
        }

        let words = self.collect_words()?;
        if words.is_empty() {
            return Err(CliError::NoInput.into());
        }
        log::info!("Syllabifying {} word(s)", words.len());

        let config = SyllabifierConfig {
            alaska_rule: !self.no_alaska_rule,
        };
        let syllabifier = Syllabifier::with_config(config);

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::stdout()),
        };

        for word in &words {
            let pron: Vec<&str> = word
                .split(self.separator.as_str())
                .filter(|seg| !seg.is_empty())
                .collect();

            let mut syllables = syllabifier
                .syllabify(&pron)
                .with_context(|| format!("failed to syllabify {word:?}"))?;
            if self.destress {
                syllables = destress(&syllables);
            }
            formatter.format_word(word, &syllables)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Gather transcriptions from arguments, then an input file, then stdin
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if let Some(path) = &self.input {
            let content = fs::read_to_string(path)
                .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
            words.extend(non_empty_lines(&content));
        }

        // Fall back to piped stdin only when nothing else was supplied
        if words.is_empty() && !io::stdin().is_terminal() {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    words.push(trimmed.to_string());
                }
            }
        }

        Ok(words)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

fn non_empty_lines(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_lines_skips_blanks() {
        let lines: Vec<String> = non_empty_lines("a_b\n\n  \nc_d\n").collect();
        assert_eq!(lines, vec!["a_b".to_string(), "c_d".to_string()]);
    }

    #[test]
    fn test_non_empty_lines_trims() {
        let lines: Vec<String> = non_empty_lines("  ɐ_l_ˈæ_s_k_ə  \n").collect();
        assert_eq!(lines, vec!["ɐ_l_ˈæ_s_k_ə".to_string()]);
    }
}
