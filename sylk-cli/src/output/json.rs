//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use sylk_core::{pretty, Syllable};

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// The transcription as supplied
    pub word: String,
    /// Display rendering of the syllabification
    pub pretty: String,
    /// Full onset/nucleus/coda structure
    pub syllables: Vec<Syllable>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            words: Vec::new(),
        }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()> {
        self.words.push(WordData {
            word: word.to_string(),
            pretty: pretty(syllables),
            syllables: syllables.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
