//! Output formatting module

use anyhow::Result;
use sylk_core::Syllable;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output one syllabified word
    fn format_word(&mut self, word: &str, syllables: &[Syllable]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
