//! Core error types

use thiserror::Error;

/// Errors produced by the syllabifier core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyllabifyError {
    /// The flattened output no longer matches the input word. Signals a
    /// boundary-resolution fault, not malformed input; carries both
    /// sequences for diagnosis.
    #[error("could not syllabify {input:?}, got {reconstructed:?}")]
    Integrity {
        /// The phoneme sequence that was passed in
        input: Vec<String>,
        /// The sequence recovered by flattening the produced syllables
        reconstructed: Vec<String>,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, SyllabifyError>;
