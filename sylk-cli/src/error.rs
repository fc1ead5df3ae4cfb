//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or inaccessible
    FileNotFound(String),
    /// Invalid phoneme separator
    InvalidSeparator(String),
    /// No transcriptions supplied via arguments, file, or stdin
    NoInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidSeparator(msg) => write!(f, "Invalid phoneme separator: {msg}"),
            CliError::NoInput => write!(f, "No transcriptions to syllabify"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.txt".to_string());
        assert_eq!(error.to_string(), "File not found: words.txt");
    }

    #[test]
    fn test_invalid_separator_error_display() {
        let error = CliError::InvalidSeparator("must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid phoneme separator: must not be empty"
        );
    }

    #[test]
    fn test_no_input_error_display() {
        assert_eq!(
            CliError::NoInput.to_string(),
            "No transcriptions to syllabify"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::NoInput;
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("NoInput"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<u32> = Ok(7);
        assert!(success.is_ok());

        let failure: CliResult<u32> = Err(anyhow::anyhow!("test error"));
        assert!(failure.is_err());
    }
}
