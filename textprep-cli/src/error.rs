//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// No input file matched any pattern
    NoInputFiles,
    /// Options file could not be used
    ConfigError(String),
    /// A line of an input file could not be transformed
    ProcessingError {
        /// Input file
        file: String,
        /// Underlying pipeline error
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoInputFiles => write!(f, "No files found matching the provided patterns"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError { file, message } => {
                write!(f, "Processing error in {file}: {message}")
            }
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
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_no_input_files_display() {
        assert_eq!(
            CliError::NoInputFiles.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `lowercase`".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown field `lowercase`"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError {
            file: "notes.txt".to_string(),
            message: "step 'stemming' failed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Processing error in notes.txt: step 'stemming' failed"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let failure: CliResult<()> = Err(CliError::NoInputFiles.into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInputFiles)
        ));
    }
}
