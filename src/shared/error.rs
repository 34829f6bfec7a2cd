use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all requested artifacts were generated
    Success = 0,
    /// A manifest field failed validation
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (manifest I/O error, parse error, write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for MetaInfo generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum MetainfoError {
    #[error("Component manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse component manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is valid TOML or JSON")]
    ManifestParseError { path: PathBuf, details: String },

    /// A required manifest field was left empty
    #[error("No value set for {field}!")]
    MissingField { field: String },

    /// A manifest field value was rejected by a validator
    #[error("Value for {field} is invalid!")]
    InvalidField { field: String },

    /// Neither a simple nor a complex project license was given
    #[error("No project license has been selected.")]
    MissingProjectLicense,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}

impl MetainfoError {
    /// Whether this error is a field-validation failure (exit code 1)
    /// rather than a general application error (exit code 3).
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            MetainfoError::MissingField { .. }
                | MetainfoError::InvalidField { .. }
                | MetainfoError::MissingProjectLicense
        )
    }
}
