use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// clap exits with `InvalidArguments` on its own when a flag or an
/// environment value cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every eligible SBOM was harvested and metadata.json was written
    Success = 0,
    /// Application error (exhausted retries, malformed feed, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments or environment values
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM harvesting.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Failed to fetch {url} after {attempts} attempts.")]
    FetchExhausted { url: String, attempts: u32 },

    #[error("Release feed request failed: {url}\nDetails: {details}\n\n💡 Hint: Check API_URL_BASE and the query parameters (IMAGE_TYPE, VENDOR, HEAP_SIZE, PAGE_SIZE)")]
    FeedRequestFailed { url: String, details: String },

    #[error("Release feed returned unexpected data\nDetails: {details}")]
    MalformedFeed { details: String },

    #[error("Invalid release timestamp: {value:?}\nDetails: {details}")]
    InvalidTimestamp { value: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    InvalidConfig { path: PathBuf, details: String },

    /// Validation error for request values and upstream path components
    #[error("Validation error: {message}")]
    Validation { message: String },
}
