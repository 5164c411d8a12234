use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for the sentiment analysis tool.
///
/// # Why structured errors
///
/// File errors carry the offending path so the shell can report them without
/// parsing strings, and line errors carry the line number so a batch can record
/// them next to the successful results instead of aborting.
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Input file not found: {path:?}")]
    InputFileNotFound { path: PathBuf },

    #[error("Input file unreadable: {path:?}")]
    InputFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output file unwritable: {path:?}")]
    OutputFileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {reason}")]
    LineProcessing { line: usize, reason: String },

    #[error("Model error: {operation} failed")]
    Model {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SentimentError {
    /// Errors that end the current command but never the shell itself.
    pub const fn is_file_error(&self) -> bool {
        matches!(
            self,
            Self::InputFileNotFound { .. }
                | Self::InputFileUnreadable { .. }
                | Self::OutputFileUnwritable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;

/// Fallback for I/O errors raised without a known path.
///
/// Code that knows which file failed should build the specific variant instead.
impl From<std::io::Error> for SentimentError {
    fn from(err: std::io::Error) -> Self {
        Self::InputFileUnreadable {
            path: PathBuf::from("unknown"),
            source: err,
        }
    }
}
