//! Error handling module for the clip splitter

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for split operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Clip duration field is not a positive whole number
    #[error("Invalid clip duration: '{value}'. Expected a positive whole number of seconds")]
    InvalidDuration { value: String },

    /// Input file not found or not a regular file
    #[error("Input file not found: {}", path.display())]
    InputFileNotFound { path: PathBuf },

    /// Output directory missing or not a directory
    #[error("Output directory not found: {}", path.display())]
    OutputDirNotFound { path: PathBuf },

    /// Source could not be opened by the media service
    #[error("Failed to open source {}: {message}", path.display())]
    SourceOpen { path: PathBuf, message: String },

    /// Source reported a duration that cannot be partitioned
    #[error("Source duration is not a positive number of seconds: {duration}")]
    InvalidSourceDuration { duration: f64 },

    /// Configuration value could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A clip could not be written
    #[error("Failed to write clip {index} to {}: {message}", path.display())]
    ClipWrite {
        index: u32,
        path: PathBuf,
        message: String,
    },

    /// Media tool missing or crashed before producing output
    #[error("Media tool error: {message}")]
    MediaTool { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two failure classes surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing file, bad directory, non-numeric duration, bad settings
    Input,
    /// Failure reading the source or writing a clip
    Io,
}

impl SplitError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::InvalidDuration { .. }
            | SplitError::InputFileNotFound { .. }
            | SplitError::OutputDirNotFound { .. }
            | SplitError::SourceOpen { .. }
            | SplitError::InvalidSourceDuration { .. }
            | SplitError::Config { .. } => ErrorKind::Input,
            SplitError::ClipWrite { .. } | SplitError::MediaTool { .. } | SplitError::Io(_) => {
                ErrorKind::Io
            }
        }
    }

    pub fn is_input(&self) -> bool {
        self.kind() == ErrorKind::Input
    }
}

/// Result type alias for split operations
pub type SplitResult<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = SplitError::InvalidDuration {
            value: "abc".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Input);
        assert!(err.is_input());

        let err = SplitError::ClipWrite {
            index: 2,
            path: PathBuf::from("/out/clip2.mp4"),
            message: "Permission denied".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Io);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(SplitError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_error_messages() {
        let err = SplitError::InvalidDuration {
            value: "six".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid clip duration: 'six'. Expected a positive whole number of seconds"
        );

        let err = SplitError::ClipWrite {
            index: 0,
            path: PathBuf::from("out/clip0.mp4"),
            message: "exit status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write clip 0 to out/clip0.mp4: exit status 1"
        );
    }
}
