// Domain rules - Request validation policies

use std::path::Path;

use crate::domain::model::ClipRequest;
use crate::error::{SplitError, SplitResult};

/// Parse the clip duration field as a positive whole number of seconds
pub fn parse_clip_duration(value: &str) -> SplitResult<u32> {
    match value.trim().parse::<u32>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(SplitError::InvalidDuration {
            value: value.to_string(),
        }),
    }
}

/// File system checks run before the source is opened
pub struct RequestValidator;

impl RequestValidator {
    /// Check that the source is a file and the output location is a directory.
    ///
    /// Writability is not checked here: an existing but read-only directory
    /// surfaces as a write failure on the first clip.
    pub fn validate(request: &ClipRequest) -> SplitResult<()> {
        Self::validate_source(&request.source_path)?;
        Self::validate_output_dir(&request.output_dir)?;
        Ok(())
    }

    pub fn validate_source(path: &Path) -> SplitResult<()> {
        if path.as_os_str().is_empty() || !path.is_file() {
            return Err(SplitError::InputFileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn validate_output_dir(path: &Path) -> SplitResult<()> {
        if path.as_os_str().is_empty() || !path.is_dir() {
            return Err(SplitError::OutputDirNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }
}
