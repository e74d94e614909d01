//! FFprobe adapter for source probing
//!
//! Runs the `ffprobe` binary and reads its JSON report. Used when the crate
//! is built without libav or when configured explicitly.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::model::SourceHandle;
use crate::error::{SplitError, SplitResult};
use crate::ports::ProbePort;

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    format: ProbeFormat,
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    format_name: String,
    /// ffprobe prints numbers as strings
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
}

/// FFprobe-based probe adapter
pub struct FfprobeAdapter {
    binary: PathBuf,
}

impl FfprobeAdapter {
    /// Create new FFprobe adapter using the given executable
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Turn an ffprobe JSON report into a source handle
    pub fn parse_report(path: &Path, json: &str) -> SplitResult<SourceHandle> {
        let open_error = |message: String| SplitError::SourceOpen {
            path: path.to_path_buf(),
            message,
        };

        let report: ProbeOutput = serde_json::from_str(json)
            .map_err(|e| open_error(format!("Unreadable ffprobe output: {}", e)))?;

        let has_video = report
            .streams
            .iter()
            .any(|s| s.codec_type.as_deref() == Some("video"));
        if !has_video {
            return Err(open_error("No video stream found".to_string()));
        }

        let duration_secs = report
            .format
            .duration
            .as_deref()
            .and_then(|d| d.trim().parse::<f64>().ok())
            .filter(|d| d.is_finite() && *d > 0.0)
            .ok_or_else(|| open_error("Container does not report a duration".to_string()))?;

        Ok(SourceHandle::new(
            path,
            duration_secs,
            report.format.format_name,
        ))
    }
}

impl Default for FfprobeAdapter {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl ProbePort for FfprobeAdapter {
    fn open(&self, path: &Path) -> SplitResult<SourceHandle> {
        if !path.is_file() {
            return Err(SplitError::InputFileNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(binary = %self.binary.display(), path = %path.display(), "Running ffprobe");
        let output = Command::new(&self.binary)
            .args(["-v", "error", "-print_format", "json", "-show_format", "-show_streams"])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SplitError::MediaTool {
                message: format!("Failed to run {}: {}", self.binary.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SplitError::SourceOpen {
                path: path.to_path_buf(),
                message: format!("ffprobe failed ({}): {}", output.status, stderr.trim()),
            });
        }

        let source = Self::parse_report(path, &String::from_utf8_lossy(&output.stdout))?;
        info!(
            path = %path.display(),
            duration = source.duration_secs,
            "Opened source"
        );
        Ok(source)
    }

    fn backend_name(&self) -> &'static str {
        "ffprobe"
    }
}
