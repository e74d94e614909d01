// Domain models - Core types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::rules::parse_clip_duration;
use crate::error::{SplitError, SplitResult};
use crate::utils::path::clip_output_path;
use crate::utils::time::format_seconds;

/// One split request as collected by a presentation shell
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRequest {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    /// Whole seconds per clip, always positive
    pub clip_duration: u32,
}

impl ClipRequest {
    /// Create a request from already-typed values
    pub fn new(
        source_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        clip_duration: u32,
    ) -> SplitResult<Self> {
        if clip_duration == 0 {
            return Err(SplitError::InvalidDuration {
                value: clip_duration.to_string(),
            });
        }
        Ok(Self {
            source_path: source_path.into(),
            output_dir: output_dir.into(),
            clip_duration,
        })
    }

    /// Create a request from raw form fields.
    ///
    /// The duration is parsed before anything else so that a bad value fails
    /// without touching the file system.
    pub fn from_fields(source_path: &str, output_dir: &str, duration: &str) -> SplitResult<Self> {
        let clip_duration = parse_clip_duration(duration)?;
        Self::new(source_path.trim(), output_dir.trim(), clip_duration)
    }

    /// Output path for the clip with the given index
    pub fn clip_path(&self, index: u32) -> PathBuf {
        clip_output_path(&self.output_dir, index)
    }
}

/// A contiguous time range of the source, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRange {
    pub index: u32,
    pub start: f64,
    pub end: f64,
}

impl ClipRange {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True for the zero-length tail produced by an exact multiple
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for ClipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} [{} - {}]",
            self.index,
            format_seconds(self.start),
            format_seconds(self.end)
        )
    }
}

/// Completed/total clip counter for one split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    completed: u32,
    total: u32,
}

impl ProgressState {
    pub fn new(total: u32) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Record one finished clip and return the new completed count.
    /// Saturates at `total`.
    pub fn advance(&mut self) -> u32 {
        if self.completed < self.total {
            self.completed += 1;
        }
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    /// Fraction in `0.0..=1.0`, zero when nothing is planned
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

impl fmt::Display for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// What to do with the zero-length range left when the source duration is
/// an exact multiple of the clip duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TailPolicy {
    /// Emit `[d, d]` as a final clip
    #[serde(rename = "preserve")]
    Preserve,
    /// Skip the trailing zero-length range
    #[default]
    #[serde(rename = "drop")]
    DropEmpty,
}

impl FromStr for TailPolicy {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preserve" | "keep" => Ok(TailPolicy::Preserve),
            "drop" | "drop-empty" => Ok(TailPolicy::DropEmpty),
            other => Err(SplitError::Config {
                message: format!(
                    "Invalid zero-length tail policy: {}. Valid values: preserve, drop",
                    other
                ),
            }),
        }
    }
}

/// An opened source as reported by the media service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceHandle {
    pub path: PathBuf,
    pub duration_secs: f64,
    /// Container format name, e.g. "mov,mp4,m4a,3gp,3g2,mj2"
    pub container: String,
}

impl SourceHandle {
    pub fn new(path: impl Into<PathBuf>, duration_secs: f64, container: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            duration_secs,
            container: container.into(),
        }
    }
}

/// Encoding settings applied to every clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingProfile {
    pub video_codec: String,
    pub audio_codec: String,
    pub preset: String,
    /// Constant Rate Factor (0-51)
    pub crf: u8,
    pub threads: usize,
}

impl Default for EncodingProfile {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            preset: "medium".to_string(),
            crf: 23,
            threads: default_thread_count(),
        }
    }
}

impl EncodingProfile {
    pub fn validate(&self) -> SplitResult<()> {
        if self.video_codec.trim().is_empty() {
            return Err(SplitError::Config {
                message: "Video codec cannot be empty".to_string(),
            });
        }
        if self.audio_codec.trim().is_empty() {
            return Err(SplitError::Config {
                message: "Audio codec cannot be empty".to_string(),
            });
        }
        if self.crf > 51 {
            return Err(SplitError::Config {
                message: format!("CRF value {} is invalid (must be 0-51)", self.crf),
            });
        }
        if self.threads == 0 {
            return Err(SplitError::Config {
                message: "Thread count must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// 75% of the CPU cores, between 1 and 16
fn default_thread_count() -> usize {
    let cpu_count = num_cpus::get();
    let optimal_threads = (cpu_count as f64 * 0.75).ceil() as usize;
    optimal_threads.clamp(1, 16)
}

/// Summary of a finished split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub clip_duration: u32,
    pub source_duration: f64,
    pub clips: Vec<PathBuf>,
}

impl SplitReport {
    pub fn new(request: &ClipRequest, source: &SourceHandle) -> Self {
        Self {
            source: source.path.clone(),
            output_dir: request.output_dir.clone(),
            clip_duration: request.clip_duration,
            source_duration: source.duration_secs,
            clips: Vec::new(),
        }
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.clips.iter().any(|p| p == path)
    }
}

#[cfg(test)]
mod tests;
