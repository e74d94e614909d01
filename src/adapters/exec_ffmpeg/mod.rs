//! FFmpeg execution adapter
//!
//! Materializes each sub-clip by running the `ffmpeg` binary with the
//! configured encoding profile. Every line ffmpeg writes to stderr is
//! forwarded to the event sink.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::domain::model::*;
use crate::error::{SplitError, SplitResult};
use crate::ports::{EventSink, ExecutePort, SplitEvent};
use crate::utils::time::ffmpeg_seconds;

/// Number of trailing stderr lines quoted in a failure message
const ERROR_TAIL_LINES: usize = 5;

/// FFmpeg-based execution adapter
pub struct FfmpegExecAdapter {
    binary: PathBuf,
}

impl FfmpegExecAdapter {
    /// Create new FFmpeg adapter using the given executable
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Command-line arguments for one sub-clip
    pub fn build_args(
        source: &SourceHandle,
        range: &ClipRange,
        output: &Path,
        profile: &EncodingProfile,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-hide_banner",
            "-nostdin",
            "-nostats",
            "-loglevel",
            "info",
            "-y",
            "-ss",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(ffmpeg_seconds(range.start).into());
        args.push("-i".into());
        args.push(source.path.as_os_str().to_os_string());

        let encode = [
            "-t".to_string(),
            ffmpeg_seconds(range.duration()),
            "-c:v".to_string(),
            profile.video_codec.clone(),
            "-preset".to_string(),
            profile.preset.clone(),
            "-crf".to_string(),
            profile.crf.to_string(),
            "-c:a".to_string(),
            profile.audio_codec.clone(),
            "-threads".to_string(),
            profile.threads.to_string(),
            "-movflags".to_string(),
            "+faststart".to_string(),
            "-f".to_string(),
            "mp4".to_string(),
        ];
        args.extend(encode.into_iter().map(OsString::from));
        args.push(output.as_os_str().to_os_string());
        args
    }

    fn write_error(range: &ClipRange, output: &Path, message: String) -> SplitError {
        SplitError::ClipWrite {
            index: range.index,
            path: output.to_path_buf(),
            message,
        }
    }
}

impl Default for FfmpegExecAdapter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl ExecutePort for FfmpegExecAdapter {
    fn write_subclip(
        &self,
        source: &SourceHandle,
        range: &ClipRange,
        output: &Path,
        profile: &EncodingProfile,
        sink: &dyn EventSink,
    ) -> SplitResult<()> {
        let args = Self::build_args(source, range, output, profile);
        debug!(binary = %self.binary.display(), ?args, "Spawning ffmpeg");

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SplitError::MediaTool {
                        message: format!("ffmpeg not found at {}", self.binary.display()),
                    }
                } else {
                    Self::write_error(range, output, format!("Failed to start ffmpeg: {}", e))
                }
            })?;

        let mut tail: VecDeque<String> = VecDeque::with_capacity(ERROR_TAIL_LINES);
        if let Some(stderr) = child.stderr.take() {
            for line in BufReader::new(stderr).lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Stopped reading ffmpeg output: {}", e);
                        break;
                    }
                };
                let line = line.trim_end();
                if line.is_empty() {
                    continue;
                }
                if tail.len() == ERROR_TAIL_LINES {
                    tail.pop_front();
                }
                tail.push_back(line.to_string());
                sink.emit(SplitEvent::info(line));
            }
        }

        let status = child
            .wait()
            .map_err(|e| Self::write_error(range, output, format!("Failed to wait for ffmpeg: {}", e)))?;

        if !status.success() {
            let detail = tail.into_iter().collect::<Vec<_>>().join(" | ");
            return Err(Self::write_error(
                range,
                output,
                format!("ffmpeg exited with {}: {}", status, detail),
            ));
        }

        Ok(())
    }
}
