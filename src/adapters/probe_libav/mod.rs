// Probe LibAV adapter - Source inspection through the libav bindings

use std::path::Path;

use tracing::{debug, info};

use crate::domain::model::SourceHandle;
use crate::error::{SplitError, SplitResult};
use crate::ports::ProbePort;

/// LibAV-based source probing adapter
pub struct LibavProbeAdapter;

impl LibavProbeAdapter {
    /// Create new LibAV probing adapter
    pub fn new() -> SplitResult<Self> {
        ffmpeg_next::init().map_err(|e| SplitError::MediaTool {
            message: format!("Failed to initialize FFmpeg: {}", e),
        })?;

        // Keep libav's own console chatter out of the terminal
        ffmpeg_next::util::log::set_level(ffmpeg_next::util::log::Level::Error);
        Ok(Self)
    }

    fn open_error(path: &Path, message: impl Into<String>) -> SplitError {
        SplitError::SourceOpen {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl ProbePort for LibavProbeAdapter {
    fn open(&self, path: &Path) -> SplitResult<SourceHandle> {
        if !path.is_file() {
            return Err(SplitError::InputFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let input_ctx = ffmpeg_next::format::input(path)
            .map_err(|e| Self::open_error(path, format!("Unsupported or corrupt media: {}", e)))?;

        if input_ctx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .is_none()
        {
            return Err(Self::open_error(path, "No video stream found"));
        }

        let raw_duration = input_ctx.duration();
        if raw_duration <= 0 {
            return Err(Self::open_error(path, "Container does not report a duration"));
        }
        let duration_secs = raw_duration as f64 / ffmpeg_next::ffi::AV_TIME_BASE as f64;
        let container = input_ctx.format().name().to_string();

        debug!(
            streams = input_ctx.streams().count(),
            container = %container,
            "Probed source with libav"
        );
        info!(
            path = %path.display(),
            duration = duration_secs,
            "Opened source"
        );

        Ok(SourceHandle::new(path, duration_secs, container))
    }

    fn backend_name(&self) -> &'static str {
        "libav"
    }
}
