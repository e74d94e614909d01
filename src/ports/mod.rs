// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::model::*;
use crate::error::SplitResult;

/// Port for opening and releasing source media
pub trait ProbePort: Send + Sync {
    /// Open the source and report its duration.
    ///
    /// Fails with an input error when the file is missing, cannot be parsed,
    /// has no video stream or reports no usable duration.
    fn open(&self, path: &Path) -> SplitResult<SourceHandle>;

    /// Release a source returned by [`ProbePort::open`]
    fn close(&self, source: SourceHandle) {
        debug!(path = %source.path.display(), "Closed source");
    }

    /// Short backend name for diagnostics
    fn backend_name(&self) -> &'static str;
}

/// Port for materializing one sub-clip
pub trait ExecutePort: Send + Sync {
    /// Extract `range` from `source` and persist it at `output`.
    ///
    /// Log lines produced by the media tool are forwarded to `sink`.
    fn write_subclip(
        &self,
        source: &SourceHandle,
        range: &ClipRange,
        output: &Path,
        profile: &EncodingProfile,
        sink: &dyn EventSink,
    ) -> SplitResult<()>;
}

/// Events surfaced by a running split
#[derive(Debug, Clone, PartialEq)]
pub enum SplitEvent {
    /// Source opened and ranges planned
    Started {
        source: PathBuf,
        source_duration: f64,
        total: u32,
    },
    /// A line from the media service or the partitioner
    Log {
        level: tracing::Level,
        message: String,
    },
    /// About to write a clip
    ClipStarted { range: ClipRange, path: PathBuf },
    /// A clip was persisted
    ClipWritten {
        range: ClipRange,
        path: PathBuf,
        progress: ProgressState,
    },
}

impl SplitEvent {
    pub fn info(message: impl Into<String>) -> Self {
        SplitEvent::Log {
            level: tracing::Level::INFO,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        SplitEvent::Log {
            level: tracing::Level::WARN,
            message: message.into(),
        }
    }
}

/// Subscriber for split events
pub trait EventSink {
    fn emit(&self, event: SplitEvent);
}

impl<F> EventSink for F
where
    F: Fn(SplitEvent),
{
    fn emit(&self, event: SplitEvent) {
        self(event)
    }
}
