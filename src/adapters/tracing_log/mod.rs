// Tracing log adapter - Mirrors split events into structured logs

use tracing::{debug, info, warn};

use crate::ports::{EventSink, SplitEvent};

/// Event sink that records every split event through `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    /// Log media tool output at info instead of debug
    verbose_media: bool,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose_media(mut self, verbose: bool) -> Self {
        self.verbose_media = verbose;
        self
    }
}

impl EventSink for TracingSink {
    fn emit(&self, event: SplitEvent) {
        match event {
            SplitEvent::Started {
                source,
                source_duration,
                total,
            } => {
                info!(source = %source.display(), source_duration, total, "Split started");
            }
            SplitEvent::Log { level, message } => {
                if level == tracing::Level::WARN || level == tracing::Level::ERROR {
                    warn!(target: "media", "{}", message);
                } else if self.verbose_media {
                    info!(target: "media", "{}", message);
                } else {
                    debug!(target: "media", "{}", message);
                }
            }
            SplitEvent::ClipStarted { range, path } => {
                debug!(index = range.index, start = range.start, end = range.end, path = %path.display(), "Writing clip");
            }
            SplitEvent::ClipWritten {
                path, progress, ..
            } => {
                info!(
                    path = %path.display(),
                    completed = progress.completed(),
                    total = progress.total(),
                    "Clip written"
                );
            }
        }
    }
}
