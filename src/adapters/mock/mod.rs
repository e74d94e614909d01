//! In-memory media service for tests and dry runs
//!
//! `MockProbeAdapter` reports a fixed duration for any existing file.
//! `MockExecAdapter` writes a small placeholder file per clip and can be told
//! to fail at a given clip index.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::model::*;
use crate::error::{SplitError, SplitResult};
use crate::ports::{EventSink, ExecutePort, ProbePort, SplitEvent};

/// Probe adapter returning a canned duration
#[derive(Clone)]
pub struct MockProbeAdapter {
    duration_secs: f64,
    closed: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockProbeAdapter {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            closed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sources released through [`ProbePort::close`]
    pub fn closed(&self) -> Vec<PathBuf> {
        self.closed.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ProbePort for MockProbeAdapter {
    fn open(&self, path: &Path) -> SplitResult<SourceHandle> {
        if !path.is_file() {
            return Err(SplitError::InputFileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(SourceHandle::new(path, self.duration_secs, "mock"))
    }

    fn close(&self, source: SourceHandle) {
        if let Ok(mut closed) = self.closed.lock() {
            closed.push(source.path);
        }
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

/// Execution adapter writing placeholder clip files
#[derive(Clone, Default)]
pub struct MockExecAdapter {
    fail_at: Option<u32>,
    written: Arc<Mutex<Vec<(ClipRange, PathBuf)>>>,
}

impl MockExecAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the write for the clip with this index
    pub fn failing_at(index: u32) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// Ranges written so far, in call order
    pub fn written(&self) -> Vec<(ClipRange, PathBuf)> {
        self.written.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl ExecutePort for MockExecAdapter {
    fn write_subclip(
        &self,
        source: &SourceHandle,
        range: &ClipRange,
        output: &Path,
        profile: &EncodingProfile,
        sink: &dyn EventSink,
    ) -> SplitResult<()> {
        sink.emit(SplitEvent::info(format!(
            "mock: encoding {} with {}",
            output.display(),
            profile.video_codec
        )));

        if self.fail_at == Some(range.index) {
            return Err(SplitError::ClipWrite {
                index: range.index,
                path: output.to_path_buf(),
                message: "simulated write failure".to_string(),
            });
        }

        let body = format!(
            "{} {:.3}-{:.3}\n",
            source.path.display(),
            range.start,
            range.end
        );
        std::fs::write(output, body).map_err(|e| SplitError::ClipWrite {
            index: range.index,
            path: output.to_path_buf(),
            message: e.to_string(),
        })?;

        if let Ok(mut written) = self.written.lock() {
            written.push((*range, output.to_path_buf()));
        }
        Ok(())
    }
}
