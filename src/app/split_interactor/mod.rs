// Split interactor - Orchestrates the video splitting use case

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::domain::partition::ClipPartition;
use crate::domain::rules::RequestValidator;
use crate::error::SplitResult;
use crate::ports::*;
use crate::utils::path::{clip_file_name, existing_clips};

/// One range of a dry-run plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedClip {
    pub range: ClipRange,
    pub file_name: String,
}

/// Ranges a split would produce, without writing anything
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitPlan {
    pub source: SourceHandle,
    pub clip_duration: u32,
    pub clips: Vec<PlannedClip>,
}

/// Interactor for the split use case
pub struct SplitInteractor {
    probe_port: Arc<dyn ProbePort>,
    execute_port: Arc<dyn ExecutePort>,
    profile: EncodingProfile,
    tail_policy: TailPolicy,
}

impl SplitInteractor {
    /// Create new split interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        profile: EncodingProfile,
        tail_policy: TailPolicy,
    ) -> Self {
        Self {
            probe_port,
            execute_port,
            profile,
            tail_policy,
        }
    }

    pub fn profile(&self) -> &EncodingProfile {
        &self.profile
    }

    pub fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }

    /// Split the source into `clip{N}.mp4` files inside the output directory.
    ///
    /// Ranges are written one at a time on the calling thread. The first
    /// failed write aborts the remaining ranges; clips already written stay
    /// on disk. The source is closed on every path out of this method once
    /// it has been opened.
    pub fn execute(&self, request: &ClipRequest, sink: &dyn EventSink) -> SplitResult<SplitReport> {
        RequestValidator::validate(request)?;

        info!(
            source = %request.source_path.display(),
            output_dir = %request.output_dir.display(),
            clip_duration = request.clip_duration,
            backend = self.probe_port.backend_name(),
            "Starting split"
        );

        let source = self.probe_port.open(&request.source_path)?;
        let result = self.split_open_source(request, &source, sink);
        self.probe_port.close(source);

        if let Err(e) = &result {
            warn!(kind = ?e.kind(), "Split aborted: {}", e);
        }
        result
    }

    fn split_open_source(
        &self,
        request: &ClipRequest,
        source: &SourceHandle,
        sink: &dyn EventSink,
    ) -> SplitResult<SplitReport> {
        let partition =
            ClipPartition::new(source.duration_secs, request.clip_duration, self.tail_policy)?;
        let total = partition.total();

        let existing = existing_clips(&request.output_dir);
        if !existing.is_empty() {
            sink.emit(SplitEvent::warn(format!(
                "{} existing clip file(s) in {} will be overwritten",
                existing.len(),
                request.output_dir.display()
            )));
        }

        sink.emit(SplitEvent::Started {
            source: source.path.clone(),
            source_duration: source.duration_secs,
            total,
        });

        let mut progress = ProgressState::new(total);
        let mut report = SplitReport::new(request, source);

        for range in partition {
            let path = request.clip_path(range.index);
            debug!(%range, path = %path.display(), "Writing clip");
            sink.emit(SplitEvent::ClipStarted {
                range,
                path: path.clone(),
            });

            self.execute_port
                .write_subclip(source, &range, &path, &self.profile, sink)?;

            progress.advance();
            report.clips.push(path.clone());
            sink.emit(SplitEvent::ClipWritten {
                range,
                path,
                progress,
            });
        }

        info!(
            clips = report.clip_count(),
            output_dir = %report.output_dir.display(),
            "Split complete"
        );
        Ok(report)
    }

    /// Probe the source and list the ranges a split would produce
    pub fn plan(&self, source_path: &Path, clip_duration: u32) -> SplitResult<SplitPlan> {
        RequestValidator::validate_source(source_path)?;

        let source = self.probe_port.open(source_path)?;
        let partition = ClipPartition::new(source.duration_secs, clip_duration, self.tail_policy);
        self.probe_port.close(source.clone());

        let clips = partition?
            .map(|range| PlannedClip {
                range,
                file_name: clip_file_name(range.index),
            })
            .collect();
        Ok(SplitPlan {
            source,
            clip_duration,
            clips,
        })
    }
}
