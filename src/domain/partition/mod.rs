//! Clip partitioning
//!
//! Splits `[0, source_duration]` into consecutive ranges of `clip_duration`
//! seconds. The range count is `floor(source / clip) + 1`, so a source whose
//! duration is an exact multiple of the clip length ends with a zero-length
//! range `[source, source]`. [`TailPolicy`] decides whether that range is
//! emitted.

use std::iter::FusedIterator;

use crate::domain::model::{ClipRange, TailPolicy};
use crate::error::{SplitError, SplitResult};

/// Lazy, single-pass sequence of clip ranges
#[derive(Debug, Clone)]
pub struct ClipPartition {
    source_duration: f64,
    clip_duration: u32,
    total: u32,
    next_index: u32,
}

impl ClipPartition {
    /// Plan the ranges for a source of `source_duration` seconds
    pub fn new(source_duration: f64, clip_duration: u32, policy: TailPolicy) -> SplitResult<Self> {
        if !source_duration.is_finite() || source_duration <= 0.0 {
            return Err(SplitError::InvalidSourceDuration {
                duration: source_duration,
            });
        }
        if clip_duration == 0 {
            return Err(SplitError::InvalidDuration {
                value: clip_duration.to_string(),
            });
        }

        let step = clip_duration as f64;
        let whole_clips = (source_duration / step).floor();
        // total = whole_clips + 1 must fit in u32
        if whole_clips >= u32::MAX as f64 {
            return Err(SplitError::InvalidSourceDuration {
                duration: source_duration,
            });
        }
        let mut total = whole_clips as u32 + 1;

        // Division can round up to the next integer when the source sits just
        // below a multiple; the last range must still start inside the source.
        while total > 1 && (total - 1) as f64 * step > source_duration {
            total -= 1;
        }

        if policy == TailPolicy::DropEmpty && total > 1 && (total - 1) as f64 * step >= source_duration
        {
            total -= 1;
        }

        Ok(Self {
            source_duration,
            clip_duration,
            total,
            next_index: 0,
        })
    }

    /// Number of ranges this partition yields overall
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn source_duration(&self) -> f64 {
        self.source_duration
    }

    pub fn clip_duration(&self) -> u32 {
        self.clip_duration
    }

    fn range_at(&self, index: u32) -> ClipRange {
        let step = self.clip_duration as f64;
        let start = index as f64 * step;
        let end = ((index + 1) as f64 * step).min(self.source_duration);
        ClipRange { index, start, end }
    }
}

impl Iterator for ClipPartition {
    type Item = ClipRange;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.total {
            return None;
        }
        let range = self.range_at(self.next_index);
        self.next_index += 1;
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ClipPartition {}

impl FusedIterator for ClipPartition {}
