//! Clip Splitter Library
//!
//! Splits a video file into fixed-duration clips. Decoding and encoding are
//! delegated to ffmpeg; this crate plans the clip ranges, drives the media
//! service one range at a time and reports progress to a presentation shell.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod shell;
pub mod utils;

// Re-export commonly used types
pub use app::SplitInteractor;
pub use config_initialization::AppConfig;
pub use domain::model::{
    ClipRange, ClipRequest, EncodingProfile, ProgressState, SourceHandle, SplitReport, TailPolicy,
};
pub use domain::partition::ClipPartition;
pub use error::{ErrorKind, SplitError, SplitResult};
pub use ports::{EventSink, ExecutePort, ProbePort, SplitEvent};
