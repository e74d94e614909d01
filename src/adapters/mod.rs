// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod mock;
#[cfg(feature = "libav")]
pub mod probe_libav;
pub mod probe_ffprobe;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_ffmpeg::FfmpegExecAdapter;
pub use mock::{MockExecAdapter, MockProbeAdapter};
#[cfg(feature = "libav")]
pub use probe_libav::LibavProbeAdapter;
pub use probe_ffprobe::FfprobeAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingSink;
