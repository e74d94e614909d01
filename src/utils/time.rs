//! Time formatting utilities

use chrono::{DateTime, Local};

/// Format seconds as `HH:MM:SS.mmm`
pub fn format_seconds(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let milliseconds = total_ms % 1000;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, milliseconds)
}

/// Seconds as passed to ffmpeg's `-ss` / `-t` options
pub fn ffmpeg_seconds(seconds: f64) -> String {
    format!("{:.3}", seconds.max(0.0))
}

/// Prefix a log pane line with the local wall-clock time
pub fn timestamped(message: &str) -> String {
    timestamped_at(Local::now(), message)
}

pub fn timestamped_at(at: DateTime<Local>, message: &str) -> String {
    format!("[{}] {}", at.format("%H:%M:%S"), message)
}
