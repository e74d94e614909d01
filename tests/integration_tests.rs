use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use clip_splitter::adapters::{MockExecAdapter, MockProbeAdapter};
use clip_splitter::app::{AppContainer, DefaultAppContainer};
use clip_splitter::*;

/// Test utilities for video processing
mod test_utils {
    use super::*;

    pub fn ffmpeg_available() -> bool {
        Command::new("ffmpeg")
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
            && Command::new("ffprobe")
                .arg("-version")
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
    }

    /// Create a test video file using FFmpeg; false when it could not be made
    pub fn create_test_video(output_path: &Path, duration: u32) -> bool {
        let source = format!("testsrc=duration={}:size=320x240:rate=25", duration);
        let tone = format!("sine=frequency=1000:duration={}", duration);
        Command::new("ffmpeg")
            .args(["-hide_banner", "-loglevel", "error", "-f", "lavfi", "-i"])
            .arg(&source)
            .args(["-f", "lavfi", "-i"])
            .arg(&tone)
            .args(["-c:v", "libx264", "-pix_fmt", "yuv420p", "-c:a", "aac", "-y"])
            .arg(output_path)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// `clipper` isolated from any config file on the host
    pub fn clipper(work_dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("clipper").unwrap();
        cmd.current_dir(work_dir)
            .env("XDG_CONFIG_HOME", work_dir)
            .env("HOME", work_dir)
            .env("SPLITTER_PROBE_BACKEND", "ffprobe")
            .env_remove("SPLITTER_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn clip_files(dir: &Path) -> Vec<PathBuf> {
        let mut clips: Vec<PathBuf> = std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with("clip") && n.ends_with(".mp4"))
                    .unwrap_or(false)
            })
            .collect();
        clips.sort();
        clips
    }
}

use test_utils::*;

#[test]
fn test_library_split_with_mock_media_service() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("talk.mov");
    std::fs::write(&source, b"placeholder").unwrap();

    let container = DefaultAppContainer::with_ports(
        Arc::new(MockProbeAdapter::new(15.0)),
        Arc::new(MockExecAdapter::new()),
        &AppConfig::default(),
    );
    let request = ClipRequest::new(&source, temp_dir.path(), 6).unwrap();

    let sink = |_event: SplitEvent| {};
    let report = container
        .split_interactor()
        .execute(&request, &sink)
        .unwrap();

    assert_eq!(report.clip_count(), 3);
    assert!(report.contains(&temp_dir.path().join("clip2.mp4")));
    assert_eq!(clip_files(temp_dir.path()).len(), 3);
}

#[test]
fn test_library_non_writable_target_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("talk.mov");
    std::fs::write(&source, b"placeholder").unwrap();
    // A directory named like the first clip makes the first write fail
    std::fs::create_dir(temp_dir.path().join("clip0.mp4")).unwrap();

    let container = DefaultAppContainer::with_ports(
        Arc::new(MockProbeAdapter::new(15.0)),
        Arc::new(MockExecAdapter::new()),
        &AppConfig::default(),
    );
    let request = ClipRequest::new(&source, temp_dir.path(), 6).unwrap();

    let sink = |_event: SplitEvent| {};
    let err = container
        .split_interactor()
        .execute(&request, &sink)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!temp_dir.path().join("clip1.mp4").exists());
}

#[test]
fn test_cli_rejects_non_numeric_duration() {
    let temp_dir = TempDir::new().unwrap();
    clipper(temp_dir.path())
        .args(["split", "-i", "missing.mp4", "-o", ".", "-d", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid clip duration"));
}

#[test]
fn test_cli_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    clipper(temp_dir.path())
        .args(["split", "-i", "missing.mp4", "-o", ".", "-d", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_cli_missing_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("in.mp4"), b"placeholder").unwrap();
    clipper(temp_dir.path())
        .args(["split", "-i", "in.mp4", "-o", "nowhere", "-d", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory not found"));
}

#[test]
fn test_cli_config_prints_effective_configuration() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("splitter.toml"),
        "[encoding]\npreset = \"veryfast\"\n",
    )
    .unwrap();

    clipper(temp_dir.path())
        .env("SPLITTER_CRF", "28")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[encoding]"))
        .stdout(predicate::str::contains("veryfast"))
        .stdout(predicate::str::contains("crf = 28"));
}

#[test]
fn test_cli_invalid_environment_override() {
    let temp_dir = TempDir::new().unwrap();
    clipper(temp_dir.path())
        .env("SPLITTER_CRF", "99")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CRF value 99"));
}

#[test]
fn test_end_to_end_split() {
    if !ffmpeg_available() {
        eprintln!("Skipping end-to-end test: ffmpeg not available");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source.mp4");
    if !create_test_video(&source, 5) {
        eprintln!("Skipping end-to-end test: could not create test video");
        return;
    }
    let out_dir = temp_dir.path().join("clips");
    std::fs::create_dir(&out_dir).unwrap();

    clipper(temp_dir.path())
        .args(["split", "-i", "source.mp4", "-o", "clips", "-d", "2", "--preset", "ultrafast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[3/3] wrote clip2.mp4"));

    let clips = clip_files(&out_dir);
    assert_eq!(clips.len(), 3);
    for clip in clips {
        assert!(std::fs::metadata(&clip).unwrap().len() > 0);
    }
}

#[test]
fn test_end_to_end_plan_json() {
    if !ffmpeg_available() {
        eprintln!("Skipping plan test: ffmpeg not available");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source.mp4");
    if !create_test_video(&source, 4) {
        eprintln!("Skipping plan test: could not create test video");
        return;
    }

    let output = clipper(temp_dir.path())
        .args(["plan", "-i", "source.mp4", "-d", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let clips = plan["clips"].as_array().unwrap();
    assert_eq!(clips.len(), 2);
    assert_eq!(clips[0]["file_name"], "clip0.mp4");
    assert_eq!(clips[1]["range"]["start"], 3.0);
    assert!(std::fs::read_dir(temp_dir.path()).unwrap().count() == 1);
}
