// Unit tests for domain models

use super::*;
use crate::error::ErrorKind;

#[test]
fn test_clip_request_from_fields() {
    let request = ClipRequest::from_fields("/videos/in.mp4", "/videos/out", "6").unwrap();
    assert_eq!(request.source_path, PathBuf::from("/videos/in.mp4"));
    assert_eq!(request.output_dir, PathBuf::from("/videos/out"));
    assert_eq!(request.clip_duration, 6);
}

#[test]
fn test_clip_request_trims_fields() {
    let request = ClipRequest::from_fields("  in.mp4 ", " out ", " 10 ").unwrap();
    assert_eq!(request.source_path, PathBuf::from("in.mp4"));
    assert_eq!(request.output_dir, PathBuf::from("out"));
    assert_eq!(request.clip_duration, 10);
}

#[test]
fn test_clip_request_rejects_bad_duration() {
    for value in ["", "six", "6.5", "-6", "0"] {
        let err = ClipRequest::from_fields("in.mp4", "out", value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input, "value {:?}", value);
        assert!(matches!(err, SplitError::InvalidDuration { .. }));
    }
}

#[test]
fn test_clip_request_new_rejects_zero() {
    assert!(ClipRequest::new("in.mp4", "out", 0).is_err());
    assert!(ClipRequest::new("in.mp4", "out", 1).is_ok());
}

#[test]
fn test_clip_path() {
    let request = ClipRequest::new("in.mp4", "/tmp/out", 6).unwrap();
    assert_eq!(request.clip_path(0), PathBuf::from("/tmp/out/clip0.mp4"));
    assert_eq!(request.clip_path(12), PathBuf::from("/tmp/out/clip12.mp4"));
}

#[test]
fn test_clip_range_duration_and_empty() {
    let range = ClipRange {
        index: 2,
        start: 12.0,
        end: 15.0,
    };
    assert_eq!(range.duration(), 3.0);
    assert!(!range.is_empty());

    let tail = ClipRange {
        index: 2,
        start: 12.0,
        end: 12.0,
    };
    assert_eq!(tail.duration(), 0.0);
    assert!(tail.is_empty());
}

#[test]
fn test_clip_range_display() {
    let range = ClipRange {
        index: 1,
        start: 6.0,
        end: 12.5,
    };
    assert_eq!(range.to_string(), "#1 [00:00:06.000 - 00:00:12.500]");
}

#[test]
fn test_progress_state_advances_to_total() {
    let mut progress = ProgressState::new(3);
    assert_eq!(progress.completed(), 0);
    assert_eq!(progress.fraction(), 0.0);

    assert_eq!(progress.advance(), 1);
    assert_eq!(progress.advance(), 2);
    assert!(!progress.is_complete());
    assert_eq!(progress.advance(), 3);
    assert!(progress.is_complete());
    assert_eq!(progress.fraction(), 1.0);
    assert_eq!(progress.to_string(), "3/3");
}

#[test]
fn test_progress_state_never_exceeds_total() {
    let mut progress = ProgressState::new(1);
    progress.advance();
    assert_eq!(progress.advance(), 1);
    assert_eq!(progress.completed(), progress.total());
}

#[test]
fn test_progress_state_empty() {
    let progress = ProgressState::new(0);
    assert!(progress.is_complete());
    assert_eq!(progress.fraction(), 0.0);
}

#[test]
fn test_tail_policy_parse() {
    assert_eq!("preserve".parse::<TailPolicy>().unwrap(), TailPolicy::Preserve);
    assert_eq!("Keep".parse::<TailPolicy>().unwrap(), TailPolicy::Preserve);
    assert_eq!("drop".parse::<TailPolicy>().unwrap(), TailPolicy::DropEmpty);
    assert_eq!(" DROP ".parse::<TailPolicy>().unwrap(), TailPolicy::DropEmpty);
    assert!("sometimes".parse::<TailPolicy>().is_err());
    assert_eq!(TailPolicy::default(), TailPolicy::DropEmpty);
}

#[test]
fn test_encoding_profile_default() {
    let profile = EncodingProfile::default();
    assert_eq!(profile.video_codec, "libx264");
    assert_eq!(profile.audio_codec, "aac");
    assert_eq!(profile.crf, 23);
    assert!(profile.threads >= 1 && profile.threads <= 16);
    assert!(profile.validate().is_ok());
}

#[test]
fn test_encoding_profile_validation() {
    let mut profile = EncodingProfile::default();
    profile.crf = 52;
    assert!(profile.validate().is_err());

    let mut profile = EncodingProfile::default();
    profile.video_codec = "  ".to_string();
    assert!(profile.validate().is_err());

    let mut profile = EncodingProfile::default();
    profile.threads = 0;
    assert!(profile.validate().is_err());
}

#[test]
fn test_split_report() {
    let request = ClipRequest::new("in.mp4", "out", 6).unwrap();
    let source = SourceHandle::new("in.mp4", 15.0, "mov,mp4,m4a,3gp,3g2,mj2");
    let mut report = SplitReport::new(&request, &source);
    assert_eq!(report.clip_count(), 0);

    report.clips.push(request.clip_path(0));
    assert_eq!(report.clip_count(), 1);
    assert!(report.contains(Path::new("out/clip0.mp4")));
    assert!(!report.contains(Path::new("out/clip1.mp4")));
    assert_eq!(report.source_duration, 15.0);
}
