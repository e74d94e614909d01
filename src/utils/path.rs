//! Output path helpers

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const CLIP_PREFIX: &str = "clip";
const CLIP_EXTENSION: &str = "mp4";

/// `clip{index}.mp4`
pub fn clip_file_name(index: u32) -> String {
    format!("{}{}.{}", CLIP_PREFIX, index, CLIP_EXTENSION)
}

/// `output_dir/clip{index}.mp4`
pub fn clip_output_path(output_dir: &Path, index: u32) -> PathBuf {
    output_dir.join(clip_file_name(index))
}

/// Index encoded in a `clip{N}.mp4` file name
pub fn parse_clip_index(file_name: &str) -> Option<u32> {
    let digits = file_name
        .strip_prefix(CLIP_PREFIX)?
        .strip_suffix(CLIP_EXTENSION)?
        .strip_suffix('.')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Clip files already present directly inside `output_dir`, ordered by index
pub fn existing_clips(output_dir: &Path) -> Vec<PathBuf> {
    let mut clips: Vec<(u32, PathBuf)> = WalkDir::new(output_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let index = parse_clip_index(entry.file_name().to_str()?)?;
            Some((index, entry.into_path()))
        })
        .collect();
    clips.sort_by_key(|(index, _)| *index);
    clips.into_iter().map(|(_, path)| path).collect()
}
