//! Command-line argument definitions

use clap::Args;

/// Constant Rate Factor accepted by x264/x265
fn parse_crf(value: &str) -> Result<u8, String> {
    clap_num::number_range(value, 0, 51)
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Directory that receives clip0.mp4, clip1.mp4, ...
    #[arg(short, long)]
    pub output_dir: String,

    /// Clip length in whole seconds
    #[arg(short, long)]
    pub duration: String,

    /// Print the split report as JSON
    #[arg(long)]
    pub json: bool,

    /// Constant Rate Factor (0-51)
    #[arg(long, value_parser = parse_crf)]
    pub crf: Option<u8>,

    /// Encoding preset
    #[arg(long)]
    pub preset: Option<String>,

    /// Video codec
    #[arg(long)]
    pub video_codec: Option<String>,

    /// Also write the zero-length clip when the source is an exact multiple
    #[arg(long)]
    pub keep_empty_tail: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Clip length in whole seconds
    #[arg(short, long)]
    pub duration: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Include the zero-length clip when the source is an exact multiple
    #[arg(long)]
    pub keep_empty_tail: bool,
}

/// Arguments for the gui command
#[derive(Args, Debug, Default)]
pub struct GuiArgs {
    /// Prefill the video file field
    #[arg(short, long)]
    pub input: Option<String>,

    /// Prefill the output folder field
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Prefill the clip length field
    #[arg(short, long)]
    pub duration: Option<String>,
}
