//! CLI module for the clip splitter
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config_initialization::ConfigOverrides;
use crate::domain::model::TailPolicy;

pub mod args;
pub mod commands;

pub use args::{GuiArgs, PlanArgs, SplitArgs};

/// Split a video into fixed-length clips
///
/// Without a subcommand the graphical form is opened.
#[derive(Parser, Debug)]
#[command(name = "clipper")]
#[command(about = "Split a video into fixed-length MP4 clips")]
#[command(version)]
pub struct Cli {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit diagnostics as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./splitter.toml, then the user config dir)
    #[arg(long, global = true, env = "SPLITTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a video file into clips
    Split(SplitArgs),
    /// Show the clips a split would produce without writing them
    Plan(PlanArgs),
    /// Open the graphical splitter
    #[cfg(feature = "gui")]
    Gui(GuiArgs),
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Configuration values given as flags, for the top of the hierarchy
    pub fn config_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            config_path: self.config.clone(),
            log_level: self.log_level.clone(),
            log_json: self.log_json,
            ..ConfigOverrides::default()
        };
        match &self.command {
            Some(Commands::Split(args)) => {
                overrides.crf = args.crf;
                overrides.preset = args.preset.clone();
                overrides.video_codec = args.video_codec.clone();
                if args.keep_empty_tail {
                    overrides.zero_length_tail = Some(TailPolicy::Preserve);
                }
            }
            Some(Commands::Plan(args)) if args.keep_empty_tail => {
                overrides.zero_length_tail = Some(TailPolicy::Preserve);
            }
            _ => {}
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_split() {
        let cli = Cli::try_parse_from([
            "clipper", "split", "-i", "in.mp4", "-o", "out", "-d", "6", "--crf", "20",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Split(args)) => {
                assert_eq!(args.input, "in.mp4");
                assert_eq!(args.output_dir, "out");
                assert_eq!(args.duration, "6");
                assert_eq!(args.crf, Some(20));
                assert!(!args.keep_empty_tail);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_crf_out_of_range_rejected() {
        let result = Cli::try_parse_from([
            "clipper", "split", "-i", "in.mp4", "-o", "out", "-d", "6", "--crf", "60",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["clipper", "config", "--log-json", "--config", "x.toml"])
            .unwrap();
        assert!(cli.log_json);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn test_config_overrides_from_split_flags() {
        let cli = Cli::try_parse_from([
            "clipper",
            "--log-level",
            "debug",
            "split",
            "-i",
            "in.mp4",
            "-o",
            "out",
            "-d",
            "6",
            "--preset",
            "fast",
            "--keep-empty-tail",
        ])
        .unwrap();
        let overrides = cli.config_overrides();
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
        assert_eq!(overrides.preset.as_deref(), Some("fast"));
        assert_eq!(overrides.crf, None);
        assert_eq!(overrides.zero_length_tail, Some(TailPolicy::Preserve));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["clipper"]).unwrap();
        assert!(cli.command.is_none());
    }
}
