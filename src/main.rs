//! Clip Splitter
//!
//! Splits a video file into consecutive fixed-length MP4 clips named
//! `clip0.mp4`, `clip1.mp4`, ... inside an output directory.
//!
//! # Usage
//!
//! ```bash
//! clipper                                    # open the graphical form
//! clipper split -i talk.mov -o clips -d 60   # split on the command line
//! clipper plan -i talk.mov -d 60             # list clips without writing
//! clipper config                             # print the effective configuration
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use clip_splitter::cli::{commands, Cli, Commands};
use clip_splitter::config_initialization::initialize_configuration_hierarchy;
use clip_splitter::utils::logging::init_logging;

/// Main entry point for the clip splitter
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = initialize_configuration_hierarchy(&cli.config_overrides())
        .context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!(?config, "Effective configuration");

    match cli.command {
        Some(Commands::Split(args)) => {
            info!("Executing split command");
            commands::split(args, &config)?;
        }
        Some(Commands::Plan(args)) => {
            info!("Executing plan command");
            commands::plan(args, &config)?;
        }
        #[cfg(feature = "gui")]
        Some(Commands::Gui(args)) => {
            commands::gui(args, &config)?;
        }
        Some(Commands::Config) => {
            commands::config(&config)?;
        }
        None => run_default(&config)?,
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run_default(config: &clip_splitter::AppConfig) -> Result<()> {
    commands::gui(Default::default(), config)
}

#[cfg(not(feature = "gui"))]
fn run_default(_config: &clip_splitter::AppConfig) -> Result<()> {
    <Cli as clap::CommandFactory>::command().print_help()?;
    println!();
    Ok(())
}
