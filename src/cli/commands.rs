//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{TomlConfigAdapter, TracingSink};
use crate::app::{AppContainer, DefaultAppContainer, SplitPlan};
use crate::cli::args::{PlanArgs, SplitArgs};
use crate::config_initialization::AppConfig;
use crate::domain::model::ClipRequest;
use crate::domain::rules::parse_clip_duration;
use crate::ports::{EventSink, SplitEvent};
use crate::utils::format_file_size;
use crate::utils::time::format_seconds;

/// Terminal progress on stdout, diagnostics through tracing
struct ConsoleSink {
    tracing: TracingSink,
    print_progress: bool,
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: SplitEvent) {
        if self.print_progress {
            if let SplitEvent::ClipWritten { path, progress, .. } = &event {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                println!("[{}] wrote {}", progress, name);
            }
        }
        self.tracing.emit(event);
    }
}

/// Execute the split command
pub fn split(args: SplitArgs, config: &AppConfig) -> Result<()> {
    // Parse before touching the media service
    let request = ClipRequest::from_fields(&args.input, &args.output_dir, &args.duration)?;

    let container =
        DefaultAppContainer::from_config(config).context("Failed to initialize media service")?;
    let sink = ConsoleSink {
        tracing: TracingSink::new().with_verbose_media(!args.json),
        print_progress: !args.json,
    };

    let report = container.split_interactor().execute(&request, &sink)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize split report")?;
        println!("{}", json);
    } else {
        let total_bytes: u64 = report
            .clips
            .iter()
            .filter_map(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .sum();
        println!(
            "Wrote {} clip(s) to {} ({})",
            report.clip_count(),
            report.output_dir.display(),
            format_file_size(total_bytes)
        );
    }

    info!("Split command completed");
    Ok(())
}

/// Execute the plan command
pub fn plan(args: PlanArgs, config: &AppConfig) -> Result<()> {
    let clip_duration = parse_clip_duration(&args.duration)?;

    let container =
        DefaultAppContainer::from_config(config).context("Failed to initialize media service")?;
    let plan = container
        .split_interactor()
        .plan(Path::new(args.input.trim()), clip_duration)?;

    if args.json {
        let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
        println!("{}", json);
    } else {
        display_plan(&plan);
    }
    Ok(())
}

/// Execute the gui command
#[cfg(feature = "gui")]
pub fn gui(args: crate::cli::args::GuiArgs, config: &AppConfig) -> Result<()> {
    use crate::shell::gui::{run_gui, FormPrefill};

    let container =
        DefaultAppContainer::from_config(config).context("Failed to initialize media service")?;
    let prefill = FormPrefill {
        source_path: args.input,
        output_dir: args.output_dir,
        duration: args.duration,
    };
    run_gui(container.split_interactor(), prefill)
        .map_err(|e| anyhow::anyhow!("Failed to run the splitter window: {}", e))
}

/// Execute the config command
pub fn config(config: &AppConfig) -> Result<()> {
    let rendered = TomlConfigAdapter::new().render(config)?;
    print!("{}", rendered);
    Ok(())
}

fn display_plan(plan: &SplitPlan) {
    println!("Split Plan");
    println!("==========");
    println!("Source: {}", plan.source.path.display());
    println!("Format: {}", plan.source.container);
    println!("Duration: {}", format_seconds(plan.source.duration_secs));
    println!("Clip length: {}s", plan.clip_duration);
    println!("Clips: {}", plan.clips.len());
    println!();
    for clip in &plan.clips {
        println!("  {}  {}", clip.file_name, clip.range);
    }
}
