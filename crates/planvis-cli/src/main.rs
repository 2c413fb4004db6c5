//! # planvis
//!
//! Visualize planner trace logs as a ternary tree.
//!
//! Reads a flat `[TRACE]` log, reconstructs the execution tree by parent
//! inference, and emits either a static Graphviz rendering or an
//! interactive Plotly HTML document.

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use planvis_cli::driver::{RenderMode, RunOutcome, StaticFormat, VisualizeConfig, run};
use planvis_cli::logging::init_subscriber;
use planvis_settings::load_settings;

/// Visualize planner trace logs as a ternary tree.
#[derive(Parser, Debug)]
#[command(name = "planvis", about = "Visualize planner plan traces")]
struct Cli {
    /// Path to the trace log file.
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Output file name (without extension).
    #[arg(long)]
    output: Option<String>,

    /// Output format for static rendering.
    #[arg(long, value_enum)]
    format: Option<StaticFormat>,

    /// Emit an interactive HTML plot instead of a static rendering.
    #[arg(long)]
    interactive: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings().unwrap_or_default();
    init_subscriber(&settings.log_level);

    // CLI arguments layer over settings-file defaults.
    let mode = if cli.interactive || (settings.interactive && cli.format.is_none()) {
        RenderMode::Interactive
    } else {
        let format = match cli.format {
            Some(format) => format,
            None => settings
                .format
                .parse()
                .map_err(|message: String| anyhow::anyhow!(message))
                .context("invalid 'format' in settings")?,
        };
        RenderMode::Static(format)
    };
    let config = VisualizeConfig {
        logfile: cli
            .logfile
            .unwrap_or_else(|| PathBuf::from(&settings.logfile)),
        output: cli.output.unwrap_or(settings.output),
        mode,
    };

    match run(&config)? {
        RunOutcome::Rendered(path) => println!("Wrote {}", path.display()),
        RunOutcome::NoTraces => println!("No traces found to visualize"),
    }
    Ok(())
}
