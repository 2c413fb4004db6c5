//! Visualization driver: orchestrates parse → infer → render → emit.
//!
//! The renderer variant is selected once, before the pipeline runs, via
//! [`RenderMode`]. Emission is all-or-nothing: a failed run never leaves
//! a partial artifact behind.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use clap::ValueEnum;
use tracing::{debug, info};

use planvis_core::{ParentMap, PlanvisError, RenderError, TraceEvent};
use planvis_parser::parse_file;
use planvis_render::{CoordinateLayout, GraphDoc};
use planvis_tree::infer_parents;

/// Title shown on the interactive plot.
const PLOT_TITLE: &str = "T81 Plan Trace";

/// External Graphviz layout program for the static path.
const DOT_PROGRAM: &str = "dot";

/// Output format for the static (Graphviz) rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StaticFormat {
    /// Scalable vector graphics.
    Svg,
    /// Raster image.
    Png,
    /// Portable document.
    Pdf,
}

impl StaticFormat {
    /// The format token passed to `dot -T` and used as file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }
}

impl std::str::FromStr for StaticFormat {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown static format '{other}'")),
        }
    }
}

/// Which of the two tree projections to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Static graph layout through the external `dot` tool.
    Static(StaticFormat),
    /// Interactive coordinate plot emitted as a self-contained HTML file.
    Interactive,
}

/// Explicit configuration for one visualization run.
///
/// Defaults come from `planvis-settings` layered under the CLI arguments;
/// the driver itself has no module-level defaults.
#[derive(Debug, Clone)]
pub struct VisualizeConfig {
    /// Trace log to read.
    pub logfile: PathBuf,
    /// Output base name; the extension is added per mode/format.
    pub output: String,
    /// Renderer variant, chosen once before the pipeline runs.
    pub mode: RenderMode,
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// An artifact was written at the given path.
    Rendered(PathBuf),
    /// The log was readable but held no trace lines; nothing was emitted.
    NoTraces,
}

/// Run the full pipeline for one configuration.
///
/// # Errors
///
/// Returns an error when the log source is unreadable or when artifact
/// emission fails (external `dot` missing or failing, file write error).
/// An empty event sequence is not an error — it yields
/// [`RunOutcome::NoTraces`] and no artifact.
pub fn run(config: &VisualizeConfig) -> Result<RunOutcome, PlanvisError> {
    let events = parse_file(&config.logfile)?;
    info!(count = events.len(), logfile = %config.logfile.display(), "parsed trace events");
    if events.is_empty() {
        return Ok(RunOutcome::NoTraces);
    }

    let parents = infer_parents(&events);
    let path = match config.mode {
        RenderMode::Interactive => emit_interactive(&events, &parents, &config.output)?,
        RenderMode::Static(format) => emit_static(&events, &parents, &config.output, format)?,
    };
    info!(path = %path.display(), "wrote artifact");
    Ok(RunOutcome::Rendered(path))
}

/// Render the coordinate projection and write `{output}.html`.
fn emit_interactive(
    events: &[TraceEvent],
    parents: &ParentMap,
    output: &str,
) -> Result<PathBuf, RenderError> {
    let html = CoordinateLayout::build(events, parents).to_html(PLOT_TITLE);
    let path = PathBuf::from(format!("{output}.html"));
    std::fs::write(&path, html).map_err(|source| RenderError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Render the graph projection through the external `dot` tool.
fn emit_static(
    events: &[TraceEvent],
    parents: &ParentMap,
    output: &str,
    format: StaticFormat,
) -> Result<PathBuf, RenderError> {
    emit_static_with(DOT_PROGRAM, events, parents, output, format)
}

/// Static emission with an explicit layout program.
///
/// DOT source goes to a temporary file; the layout program writes the
/// final artifact itself, so no partial output path exists on failure.
fn emit_static_with(
    program: &str,
    events: &[TraceEvent],
    parents: &ParentMap,
    output: &str,
    format: StaticFormat,
) -> Result<PathBuf, RenderError> {
    let dot_source = GraphDoc::build(events, parents).to_dot();
    let path = PathBuf::from(format!("{output}.{}", format.as_str()));

    let mut dot_file = tempfile::NamedTempFile::new().map_err(RenderError::DotUnavailable)?;
    dot_file
        .write_all(dot_source.as_bytes())
        .map_err(|source| RenderError::Write {
            path: dot_file.path().to_path_buf(),
            source,
        })?;

    debug!(program, format = format.as_str(), "invoking graphviz layout");
    let result = Command::new(program)
        .arg(format!("-T{}", format.as_str()))
        .arg(dot_file.path())
        .arg("-o")
        .arg(&path)
        .output()
        .map_err(RenderError::DotUnavailable)?;

    if !result.status.success() {
        return Err(RenderError::DotFailed {
            status: result.status.to_string(),
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }
    Ok(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use planvis_parser::parse_lines;
    use planvis_tree::infer_parents;

    use super::*;

    fn sample() -> (Vec<TraceEvent>, ParentMap) {
        let events = parse_lines([
            "[TRACE] type=plan value=A state=S1",
            "[TRACE] type=branch value=B state=S1",
        ]);
        let parents = infer_parents(&events);
        (events, parents)
    }

    #[test]
    fn missing_layout_program_is_unavailable_and_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("plan").to_string_lossy().into_owned();
        let (events, parents) = sample();

        let err = emit_static_with(
            "planvis-no-such-layout-program",
            &events,
            &parents,
            &output,
            StaticFormat::Svg,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::DotUnavailable(_)), "{err}");
        assert!(!dir.path().join("plan.svg").exists());
    }

    #[test]
    fn failing_layout_program_reports_status_and_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("plan").to_string_lossy().into_owned();
        let (events, parents) = sample();

        // `false` accepts the arguments and exits non-zero without
        // writing anything.
        let err = emit_static_with("false", &events, &parents, &output, StaticFormat::Png)
            .unwrap_err();
        assert!(matches!(err, RenderError::DotFailed { .. }), "{err}");
        assert!(!dir.path().join("plan.png").exists());
    }

    #[test]
    fn emission_failures_surface_as_render_errors() {
        let err: PlanvisError = RenderError::DotFailed {
            status: "exit status: 1".to_string(),
            stderr: String::new(),
        }
        .into();
        assert!(matches!(err, PlanvisError::Render(_)));
    }
}
