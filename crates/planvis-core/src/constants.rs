//! Shared named constants.
//!
//! Every magic number the pipeline depends on lives here so the parser,
//! inferencer, and both renderers agree on a single value.

/// Sentinel prefix marking a log line as a trace record.
///
/// Lines not starting with this marker are skipped without comment.
pub const TRACE_SENTINEL: &str = "[TRACE]";

/// Nominal maximum score the upstream planner emits.
///
/// Scores are normalized against this value before color interpolation.
/// Two parser generations existed upstream (one normalizing against 2.8,
/// one against a smaller maximum); 2.8 is the value the later generation
/// settled on and is fixed here by name.
pub const SCORE_MAX: f64 = 2.8;

/// Event kinds eligible to act as fan-out points during parent inference.
pub const BRANCHING_KINDS: [&str; 3] = ["branch", "plan", "goal"];

/// Display truncation for the `value` payload in static graph labels.
pub const GRAPH_VALUE_TRUNC: usize = 48;

/// Display truncation for the `value` payload in interactive hover text.
pub const HOVER_VALUE_TRUNC: usize = 24;

/// Depth cap for the coordinate layout.
///
/// Events beyond index `3 * MAX_DEPTH` keep accumulating at the deepest
/// level; depth fidelity is intentionally lost past this point so long
/// traces stay readable.
pub const MAX_DEPTH: usize = 5;

/// Nominal fan-out of the reconstructed tree.
///
/// A layout convention, not an enforced property of the parent map.
pub const TERNARY_FANOUT: usize = 3;
