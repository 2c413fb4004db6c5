//! Error hierarchy for the planvis pipeline.
//!
//! Built on [`thiserror`]:
//!
//! - [`PlanvisError`]: top-level enum covering all error domains
//! - [`ParseError`]: log source failures (unreadable input)
//! - [`RenderError`]: artifact emission failures (external tool, file write)
//!
//! Recoverable conditions (malformed lines, malformed score fields) are
//! absorbed inside the parser and never appear here. Only unrecoverable
//! conditions reach the top level; no partial artifact is emitted for a
//! failed run.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the planvis pipeline.
#[derive(Debug, Error)]
pub enum PlanvisError {
    /// Log source could not be read.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Artifact emission failed.
    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Failure reading the trace log source.
///
/// Malformed *lines* are not errors — they are skipped during parsing.
/// This type only covers the source itself being unavailable.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The log file does not exist or could not be opened.
    #[error("log file '{path}' could not be read: {source}")]
    Unreadable {
        /// Path the parser attempted to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Failure emitting the rendering artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The external `dot` tool could not be launched.
    #[error("failed to launch graphviz 'dot' (is graphviz installed?): {0}")]
    DotUnavailable(std::io::Error),

    /// The external `dot` tool exited with a failure status.
    #[error("graphviz 'dot' failed with status {status}: {stderr}")]
    DotFailed {
        /// Exit status reported by the process.
        status: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// Writing the output artifact failed.
    #[error("failed to write artifact '{path}': {source}")]
    Write {
        /// Destination path of the artifact.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_error_message_names_the_path() {
        let err = ParseError::Unreadable {
            path: PathBuf::from("/var/log/axion/trace.t81log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("/var/log/axion/trace.t81log"), "{msg}");
    }

    #[test]
    fn render_error_converts_into_top_level() {
        let err: PlanvisError = RenderError::DotUnavailable(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        ))
        .into();
        assert!(err.to_string().contains("dot"));
        assert_matches!(err, PlanvisError::Render(RenderError::DotUnavailable(_)));
    }
}
