//! # planvis-parser
//!
//! Tolerant line parser turning a raw trace log into an ordered sequence of
//! [`TraceEvent`]s.
//!
//! Parsing is gated on the `[TRACE]` sentinel: any line without it is skipped
//! silently, and a sentinel line that fails the field pattern is skipped with
//! a debug log. Partial or corrupt logs therefore still yield a partial event
//! sequence — only the log *source* being unreadable is an error.

#![deny(unsafe_code)]

use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use planvis_core::{EventType, ParseError, TRACE_SENTINEL, TraceEvent};

/// Field pattern for a sentinel line.
///
/// Captures, in order: `type` (word token), `value` (non-greedy free text),
/// `state` (non-greedy free text), optional `score`, optional `session`
/// (no embedded whitespace). Anchored at both ends so the non-greedy state
/// capture extends to the next recognized field or end of line.
static TRACE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[TRACE\] type=(\w+) value=(.+?) state=(.+?)(?: score=(\S+))?(?: session=(\S+))?\s*$")
        .expect("trace line pattern is valid")
});

/// Parse an already-loaded sequence of lines into trace events.
///
/// Infallible: every failure mode at the line level degrades to skipping
/// that line. `index` is assigned as the count of events successfully
/// parsed so far, so indices are exactly `0..n` with no gaps.
pub fn parse_lines<'a, I>(lines: I) -> Vec<TraceEvent>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut events = Vec::new();
    for line in lines {
        if !line.starts_with(TRACE_SENTINEL) {
            continue;
        }
        match parse_trace_line(line, events.len()) {
            Some(event) => events.push(event),
            None => debug!(line, "skipping malformed trace line"),
        }
    }
    events
}

/// Parse a whole log file.
///
/// # Errors
///
/// Returns [`ParseError::Unreadable`] when the file cannot be opened or
/// read; malformed content inside a readable file is never an error.
pub fn parse_file(path: &Path) -> Result<Vec<TraceEvent>, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_lines(content.lines()))
}

/// Parse one sentinel line. `None` means the required fields are missing.
fn parse_trace_line(line: &str, index: usize) -> Option<TraceEvent> {
    let caps = TRACE_LINE.captures(line)?;

    // A score field that is present but not a number is treated as absent.
    let score = caps
        .get(4)
        .and_then(|m| f64::from_str(m.as_str()).ok());
    let session = caps
        .get(5)
        .map_or_else(|| "default".to_string(), |m| m.as_str().to_string());

    Some(TraceEvent {
        index,
        kind: EventType::from(&caps[1]),
        value: caps[2].to_string(),
        state: caps[3].to_string(),
        score,
        session,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
