//! Trace events — the parsed form of one `[TRACE]` log line.

use serde::{Deserialize, Serialize};

use crate::constants::BRANCHING_KINDS;

// ─────────────────────────────────────────────────────────────────────────────
// EventType — open string tag
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of planner step a trace event describes.
///
/// The set is open: the upstream planner may emit tokens this crate has
/// never seen, and those must flow through unchanged. Unknown tokens are
/// carried as [`EventType::Other`] and only affect display (they fall back
/// to the default color).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// Planner reflection step.
    Reflect,
    /// Forward simulation step.
    Simulate,
    /// Objective maximization step.
    Maximize,
    /// Plan construction step (branching kind).
    Plan,
    /// Learning/update step.
    Learn,
    /// Dream/exploration step.
    Dream,
    /// Replay of a recorded trajectory.
    Replay,
    /// Scoring step.
    Score,
    /// Action execution step.
    Execute,
    /// Explicit branch point (branching kind).
    Branch,
    /// Terminal completion marker.
    Complete,
    /// Goal declaration (branching kind).
    Goal,
    /// Any token not in the known set.
    Other(String),
}

impl EventType {
    /// The lowercase token as it appears in the log.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reflect => "reflect",
            Self::Simulate => "simulate",
            Self::Maximize => "maximize",
            Self::Plan => "plan",
            Self::Learn => "learn",
            Self::Dream => "dream",
            Self::Replay => "replay",
            Self::Score => "score",
            Self::Execute => "execute",
            Self::Branch => "branch",
            Self::Complete => "complete",
            Self::Goal => "goal",
            Self::Other(token) => token,
        }
    }

    /// Whether this kind is eligible to be an ancestor during parent
    /// inference (`branch`, `plan`, `goal`).
    pub fn is_branching(&self) -> bool {
        BRANCHING_KINDS.contains(&self.as_str())
    }
}

impl From<&str> for EventType {
    fn from(token: &str) -> Self {
        match token {
            "reflect" => Self::Reflect,
            "simulate" => Self::Simulate,
            "maximize" => Self::Maximize,
            "plan" => Self::Plan,
            "learn" => Self::Learn,
            "dream" => Self::Dream,
            "replay" => Self::Replay,
            "score" => Self::Score,
            "execute" => Self::Execute,
            "branch" => Self::Branch,
            "complete" => Self::Complete,
            "goal" => Self::Goal,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EventType {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl From<EventType> for String {
    fn from(kind: EventType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TraceEvent
// ─────────────────────────────────────────────────────────────────────────────

/// One parsed trace record, immutable once constructed.
///
/// `index` is the only stable identity: the event's 0-based position in
/// parse order, assigned by the parser and never taken from log content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// 0-based position in the parsed sequence.
    pub index: usize,
    /// Step kind (open set).
    pub kind: EventType,
    /// Free-form payload; truncated only at display time.
    pub value: String,
    /// Logical execution state; equality is the primary ancestry signal.
    pub state: String,
    /// Optional score; `None` when the line carries no parseable `score=`.
    pub score: Option<f64>,
    /// Session tag, defaulting to `"default"`. Carried through but not
    /// used to scope inference.
    pub session: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_round_trip() {
        for token in [
            "reflect", "simulate", "maximize", "plan", "learn", "dream", "replay", "score",
            "execute", "branch", "complete", "goal",
        ] {
            let kind = EventType::from(token);
            assert_eq!(kind.as_str(), token);
            assert!(!matches!(kind, EventType::Other(_)), "{token}");
        }
    }

    #[test]
    fn unknown_token_is_carried_verbatim() {
        let kind = EventType::from("meditate");
        assert_eq!(kind, EventType::Other("meditate".to_string()));
        assert_eq!(kind.as_str(), "meditate");
    }

    #[test]
    fn branching_kinds_match_the_designated_set() {
        assert!(EventType::Branch.is_branching());
        assert!(EventType::Plan.is_branching());
        assert!(EventType::Goal.is_branching());
        assert!(!EventType::Execute.is_branching());
        assert!(!EventType::Other("branchish".into()).is_branching());
    }

    #[test]
    fn event_type_serializes_as_token() {
        let json = serde_json::to_string(&EventType::Branch).unwrap();
        assert_eq!(json, "\"branch\"");
        let back: EventType = serde_json::from_str("\"dream\"").unwrap();
        assert_eq!(back, EventType::Dream);
    }
}
