//! Deterministic color encoding shared by both renderers.
//!
//! Scored events get a red→green gradient (low→high); unscored events get a
//! fixed per-kind color with white as the fallback for unknown kinds. The
//! mapping is pure: identical `(kind, score)` always yields the same color.

use serde::Serialize;

use planvis_core::{EventType, SCORE_MAX};

/// Fixed blue channel for scored colors; gives the gradient its
/// semi-transparent-looking hue.
const SCORE_BLUE: u8 = 0x80;

/// A display color, either a named Graphviz/CSS color or an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Color {
    /// A color name understood by both backends (e.g. `lightblue`).
    Named(&'static str),
    /// An explicit RGB triple, rendered as `#rrggbb`.
    Rgb(u8, u8, u8),
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Color for an event, by score when present, by kind otherwise.
///
/// A present score is normalized against [`SCORE_MAX`], clamped to
/// `[0, 1]`, and linearly interpolated red→green. An absent score falls
/// back to the per-kind table; unknown kinds yield white, never an error.
pub fn color_for(kind: &EventType, score: Option<f64>) -> Color {
    if let Some(score) = score {
        let clamped = (score / SCORE_MAX).clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let red = ((1.0 - clamped) * 255.0) as u8;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let green = (clamped * 255.0) as u8;
        return Color::Rgb(red, green, SCORE_BLUE);
    }
    Color::Named(match kind {
        EventType::Reflect => "lightblue",
        EventType::Simulate => "lightgreen",
        EventType::Maximize => "gold",
        EventType::Plan => "orange",
        EventType::Learn => "violet",
        EventType::Dream => "pink",
        EventType::Replay => "gray",
        EventType::Score => "lightgray",
        EventType::Execute => "cyan",
        EventType::Branch => "yellow",
        EventType::Complete => "purple",
        EventType::Goal | EventType::Other(_) => "white",
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_is_full_red() {
        assert_eq!(color_for(&EventType::Score, Some(0.0)).to_string(), "#ff0080");
    }

    #[test]
    fn max_score_is_full_green() {
        assert_eq!(
            color_for(&EventType::Score, Some(SCORE_MAX)).to_string(),
            "#00ff80"
        );
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(color_for(&EventType::Score, Some(-3.0)).to_string(), "#ff0080");
        assert_eq!(color_for(&EventType::Score, Some(99.0)).to_string(), "#00ff80");
    }

    #[test]
    fn score_takes_precedence_over_kind() {
        let scored = color_for(&EventType::Plan, Some(1.4));
        assert!(matches!(scored, Color::Rgb(..)));
    }

    #[test]
    fn known_kinds_have_table_colors() {
        assert_eq!(color_for(&EventType::Plan, None).to_string(), "orange");
        assert_eq!(color_for(&EventType::Branch, None).to_string(), "yellow");
        assert_eq!(color_for(&EventType::Dream, None).to_string(), "pink");
    }

    #[test]
    fn unknown_kind_falls_back_to_white() {
        let kind = EventType::Other("meditate".to_string());
        assert_eq!(color_for(&kind, None).to_string(), "white");
    }

    #[test]
    fn encoding_is_pure() {
        for _ in 0..3 {
            assert_eq!(
                color_for(&EventType::Execute, Some(1.9)),
                color_for(&EventType::Execute, Some(1.9))
            );
        }
    }
}
