//! Interactive projection: an explicit 2D layout with self-contained
//! Plotly HTML emission.
//!
//! Coordinates follow a depth-bounded ternary spread: every group of three
//! consecutive indices is nominally one depth level, levels stack
//! downward, and the horizontal spread narrows with depth. The layout is
//! a display convenience only — edges come from the same [`ParentMap`] the
//! static projection uses, so logical adjacency is identical across both.

use serde::Serialize;
use tracing::debug;

use planvis_core::{HOVER_VALUE_TRUNC, MAX_DEPTH, ParentMap, TERNARY_FANOUT, TraceEvent};

use crate::color::{Color, color_for};
use crate::graph::truncate;

/// One positioned marker of the interactive layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPoint {
    /// Event index this point represents.
    pub index: usize,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position (deeper levels are more negative).
    pub y: f64,
    /// Marker caption — just the kind token.
    pub text: String,
    /// Hover text with `<br>` line breaks.
    pub hover: String,
    /// Marker color.
    pub color: Color,
}

/// Explicit 2D layout plus edge list for the interactive plot.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateLayout {
    /// Points in event order.
    pub points: Vec<LayoutPoint>,
    /// `(parent, child)` index pairs, one per non-root event.
    pub segments: Vec<(usize, usize)>,
}

impl CoordinateLayout {
    /// Project events and inferred parentage onto layout coordinates.
    pub fn build(events: &[TraceEvent], parents: &ParentMap) -> Self {
        let points = events
            .iter()
            .map(|event| {
                let (x, y) = position(event.index);
                LayoutPoint {
                    index: event.index,
                    x,
                    y,
                    text: event.kind.to_string(),
                    hover: hover_text(event),
                    color: color_for(&event.kind, event.score),
                }
            })
            .collect();
        let segments = parents.iter().map(|(child, parent)| (parent, child)).collect();
        let layout = Self { points, segments };
        debug!(
            points = layout.points.len(),
            segments = layout.segments.len(),
            "built coordinate layout"
        );
        layout
    }

    /// Emit a self-contained interactive HTML document.
    ///
    /// The layout is embedded as JSON and drawn by plotly.js (loaded from
    /// its CDN): one line trace for the edges, one marker+text trace for
    /// the nodes. This emission seam is the only contact point with the
    /// charting library.
    pub fn to_html(&self, title: &str) -> String {
        // Edge polyline with null gaps, the Plotly convention for
        // disconnected segments.
        let mut edge_x: Vec<Option<f64>> = Vec::with_capacity(self.segments.len() * 3);
        let mut edge_y: Vec<Option<f64>> = Vec::with_capacity(self.segments.len() * 3);
        for &(parent, child) in &self.segments {
            edge_x.extend([
                Some(self.points[parent].x),
                Some(self.points[child].x),
                None,
            ]);
            edge_y.extend([
                Some(self.points[parent].y),
                Some(self.points[child].y),
                None,
            ]);
        }

        let node_x: Vec<f64> = self.points.iter().map(|p| p.x).collect();
        let node_y: Vec<f64> = self.points.iter().map(|p| p.y).collect();
        let texts: Vec<&str> = self.points.iter().map(|p| p.text.as_str()).collect();
        let hovers: Vec<&str> = self.points.iter().map(|p| p.hover.as_str()).collect();
        let colors: Vec<String> = self.points.iter().map(|p| p.color.to_string()).collect();

        let figure = serde_json::json!({
            "data": [
                {
                    "type": "scatter",
                    "mode": "lines",
                    "x": edge_x,
                    "y": edge_y,
                    "line": { "width": 1, "color": "black" },
                    "hoverinfo": "none"
                },
                {
                    "type": "scatter",
                    "mode": "markers+text",
                    "x": node_x,
                    "y": node_y,
                    "text": texts,
                    "textposition": "bottom center",
                    "marker": {
                        "size": 20,
                        "color": colors,
                        "line": { "width": 1, "color": "black" }
                    },
                    "hovertext": hovers,
                    "hoverinfo": "text"
                }
            ],
            "layout": {
                "title": { "text": title },
                "showlegend": false,
                "hovermode": "closest",
                "margin": { "b": 20, "l": 5, "r": 5, "t": 40 },
                "xaxis": { "showgrid": false, "zeroline": false, "showticklabels": false },
                "yaxis": { "showgrid": false, "zeroline": false, "showticklabels": false }
            }
        });

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <script src=\"https://cdn.plot.ly/plotly-2.35.2.min.js\"></script>\n</head>\n<body>\n\
             <div id=\"plan-tree\"></div>\n<script>\nconst figure = {figure};\n\
             Plotly.newPlot(\"plan-tree\", figure.data, figure.layout);\n</script>\n</body>\n</html>\n",
            title = html_escape(title),
            figure = figure
        )
    }
}

/// Ternary-spread position for an event index.
///
/// `depth = min(index / 3, MAX_DEPTH)`; indices past the cap pile up at
/// the deepest level. Horizontal slots `-1, 0, +1` narrow by `1/(depth+1)`.
fn position(index: usize) -> (f64, f64) {
    let depth = (index / TERNARY_FANOUT).min(MAX_DEPTH);
    #[allow(clippy::cast_precision_loss)]
    let slot = (index % TERNARY_FANOUT) as f64 - 1.0;
    #[allow(clippy::cast_precision_loss)]
    let spread = 1.0 / (depth as f64 + 1.0);
    #[allow(clippy::cast_precision_loss)]
    let y = -(depth as f64);
    (slot * spread, y)
}

/// Hover text mirrors the static label with a shorter truncation.
fn hover_text(event: &TraceEvent) -> String {
    let mut hover = format!(
        "{}: {}<br>State: {}",
        event.kind,
        truncate(&event.value, HOVER_VALUE_TRUNC),
        event.state
    );
    if let Some(score) = event.score {
        hover.push_str(&format!("<br>Score: {score:.2}"));
    }
    hover
}

/// Minimal escaping for the HTML title slot.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
