//! Static projection: a backend-agnostic node/edge description with
//! Graphviz DOT emission.
//!
//! One node per event, one directed edge per non-root event (parent →
//! child). Labels stack kind, truncated value, bracketed state, and the
//! score when present. No file I/O; [`GraphDoc::to_dot`] returns DOT
//! source for the driver to hand to the external layout tool.

use tracing::debug;

use planvis_core::{GRAPH_VALUE_TRUNC, ParentMap, TraceEvent};

use crate::color::{Color, color_for};

/// One node of the static graph description.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Backend node identifier, `node{index}`.
    pub id: String,
    /// Multi-line display label.
    pub label: String,
    /// Fill color.
    pub fill: Color,
}

/// Backend-agnostic graph description for static layout.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphDoc {
    /// Nodes in event order.
    pub nodes: Vec<GraphNode>,
    /// `(parent, child)` index pairs, one per non-root event.
    pub edges: Vec<(usize, usize)>,
}

impl GraphDoc {
    /// Project events and inferred parentage onto the graph description.
    pub fn build(events: &[TraceEvent], parents: &ParentMap) -> Self {
        let nodes = events
            .iter()
            .map(|event| GraphNode {
                id: format!("node{}", event.index),
                label: node_label(event),
                fill: color_for(&event.kind, event.score),
            })
            .collect();
        let edges = parents.iter().map(|(child, parent)| (parent, child)).collect();
        let doc = Self { nodes, edges };
        debug!(nodes = doc.nodes.len(), edges = doc.edges.len(), "built graph description");
        doc
    }

    /// Emit Graphviz DOT source, top-to-bottom rank direction, filled nodes.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("// T81 plan trace\ndigraph plan_trace {\n  rankdir=TB;\n");
        for node in &self.nodes {
            dot.push_str(&format!(
                "  {} [label=\"{}\", style=filled, fillcolor=\"{}\"];\n",
                node.id,
                escape_label(&node.label),
                node.fill
            ));
        }
        for &(parent, child) in &self.edges {
            dot.push_str(&format!("  node{parent} -> node{child};\n"));
        }
        dot.push_str("}\n");
        dot
    }
}

/// Multi-line label: kind, truncated value, `[state]`, optional score.
fn node_label(event: &TraceEvent) -> String {
    let mut label = format!(
        "{}\n{}\n[{}]",
        event.kind,
        truncate(&event.value, GRAPH_VALUE_TRUNC),
        event.state
    );
    if let Some(score) = event.score {
        label.push_str(&format!("\nScore: {score:.2}"));
    }
    label
}

/// Truncate at a character boundary; display-only, the event keeps the
/// full payload.
pub(crate) fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Escape a label for a double-quoted DOT string; real newlines become
/// DOT line breaks.
fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
