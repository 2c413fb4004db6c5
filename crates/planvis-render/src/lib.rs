//! # planvis-render
//!
//! The display half of the pipeline: a shared color/label encoding and the
//! two tree projections.
//!
//! - [`color`] — deterministic `(kind, score)` → color mapping used by both
//!   renderers
//! - [`graph`] — backend-agnostic node/edge description plus Graphviz DOT
//!   emission, for static layout
//! - [`coordinate`] — explicit 2D ternary-spread layout plus self-contained
//!   Plotly HTML emission, for interactive inspection
//!
//! Both projections consume the same event sequence and [`ParentMap`] and
//! must agree on node count, edge count, and adjacency; only the concrete
//! geometry differs. Neither performs file I/O — they produce text handed
//! to the driver for emission.
//!
//! [`ParentMap`]: planvis_core::ParentMap

#![deny(unsafe_code)]

pub mod color;
pub mod coordinate;
pub mod graph;

pub use color::{Color, color_for};
pub use coordinate::{CoordinateLayout, LayoutPoint};
pub use graph::{GraphDoc, GraphNode};
