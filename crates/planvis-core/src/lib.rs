//! # planvis-core
//!
//! Foundation types, errors, and constants for the planvis trace visualizer.
//!
//! This crate provides the shared vocabulary the other planvis crates depend on:
//!
//! - **Events**: [`TraceEvent`] (one parsed log record) and [`EventType`]
//!   (an open string tag — unknown kinds are carried, never rejected)
//! - **Tree**: [`ParentMap`], the reconstructed tree's sole persistent
//!   structure, an index-to-parent-index relation
//! - **Errors**: [`PlanvisError`] hierarchy via `thiserror`
//! - **Constants**: score normalization, truncation lengths, layout bounds

#![deny(unsafe_code)]

pub mod constants;
pub mod errors;
pub mod event;
pub mod tree;

pub use constants::{
    BRANCHING_KINDS, GRAPH_VALUE_TRUNC, HOVER_VALUE_TRUNC, MAX_DEPTH, SCORE_MAX, TERNARY_FANOUT,
    TRACE_SENTINEL,
};
pub use errors::{ParseError, PlanvisError, RenderError};
pub use event::{EventType, TraceEvent};
pub use tree::ParentMap;
