//! # planvis-cli
//!
//! Driver and logging setup for the `planvis` binary.
//!
//! The pipeline is strictly sequential: parse → infer → render → emit.
//! Each stage consumes the immutable output of the previous one, and
//! exactly one artifact is produced per successful run.

#![deny(unsafe_code)]

pub mod driver;
pub mod logging;

pub use driver::{RenderMode, RunOutcome, StaticFormat, VisualizeConfig, run};
