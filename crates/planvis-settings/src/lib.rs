//! # planvis-settings
//!
//! Configuration management with layered sources for the planvis CLI.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`PlanvisSettings::default()`]
//! 2. **User file** — `~/.planvis/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `PLANVIS_*` overrides (highest priority)
//!
//! The driver never reads module-level globals: defaults flow through this
//! struct and are layered under the CLI arguments before the pipeline runs.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};

use serde::{Deserialize, Serialize};

/// User-tunable defaults for a visualization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanvisSettings {
    /// Default trace log path.
    pub logfile: String,
    /// Default output base name (extension added per format).
    pub output: String,
    /// Default static format token (`svg`, `png`, or `pdf`).
    pub format: String,
    /// Whether interactive HTML output is the default mode.
    pub interactive: bool,
    /// Minimum log level for the tracing subscriber.
    pub log_level: String,
}

impl Default for PlanvisSettings {
    fn default() -> Self {
        Self {
            logfile: "/var/log/axion/trace.t81log".to_string(),
            output: "plan".to_string(),
            format: "svg".to_string(),
            interactive: false,
            log_level: "warn".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
