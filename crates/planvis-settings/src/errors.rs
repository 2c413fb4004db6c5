//! Settings errors.

use thiserror::Error;

/// Convenience alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Failure loading the settings file.
///
/// A missing file is not an error (defaults apply); only a present but
/// unreadable or invalid file surfaces here, and the caller decides
/// whether to fall back to defaults.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contains invalid JSON or the wrong shape.
    #[error("invalid settings file: {0}")]
    Invalid(#[from] serde_json::Error),
}
