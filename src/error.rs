//! Error types for configuration loading and validation.
//!
//! The simulation itself has no error paths: every input is either applied
//! or silently discarded. Only building a session from a bad configuration
//! can fail.

use std::fmt;

/// Error raised while loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(String),
    /// The configuration text is not valid JSON for a `GameConfig`.
    Parse(String),
    /// A value is out of its allowed range.
    Invalid {
        /// Dotted path of the offending setting, e.g. `field.view_width`.
        setting: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Build an [`ConfigError::Invalid`] for `setting`.
    pub(crate) fn invalid(setting: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            setting,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "cannot read config: {msg}"),
            ConfigError::Parse(msg) => write!(f, "malformed config: {msg}"),
            ConfigError::Invalid { setting, reason } => {
                write!(f, "invalid config value for `{setting}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
