//! Error types for runenv operations.
//!
//! This module defines [`RunenvError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `UnknownEnvironment` is the only error the registry raises itself
//! - Activation failures are reported as outcomes, not errors
//! - Use `anyhow::Error` (via `RunenvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for runenv operations.
#[derive(Debug, Error)]
pub enum RunenvError {
    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A user-supplied value names an environment that is not available.
    #[error("value {value} is invalid for {locator}. List valid values with command: runenv list")]
    UnknownEnvironment { value: String, locator: String },

    /// A locator declaration is not of the form `<kind>.<name>`.
    #[error("Invalid input locator '{locator}': expected 'option.<name>' or 'argument.<name>'")]
    InvalidLocator { locator: String },

    /// No activation command configured for switching.
    #[error("No activation command configured; cannot switch to '{id}' (set activation.command)")]
    ActivationNotConfigured { id: String },

    /// Shell command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunenvError {
    /// Whether this error was caused by invalid user input rather than a failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::UnknownEnvironment { .. })
    }
}

/// Result type alias for runenv operations.
pub type Result<T> = std::result::Result<T, RunenvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = RunenvError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_environment_names_value_locator_and_list_hint() {
        let err = RunenvError::UnknownEnvironment {
            value: "staging".into(),
            locator: "argument.rte_id".into(),
        };
        assert_eq!(
            err.to_string(),
            "value staging is invalid for argument.rte_id. List valid values with command: runenv list"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn activation_not_configured_displays_id() {
        let err = RunenvError::ActivationNotConfigured { id: "ddev".into() };
        assert!(err.to_string().contains("'ddev'"));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn command_failed_displays_command_and_cause() {
        let err = RunenvError::CommandFailed {
            command: "ddev start".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such shell"),
        };
        let msg = err.to_string();
        assert!(msg.contains("ddev start"));
        assert!(msg.contains("no such shell"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RunenvError = io_err.into();
        assert!(matches!(err, RunenvError::Io(_)));
    }
}
