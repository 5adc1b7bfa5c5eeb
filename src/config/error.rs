//! Configuration error types.

use crate::core::{DeviceFamily, DeviceKind};
use crate::remote::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating a [`HomeConfig`](super::HomeConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("{role} device has an empty location")]
    EmptyLocation { role: &'static str },

    #[error("{role} device must be a {expected} device, got {kind:?}")]
    WrongFamily {
        role: &'static str,
        kind: DeviceKind,
        expected: DeviceFamily,
    },
}

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON was malformed or named an unknown device kind
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, not just the first
    #[error("Invalid config: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error(transparent)]
    Build(#[from] BuildError),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
