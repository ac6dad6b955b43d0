//! Reporting of recovered settings failures
//!
//! Loading and saving never fail outward; the failure is handed to a
//! [`Diagnostics`] sink instead so it is not silently lost.

use crate::error::SettingsError;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Which side of persistence failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOperation {
    Load,
    Save,
}

impl fmt::Display for SettingsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.write_str("load"),
            Self::Save => f.write_str("save"),
        }
    }
}

/// A failure that was recovered from
#[derive(Debug)]
pub struct SettingsFailure<'a> {
    pub operation: SettingsOperation,
    pub path: &'a Path,
    pub error: &'a SettingsError,
}

/// Sink for recovered failures
pub trait Diagnostics: Send + Sync {
    fn report(&self, failure: &SettingsFailure<'_>);
}

/// Default sink: a `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, failure: &SettingsFailure<'_>) {
        warn!(
            operation = %failure.operation,
            path = %failure.path.display(),
            error = %failure.error,
            "Settings {} failed, continuing",
            failure.operation
        );
    }
}
