//! Error types and handling for Gitsweep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Removal failures are contained per package inside the cleaner: they are
//! converted to a reported outcome and never abort the run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Gitsweep operations
#[derive(Error, Diagnostic, Debug)]
pub enum SweepError {
    #[error("Failed to remove directory '{path}': {reason}")]
    #[diagnostic(
        code(gitsweep::fs::removal_failed),
        help("Check permissions on the directory and its parent")
    )]
    RemovalFailed { path: String, reason: String },
}

/// Creates a removal failure for a target path
pub fn removal_failed(path: impl Into<String>, reason: impl Into<String>) -> SweepError {
    SweepError::RemovalFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SweepError>;
