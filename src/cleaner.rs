//! Per-package .git directory removal
//!
//! Each package is handled independently: the target path is derived, checked,
//! and removed inside a local error boundary. A failed removal becomes a
//! reported outcome for that package and never affects the rest of the run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, removal_failed};

/// Outcome of sweeping a single package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The .git directory existed and was removed
    Removed,
    /// The .git directory does not exist (or is not a directory)
    Absent,
    /// The .git directory exists but removal failed
    Failed { reason: String },
}

/// Count of successful removals out of packages attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub removed: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self { removed: 0, total }
    }
}

/// Target path for a package: `<base_dir>/<package>/.git`
pub fn git_dir(base_dir: &Path, package: &str) -> PathBuf {
    base_dir.join(package).join(".git")
}

/// Recursively remove a .git directory
fn remove_git_dir(path: &Path) -> Result<()> {
    fs::remove_dir_all(path)
        .map_err(|e| removal_failed(path.display().to_string(), e.to_string()))
}

/// Sweep a single package, containing any removal failure locally
pub fn clean_package(base_dir: &Path, package: &str) -> CleanOutcome {
    let target = git_dir(base_dir, package);

    if !target.is_dir() {
        return CleanOutcome::Absent;
    }

    match remove_git_dir(&target) {
        Ok(()) => CleanOutcome::Removed,
        Err(e) => CleanOutcome::Failed {
            reason: e.to_string(),
        },
    }
}
