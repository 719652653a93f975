//! Sweep run orchestration
//!
//! A single sequential pass over the package list: derive the target path,
//! attempt removal, report, tally, then print the summary.

use std::path::Path;

use crate::cleaner::{self, CleanOutcome, RunSummary};
use crate::error::Result;
use crate::packages;
use crate::ui;

/// Run the sweep over the compiled-in base directory and package list
pub fn run() -> Result<()> {
    run_with(Path::new(packages::BASE_DIR), packages::PACKAGES);
    Ok(())
}

/// Sweep `packages` under `base_dir` in list order, printing one status line
/// per package and a summary at the end. A failed removal is reported and the
/// run continues; the returned summary counts successful removals only.
pub fn run_with(base_dir: &Path, packages: &[&str]) -> RunSummary {
    let mut summary = RunSummary::new(packages.len());

    for package in packages {
        let outcome = cleaner::clean_package(base_dir, package);
        ui::print_outcome(package, &outcome);
        if outcome == CleanOutcome::Removed {
            summary.removed += 1;
        }
    }

    ui::print_summary(&summary);
    summary
}
