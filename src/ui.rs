//! Console reporting for sweep runs
//!
//! One status line per package and a final summary banner. Markers are
//! color-styled via `console`, which drops the styling on non-TTY output.

use console::Style;

use crate::cleaner::{CleanOutcome, RunSummary};

const RULE_WIDTH: usize = 50;

/// Print the status line for one package
pub fn print_outcome(package: &str, outcome: &CleanOutcome) {
    match outcome {
        CleanOutcome::Removed => {
            println!(
                "{} Removed {}/.git",
                Style::new().green().apply_to("✓"),
                package
            );
        }
        CleanOutcome::Absent => {
            println!(
                "{} {}/.git does not exist",
                Style::new().dim().apply_to("-"),
                package
            );
        }
        CleanOutcome::Failed { reason } => {
            println!(
                "{} Failed to remove {}/.git: {}",
                Style::new().red().apply_to("✗"),
                package,
                reason
            );
        }
    }
}

/// Print the end-of-run summary banner
pub fn print_summary(summary: &RunSummary) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{}", rule);
    println!("{}", summary_line(summary));
    println!("{}", rule);
}

/// Summary line without the banner
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Removed .git directories from {}/{} packages",
        summary.removed, summary.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_counts() {
        let summary = RunSummary { removed: 1, total: 2 };
        assert_eq!(
            summary_line(&summary),
            "Removed .git directories from 1/2 packages"
        );
    }

    #[test]
    fn test_summary_line_empty_run() {
        let summary = RunSummary::new(0);
        assert_eq!(
            summary_line(&summary),
            "Removed .git directories from 0/0 packages"
        );
    }
}
