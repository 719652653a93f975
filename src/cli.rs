//! CLI definitions using clap derive API
//!
//! The sweep is not configurable at runtime: the base directory and package
//! list are compiled in, so the only accepted arguments are clap's built-in
//! `--help` and `--version`.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// Gitsweep - stale .git directory remover
#[derive(Parser, Debug)]
#[command(
    name = "gitsweep",
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Remove stale .git directories from a fixed set of package checkouts",
    long_about = "Gitsweep walks a compiled-in list of package checkouts and deletes the \
                  .git metadata directory from each one that has it. Missing directories \
                  are reported and skipped; a failed removal is reported and does not stop \
                  the run. A summary of removals is printed at the end."
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_no_args() {
        let cli = Cli::try_parse_from(["gitsweep"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        let cli = Cli::try_parse_from(["gitsweep", "some-package"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        let cli = Cli::try_parse_from(["gitsweep", "--base-dir", "/tmp"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_help_is_built_in() {
        let err = Cli::try_parse_from(["gitsweep", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
