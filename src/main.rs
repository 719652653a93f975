//! Gitsweep - stale .git directory remover
//!
//! A maintenance tool that deletes leftover `.git` metadata directories from
//! a fixed set of package checkouts. The base directory and the package list
//! are compiled in; the tool takes no arguments.

use clap::Parser;

mod cleaner;
mod cli;
mod commands;
mod error;
mod packages;
mod ui;

use cli::Cli;

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = commands::clean::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
