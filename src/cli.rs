use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lint-digest")]
#[command(author, version, about = "Summarize an ESLint JSON report")]
#[command(long_about = "Reads an ESLint JSON report and prints a summary block for \
    every file with at least one error or warning.\n\n\
    Exit codes:\n  \
    0 - Report summarized\n  \
    2 - Report missing, unreadable, or malformed")]
pub struct Cli {
    /// Path to the ESLint JSON report
    pub report: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
