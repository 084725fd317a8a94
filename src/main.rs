use clap::Parser;

use lint_digest::cli::Cli;
use lint_digest::report::LintReport;
use lint_digest::summary::TextSummarizer;
use lint_digest::{EXIT_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> lint_digest::Result<()> {
    // 1. Load and parse the report
    let report = LintReport::load(&cli.report)?;

    // 2. Format flagged entries
    let output = TextSummarizer.summarize(&report);

    // 3. Write to stdout
    print!("{output}");

    Ok(())
}
