use std::fmt::Write;

use crate::report::LintReport;

/// Width of the separator line printed after each file block.
const SEPARATOR_WIDTH: usize = 40;

/// Formats flagged report entries as plain text blocks.
///
/// Entries with zero errors and zero warnings produce no output at all;
/// everything else is printed in input order, messages included, with no
/// severity filtering or deduplication.
pub struct TextSummarizer;

impl TextSummarizer {
    #[must_use]
    pub fn summarize(&self, report: &LintReport) -> String {
        let mut output = String::new();

        for entry in report.flagged() {
            let _ = writeln!(output, "File: {}", entry.file_path);
            let _ = writeln!(
                output,
                "Errors: {}, Warnings: {}",
                entry.error_count, entry.warning_count
            );

            for msg in &entry.messages {
                // Rule-less messages render the JSON null spelling.
                let rule = msg.rule_id.as_deref().unwrap_or("null");
                let _ = writeln!(output, "  Line {}: {} ({rule})", msg.line, msg.message);
            }

            output.push_str(&"-".repeat(SEPARATOR_WIDTH));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
