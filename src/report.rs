use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{LintDigestError, Result};

/// A single diagnostic emitted by the linter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// 1-based line number in the linted source file.
    pub line: u64,

    pub message: String,

    /// Identifier of the violated rule; null or absent for messages the
    /// linter cannot attribute to a rule (e.g. parse errors).
    #[serde(default)]
    pub rule_id: Option<String>,
}

/// Per-file entry of a lint report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_path: String,
    pub error_count: u64,
    pub warning_count: u64,
    pub messages: Vec<LintMessage>,
}

impl FileEntry {
    /// Returns true if the entry carries at least one error or warning.
    #[must_use]
    pub const fn has_issues(&self) -> bool {
        self.error_count > 0 || self.warning_count > 0
    }
}

/// An ordered lint report as produced by `eslint --format json`.
///
/// Entry order is preserved from the input document and only affects
/// display order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct LintReport {
    pub entries: Vec<FileEntry>,
}

impl LintReport {
    /// Loads a report from a JSON file.
    ///
    /// The count fields are not cross-checked against the message list;
    /// the report is trusted as written.
    ///
    /// # Errors
    /// Returns `FileRead` if the path cannot be read, and `Parse` if the
    /// content is not a JSON array of file entries (missing required
    /// fields and wrong types included).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LintDigestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| LintDigestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Entries with a nonzero error or warning count, in input order.
    pub fn flagged(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| e.has_issues())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
