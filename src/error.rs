use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintDigestError {
    #[error("Failed to read report: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse report {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LintDigestError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
