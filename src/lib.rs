pub mod cli;
pub mod error;
pub mod report;
pub mod summary;

pub use error::{LintDigestError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;
