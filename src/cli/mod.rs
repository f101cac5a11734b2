//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for one subcommand
//! and returns the desired process exit code.

mod compare;
mod outline;

pub use compare::{run_compare, CompareOptions};
pub use outline::{run_outline, OutlineOptions};

use std::io::Write;
use std::path::PathBuf;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
}

/// Where a rendered report goes.
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Write a rendered report to this target.
    pub fn write(&self, report: &str) -> crate::error::Result<()> {
        match self {
            Self::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{report}").map_err(crate::error::OutlineDiffError::from)
            }
            Self::File(path) => {
                std::fs::write(path, report)
                    .map_err(|e| crate::error::OutlineDiffError::io(path.clone(), e))
            }
        }
    }
}
