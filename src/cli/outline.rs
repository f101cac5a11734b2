//! Outline command handler.
//!
//! Implements the `outline` subcommand for inspecting one document's
//! derived structure without comparing it against anything.

use super::{exit_codes, OutputTarget};
use crate::error::Result;
use crate::ingest::load_document;
use crate::outline::IdStrategy;
use crate::reports::{create_reporter_with_options, ReportFormat};
use std::path::PathBuf;
use tracing::info;

/// Resolved settings for one outline run.
pub struct OutlineOptions {
    pub document: PathBuf,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub id_strategy: IdStrategy,
    pub use_color: bool,
    pub quiet: bool,
}

/// Run the outline command, returning the desired exit code.
pub fn run_outline(options: OutlineOptions) -> Result<i32> {
    let document = load_document(&options.document, options.id_strategy)?;

    if !options.quiet {
        info!(
            name = %document.name,
            format = %document.format,
            roots = document.tree.len(),
            "document outlined"
        );
    }

    let output_target = OutputTarget::from_option(options.output_file);
    let use_color = options.use_color && matches!(output_target, OutputTarget::Stdout);
    let reporter = create_reporter_with_options(options.format, use_color);
    let report = reporter.generate_outline_report(&document).map_err(|e| {
        crate::error::OutlineDiffError::report(
            "rendering outline report",
            crate::error::ReportErrorKind::WriteError(e.to_string()),
        )
    })?;
    output_target.write(&report)?;

    Ok(exit_codes::SUCCESS)
}
