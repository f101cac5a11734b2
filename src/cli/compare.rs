//! Compare command handler.
//!
//! Implements the `compare` subcommand: outline both documents, diff the
//! target against the template, render a report, and decide the exit code.

use super::{exit_codes, OutputTarget};
use crate::diff::CompareEngine;
use crate::error::Result;
use crate::ingest::load_document;
use crate::outline::IdStrategy;
use crate::reports::{create_reporter_with_options, ReportFormat};
use std::path::PathBuf;
use tracing::info;

/// Resolved settings for one compare run.
pub struct CompareOptions {
    /// Path to the template (reference) document.
    pub template: PathBuf,
    /// Path to the target document under review.
    pub target: PathBuf,
    pub format: ReportFormat,
    /// Report destination (stdout if not specified).
    pub output_file: Option<PathBuf>,
    pub id_strategy: IdStrategy,
    /// Exit non-zero when the conformance score is below this value.
    pub fail_below: Option<u32>,
    pub use_color: bool,
    pub quiet: bool,
}

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_compare(options: CompareOptions) -> Result<i32> {
    let template = load_document(&options.template, options.id_strategy)?;
    let target = load_document(&options.target, options.id_strategy)?;

    let result = CompareEngine::new().compare(&template, &target);

    if !options.quiet {
        info!(
            score = result.score,
            matched = result.summary.matched,
            missing = result.summary.missing,
            extra = result.summary.extra,
            changed = result.summary.changed,
            "comparison complete"
        );
    }

    let output_target = OutputTarget::from_option(options.output_file);
    // File output never carries ANSI codes
    let use_color = options.use_color && matches!(output_target, OutputTarget::Stdout);
    let reporter = create_reporter_with_options(options.format, use_color);
    let report = reporter
        .generate_compare_report(&result, &template, &target)
        .map_err(|e| {
            crate::error::OutlineDiffError::report(
                "rendering compare report",
                crate::error::ReportErrorKind::WriteError(e.to_string()),
            )
        })?;
    output_target.write(&report)?;

    Ok(determine_exit_code(options.fail_below, result.score))
}

/// Exit non-zero only when a threshold is set and the score misses it.
const fn determine_exit_code(fail_below: Option<u32>, score: u32) -> i32 {
    match fail_below {
        Some(threshold) if score < threshold => exit_codes::BELOW_THRESHOLD,
        _ => exit_codes::SUCCESS,
    }
}
