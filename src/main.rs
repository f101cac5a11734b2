//! outline-diff: document structure extraction and template comparison tool

use anyhow::Result;
use clap::{Parser, Subcommand};
use outline_diff::{
    cli::{run_compare, run_outline, CompareOptions, OutlineOptions},
    config::load_or_default,
    outline::IdStrategy,
    reports::ReportFormat,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "outline-diff")]
#[command(version)]
#[command(about = "Document structure extraction and template comparison", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Comparison completed (score at or above --fail-below, if set)
    1  Conformance score below --fail-below

EXAMPLES:
    # Compare a draft against a template
    outline-diff compare template.txt draft.txt

    # Machine-readable output for CI
    outline-diff compare template.json draft.json -o json --fail-below 80

    # Inspect one document's derived outline
    outline-diff outline draft.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the template (reference) document
    template: PathBuf,

    /// Path to the target document under review
    target: PathBuf,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Node id strategy for element-stream documents
    #[arg(long)]
    id_strategy: Option<IdStrategy>,

    /// Exit with code 1 if the conformance score is below this value (0-100)
    #[arg(long, value_name = "SCORE")]
    fail_below: Option<u32>,
}

/// Arguments for the `outline` subcommand
#[derive(Parser)]
struct OutlineArgs {
    /// Path to the document
    document: PathBuf,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Node id strategy for element-stream documents
    #[arg(long)]
    id_strategy: Option<IdStrategy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a target document's structure against a template
    Compare(CompareArgs),

    /// Print the derived outline of a single document
    Outline(OutlineArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (config, config_path) = load_or_default(cli.config.as_deref());
    if let Some(path) = &config_path {
        tracing::debug!("loaded config from {}", path.display());
    }

    let use_color = !cli.no_color && std::env::var_os("NO_COLOR").is_none() && config.output.color;

    // CLI flags override config file values
    match cli.command {
        Commands::Compare(args) => {
            let options = CompareOptions {
                template: args.template,
                target: args.target,
                format: args
                    .output
                    .or(config.output.format)
                    .unwrap_or(ReportFormat::Summary),
                output_file: args.output_file,
                id_strategy: args.id_strategy.unwrap_or(config.compare.id_strategy),
                fail_below: args.fail_below.or(config.compare.fail_below),
                use_color,
                quiet: cli.quiet,
            };

            let exit_code = run_compare(options)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Outline(args) => {
            let options = OutlineOptions {
                document: args.document,
                format: args
                    .output
                    .or(config.output.format)
                    .unwrap_or(ReportFormat::Summary),
                output_file: args.output_file,
                id_strategy: args.id_strategy.unwrap_or(config.compare.id_strategy),
                use_color,
                quiet: cli.quiet,
            };

            run_outline(options)?;
            Ok(())
        }
    }
}
