//! Entrypoint: parse paths from the CLI, run one batch pass, print the
//! priority tally to stdout.

use alert_triage::logging::StructuredLogger;
use alert_triage::AlertProcessor;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Score a batch of security alerts and classify each into a priority tier.
#[derive(Parser, Debug)]
#[command(name = "alert-triage", about = "Risk scoring and priority triage for security alerts")]
struct Cli {
    /// Path to the JSON scoring config
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Path to the input alerts CSV
    #[arg(long, default_value = "sample_input.csv")]
    input: PathBuf,

    /// Path for the scored output CSV
    #[arg(long, default_value = "sample_output.csv")]
    output: PathBuf,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    StructuredLogger::init(args.json_logs, &args.log_level);

    let outcome = AlertProcessor::run(&args.config, &args.input, &args.output)
        .context("alert triage run failed")?;
    outcome.print_summary();

    Ok(())
}
