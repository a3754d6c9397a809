//! abacus-cost - API spend tracker for Qwen models
//!
//! ## Usage
//!
//! ```bash
//! # Show the 7-day spend report
//! abacus-cost
//!
//! # Show a 30-day report
//! abacus-cost --report 30
//!
//! # Log a costed usage event (cost defaults to 0)
//! abacus-cost --log qwen-max 1200 480 0.0125
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use abacus_core::logging;
use abacus_cost::{CostTracker, DEFAULT_WINDOW_DAYS};

mod render;

/// Track API spend for Qwen model usage.
#[derive(Parser, Debug)]
#[command(name = "abacus-cost")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show the report for the last DAYS calendar days (default 7)
    #[arg(long, value_name = "DAYS", num_args = 0..=1, default_missing_value = "7")]
    report: Option<u32>,

    /// Log one usage event: MODEL TOKENS_INPUT TOKENS_OUTPUT [COST]
    #[arg(
        long,
        num_args = 3..=4,
        value_names = ["MODEL", "TOKENS_INPUT", "TOKENS_OUTPUT", "COST"]
    )]
    log: Option<Vec<String>>,

    /// Enable verbose logging (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("cost tracker failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config_dir = abacus_core::default_config_dir()?;
    let tracker = CostTracker::open(config_dir)?;

    if let Some(args) = &cli.log {
        let model = &args[0];
        let tokens_input: u64 = args[1]
            .parse()
            .with_context(|| format!("invalid token count: {}", args[1]))?;
        let tokens_output: u64 = args[2]
            .parse()
            .with_context(|| format!("invalid token count: {}", args[2]))?;
        let cost: f64 = match args.get(3) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid cost: {raw}"))?,
            None => 0.0,
        };

        tracker.log(model, tokens_input, tokens_output, cost)?;
        println!("✅ Logged usage for {model}: ${cost:.4}");
        return Ok(());
    }

    let window_days = cli.report.unwrap_or(DEFAULT_WINDOW_DAYS);
    match tracker.report(window_days)? {
        Some(report) => render::print_cost_report(&report),
        None => render::print_no_data(),
    }
    Ok(())
}
