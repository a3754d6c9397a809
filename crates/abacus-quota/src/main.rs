//! abacus-quota - Free quota tracker for Qwen models
//!
//! ## Usage
//!
//! ```bash
//! # Show the full quota report
//! abacus-quota
//!
//! # Log a usage event (output tokens default to 0)
//! abacus-quota --log qwen-max 1200 480
//!
//! # Restart the tracking window and clear history
//! abacus-quota --reset
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use abacus_core::fmt::group_thousands;
use abacus_core::logging;
use abacus_quota::QuotaTracker;

mod render;

/// Track free-tier token usage against Qwen model quotas.
#[derive(Parser, Debug)]
#[command(name = "abacus-quota")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Restart the tracking window and delete logged usage
    #[arg(long)]
    reset: bool,

    /// Log one usage event: MODEL TOKENS_INPUT [TOKENS_OUTPUT]
    #[arg(long, num_args = 2..=3, value_names = ["MODEL", "TOKENS_INPUT", "TOKENS_OUTPUT"])]
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
            error!("quota tracker failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config_dir = abacus_core::default_config_dir()?;
    let tracker = QuotaTracker::open(config_dir)?;

    if cli.reset {
        tracker.reset()?;
        println!("✅ Free quota tracking reset");
        return Ok(());
    }

    if let Some(args) = &cli.log {
        let model = &args[0];
        let tokens_input: u64 = args[1]
            .parse()
            .with_context(|| format!("invalid token count: {}", args[1]))?;
        let tokens_output: u64 = match args.get(2) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid token count: {raw}"))?,
            None => 0,
        };

        let event = tracker.log_usage(model, tokens_input, tokens_output)?;
        println!(
            "✅ Logged usage for {}: {} tokens",
            model,
            group_thousands(event.total_tokens())
        );
        return Ok(());
    }

    render::print_quota_report(&tracker.compute_usage()?);
    Ok(())
}
