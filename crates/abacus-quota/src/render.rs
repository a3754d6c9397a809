//! Plain-text rendering of the quota report.
//!
//! Presentation only: which models to show, exhaustion icons, and the savings
//! estimate all live here, not in the accountant.

use abacus_core::fmt::group_thousands;
use abacus_quota::quotas::DEFAULT_DISPLAY_MODELS;
use abacus_quota::{ModelUsage, QuotaReport};

/// Days-remaining threshold at which the report warns about expiry.
const EXPIRY_WARNING_DAYS: i64 = 7;

/// Estimated list price per million tokens, for the savings line.
const PRICE_PER_MILLION_USD: f64 = 0.5;

/// Print the full free-quota report to stdout.
pub fn print_quota_report(report: &QuotaReport) {
    println!("🎁 Qwen Free Quota Tracker");
    println!("{}", "=".repeat(50));
    println!("📅 Activation: {}", report.activation.format("%Y-%m-%d"));
    println!("📅 Expires: {}", report.expiry.format("%Y-%m-%d"));
    println!("⏰ Days remaining: {}", report.days_remaining);
    println!();

    println!("📊 Model Usage (against 1M free tokens):");
    println!("{}", "-".repeat(60));

    for row in report.usage.iter().filter(|row| displayed(row)) {
        println!("{}", model_line(row));
    }

    println!("{}", "-".repeat(60));
    let total_used = report.total_used();
    println!("📈 Total tokens used: {}", group_thousands(total_used));
    println!(
        "💰 Money saved: ${:.2} (estimated)",
        total_used as f64 / 1_000_000.0 * PRICE_PER_MILLION_USD
    );

    if report.days_remaining <= EXPIRY_WARNING_DAYS {
        println!(
            "⚠️  Expires soon! Days remaining: {}",
            report.days_remaining
        );
    }
}

/// A model is shown when it has usage or sits on the always-shown list.
fn displayed(row: &ModelUsage) -> bool {
    row.total() > 0 || DEFAULT_DISPLAY_MODELS.contains(&row.model.as_str())
}

fn model_line(row: &ModelUsage) -> String {
    let status = if row.remaining() > 0 { "✅" } else { "❌" };
    format!(
        "{} {:<25} {:>8} / {} ({:>5.1}%) {:>8} remaining",
        status,
        row.model,
        group_thousands(row.total()),
        group_thousands(row.quota),
        row.percent_used(),
        group_thousands(row.remaining()),
    )
}
