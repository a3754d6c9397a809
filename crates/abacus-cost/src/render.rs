//! Plain-text rendering of the cost report.

use abacus_core::fmt::group_thousands;
use abacus_cost::CostReport;
use abacus_ledger::UsageEvent;

/// Print the spend report for one trailing window to stdout.
pub fn print_cost_report(report: &CostReport) {
    println!("🤖 Qwen Usage Report");
    println!("{}", "=".repeat(50));
    println!("📅 Period: Last {} days", report.window_days);
    println!("💰 Total Cost: ${:.4}", report.total_cost);
    println!(
        "📊 Total Tokens: {} ({} in, {} out)",
        group_thousands(report.total_tokens()),
        group_thousands(report.total_input),
        group_thousands(report.total_output),
    );
    println!();

    println!("📈 Model Usage:");
    for (model, spend) in &report.models {
        println!(
            "  {}: ${:.4} ({} tokens)",
            model,
            spend.cost,
            group_thousands(spend.total_tokens())
        );
    }

    println!();
    println!("📋 Recent Activity:");
    for event in &report.recent {
        println!("{}", recent_line(event));
    }
}

/// Print the explicit no-data message for an empty window.
pub fn print_no_data() {
    println!("📊 No usage data found");
}

fn recent_line(event: &UsageEvent) -> String {
    format!(
        "  {} - {}: ${:.4} ({})",
        event.timestamp.format("%m-%d %H:%M"),
        event.model,
        event.cost.unwrap_or(0.0),
        event.project,
    )
}
