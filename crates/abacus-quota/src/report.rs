//! Structured quota report types.
//!
//! These are the accountant's output: plain data the renderer can format
//! without recomputing anything. Presentation decisions (which models to
//! show, exhaustion icons) stay out of this module.

use chrono::{DateTime, Utc};

/// Token usage for one free-tier model, tallied against its allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelUsage {
    /// Model identifier.
    pub model: String,
    /// Input tokens summed across all logged events for this model.
    pub tokens_input: u64,
    /// Output tokens summed across all logged events for this model.
    pub tokens_output: u64,
    /// Free-token allowance for this model.
    pub quota: u64,
}

impl ModelUsage {
    /// A zero-usage row for `model` with the given allowance.
    pub fn new(model: impl Into<String>, quota: u64) -> Self {
        Self {
            model: model.into(),
            tokens_input: 0,
            tokens_output: 0,
            quota,
        }
    }

    /// Total tokens used (input + output).
    pub fn total(&self) -> u64 {
        self.tokens_input + self.tokens_output
    }

    /// Tokens left in the allowance, never negative.
    pub fn remaining(&self) -> u64 {
        self.quota.saturating_sub(self.total())
    }

    /// Share of the allowance used, as a percentage.
    pub fn percent_used(&self) -> f64 {
        if self.quota == 0 {
            return 0.0;
        }
        (self.total() as f64 / self.quota as f64) * 100.0
    }
}

/// Aggregate free-quota usage against the activation window.
#[derive(Debug, Clone)]
pub struct QuotaReport {
    /// When tracking was first activated.
    pub activation: DateTime<Utc>,
    /// When the free-quota window closes (activation + 180 days).
    pub expiry: DateTime<Utc>,
    /// Whole calendar days until expiry, never negative.
    pub days_remaining: i64,
    /// Per-model tallies, one row per quota-table model, in display order.
    pub usage: Vec<ModelUsage>,
}

impl QuotaReport {
    /// Look up the tally for one model.
    pub fn usage_for(&self, model: &str) -> Option<&ModelUsage> {
        self.usage.iter().find(|row| row.model == model)
    }

    /// Total tokens used across every quota-table model.
    pub fn total_used(&self) -> u64 {
        self.usage.iter().map(|row| row.total()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_saturates_at_zero() {
        let mut row = ModelUsage::new("qwen-max", 1_000);
        row.tokens_input = 900;
        row.tokens_output = 400;
        assert_eq!(row.total(), 1_300);
        assert_eq!(row.remaining(), 0);
    }

    #[test]
    fn test_percent_used() {
        let mut row = ModelUsage::new("qwen-max", 1_000_000);
        row.tokens_input = 200_000;
        row.tokens_output = 50_000;
        assert!((row.percent_used() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_used_with_zero_quota() {
        let row = ModelUsage::new("test", 0);
        assert_eq!(row.percent_used(), 0.0);
    }

    #[test]
    fn test_report_lookup_and_total() {
        let now = Utc::now();
        let mut first = ModelUsage::new("qwen-max", 1_000_000);
        first.tokens_input = 1_000;
        first.tokens_output = 500;
        let second = ModelUsage::new("qwen-plus", 1_000_000);

        let report = QuotaReport {
            activation: now,
            expiry: now,
            days_remaining: 180,
            usage: vec![first, second],
        };

        assert_eq!(report.usage_for("qwen-max").unwrap().total(), 1_500);
        assert!(report.usage_for("gpt-4").is_none());
        assert_eq!(report.total_used(), 1_500);
    }
}
