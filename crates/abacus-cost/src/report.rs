//! Structured cost report types.

use std::collections::BTreeMap;

use abacus_ledger::UsageEvent;

/// Spend and token accumulators for one model within the report window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelSpend {
    /// Cost in USD summed across the model's events.
    pub cost: f64,
    /// Input tokens summed across the model's events.
    pub tokens_input: u64,
    /// Output tokens summed across the model's events.
    pub tokens_output: u64,
}

impl ModelSpend {
    /// Total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.tokens_input + self.tokens_output
    }
}

/// Aggregate spend over a trailing window of calendar days.
///
/// Produced by the cost accountant only when the window holds at least one
/// event; an empty window yields no report at all.
#[derive(Debug, Clone)]
pub struct CostReport {
    /// Width of the trailing window, in calendar days.
    pub window_days: u32,
    /// Total cost in USD across all events in the window.
    pub total_cost: f64,
    /// Total input tokens across all events in the window.
    pub total_input: u64,
    /// Total output tokens across all events in the window.
    pub total_output: u64,
    /// Per-model accumulators, keyed by model identifier.
    pub models: BTreeMap<String, ModelSpend>,
    /// The last (at most) five events in the window, in append order.
    pub recent: Vec<UsageEvent>,
}

impl CostReport {
    /// Total tokens (input + output) across the window.
    pub fn total_tokens(&self) -> u64 {
        self.total_input + self.total_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_spend_total_tokens() {
        let spend = ModelSpend {
            cost: 0.42,
            tokens_input: 1200,
            tokens_output: 480,
        };
        assert_eq!(spend.total_tokens(), 1680);
    }

    #[test]
    fn test_report_total_tokens() {
        let report = CostReport {
            window_days: 7,
            total_cost: 1.5,
            total_input: 10_000,
            total_output: 2_500,
            models: BTreeMap::new(),
            recent: Vec::new(),
        };
        assert_eq!(report.total_tokens(), 12_500);
    }
}
