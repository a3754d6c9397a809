//! Spend accounting over the usage log.
//!
//! Stateless request/response service over `usage.json`: every summary
//! re-reads the log from the start, filters by a trailing window of calendar
//! days, and aggregates in memory. Nothing is cached between calls.

use std::path::PathBuf;

use chrono::{Duration, NaiveDate, Utc};
use tracing::debug;

use abacus_ledger::{UsageEvent, UsageLog};

use crate::error::Result;
use crate::provider::ProviderConfig;
use crate::report::CostReport;

/// File holding costed usage events, one JSON record per line.
pub const USAGE_FILE: &str = "usage.json";

/// Trailing window applied when no explicit width is given.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Number of events shown in the report's recent-activity view.
pub const RECENT_EVENTS: usize = 5;

/// Tracks API spend over a trailing window of calendar days.
///
/// The storage directory is injected at construction so tests can point the
/// tracker at a temporary location instead of the real home directory.
pub struct CostTracker {
    log: UsageLog,
    provider: ProviderConfig,
}

impl CostTracker {
    /// Open a tracker rooted at `config_dir`, creating the directory (with
    /// parents) if absent. Provider settings are read from the environment.
    pub fn open(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        abacus_core::ensure_dir(&config_dir)?;

        Ok(Self {
            log: UsageLog::new(config_dir.join(USAGE_FILE)),
            provider: ProviderConfig::from_env(),
        })
    }

    /// Replace the provider settings (used by tests).
    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = provider;
        self
    }

    /// The provider settings this tracker was opened with.
    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    /// Append one costed usage event and return it.
    pub fn log(
        &self,
        model: &str,
        tokens_input: u64,
        tokens_output: u64,
        cost: f64,
    ) -> Result<UsageEvent> {
        let event = UsageEvent::new(model, tokens_input, tokens_output).with_cost(cost);
        self.log.append(&event)?;
        debug!(model, cost, "logged costed usage");
        Ok(event)
    }

    /// Events from the last `window_days` calendar days, in append order.
    pub fn summarize(&self, window_days: u32) -> Result<Vec<UsageEvent>> {
        self.summarize_at(window_days, Utc::now().date_naive())
    }

    /// Events whose calendar date is on or after `today - window_days`.
    ///
    /// The comparison is by date, not instant, so an event logged any time on
    /// the boundary day is included. Append order is preserved.
    pub fn summarize_at(&self, window_days: u32, today: NaiveDate) -> Result<Vec<UsageEvent>> {
        let cutoff = today - Duration::days(i64::from(window_days));
        let events: Vec<UsageEvent> = self
            .log
            .read_events()?
            .into_iter()
            .filter(|event| event.timestamp.date_naive() >= cutoff)
            .collect();

        debug!(window_days, count = events.len(), "summarized usage window");
        Ok(events)
    }

    /// Aggregate spend over the last `window_days` calendar days.
    ///
    /// Returns `None` when the window holds no events.
    pub fn report(&self, window_days: u32) -> Result<Option<CostReport>> {
        self.report_at(window_days, Utc::now().date_naive())
    }

    /// Aggregate spend over the window ending at `today`.
    pub fn report_at(&self, window_days: u32, today: NaiveDate) -> Result<Option<CostReport>> {
        let events = self.summarize_at(window_days, today)?;
        if events.is_empty() {
            return Ok(None);
        }

        let mut report = CostReport {
            window_days,
            total_cost: 0.0,
            total_input: 0,
            total_output: 0,
            models: Default::default(),
            recent: Vec::new(),
        };

        for event in &events {
            let cost = event.cost.unwrap_or(0.0);
            report.total_cost += cost;
            report.total_input += event.tokens_input;
            report.total_output += event.tokens_output;

            let spend = report.models.entry(event.model.clone()).or_default();
            spend.cost += cost;
            spend.tokens_input += event.tokens_input;
            spend.tokens_output += event.tokens_output;
        }

        let start = events.len().saturating_sub(RECENT_EVENTS);
        report.recent = events[start..].to_vec();

        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    fn backdated(tracker: &CostTracker, model: &str, days_ago: i64, cost: f64) {
        let timestamp = fixed_today()
            .and_hms_opt(10, 0, 0)
            .unwrap()
            .and_utc()
            - Duration::days(days_ago);
        let event = UsageEvent::new(model, 100, 50)
            .with_cost(cost)
            .with_timestamp(timestamp);
        tracker.log.append(&event).unwrap();
    }

    fn open_tracker(dir: &TempDir) -> CostTracker {
        CostTracker::open(dir.path())
            .unwrap()
            .with_provider(ProviderConfig::default())
    }

    #[test]
    fn test_window_boundary_day_is_included() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        backdated(&tracker, "qwen-max", 7, 0.10);
        backdated(&tracker, "qwen-max", 8, 0.20);

        let events = tracker.summarize_at(7, fixed_today()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].cost, Some(0.10));
    }

    #[test]
    fn test_old_events_fall_out_of_the_window() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        backdated(&tracker, "qwen-max", 10, 0.50);
        backdated(&tracker, "qwen-max", 2, 0.25);

        let report = tracker.report_at(7, fixed_today()).unwrap().unwrap();
        assert!((report.total_cost - 0.25).abs() < 1e-9);
        assert_eq!(report.total_input, 100);
        assert_eq!(report.total_output, 50);
        assert_eq!(report.recent.len(), 1);
    }

    #[test]
    fn test_report_groups_by_model() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        backdated(&tracker, "qwen-max", 1, 0.10);
        backdated(&tracker, "qwen-plus", 2, 0.05);
        backdated(&tracker, "qwen-max", 3, 0.15);

        let report = tracker.report_at(7, fixed_today()).unwrap().unwrap();
        assert_eq!(report.models.len(), 2);

        let max = &report.models["qwen-max"];
        assert!((max.cost - 0.25).abs() < 1e-9);
        assert_eq!(max.tokens_input, 200);

        let plus = &report.models["qwen-plus"];
        assert!((plus.cost - 0.05).abs() < 1e-9);
        assert_eq!(report.total_tokens(), 450);
    }

    #[test]
    fn test_recent_keeps_last_five_in_order() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        for i in 0..7 {
            let event = UsageEvent::new("qwen-max", i, 0)
                .with_cost(0.01)
                .with_timestamp(
                    fixed_today().and_hms_opt(9, i as u32, 0).unwrap().and_utc(),
                );
            tracker.log.append(&event).unwrap();
        }

        let report = tracker.report_at(7, fixed_today()).unwrap().unwrap();
        assert_eq!(report.recent.len(), 5);
        assert_eq!(report.recent[0].tokens_input, 2);
        assert_eq!(report.recent[4].tokens_input, 6);
    }

    #[test]
    fn test_empty_window_yields_no_report() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        // No file at all
        assert!(tracker.report_at(7, fixed_today()).unwrap().is_none());

        // Events exist, but all outside the window
        backdated(&tracker, "qwen-max", 30, 1.0);
        assert!(tracker.report_at(7, fixed_today()).unwrap().is_none());
    }

    #[test]
    fn test_log_writes_costed_record() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        tracker.log("qwen-max", 1200, 480, 0.0125).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(USAGE_FILE)).unwrap();
        assert!(raw.contains("\"cost\":0.0125"));
        assert!(raw.contains("\"tokens_input\":1200"));
    }

    #[test]
    fn test_summarize_defaults_preserve_append_order() {
        let dir = TempDir::new().unwrap();
        let tracker = open_tracker(&dir);

        backdated(&tracker, "qwen-plus", 3, 0.01);
        backdated(&tracker, "qwen-max", 1, 0.02);
        backdated(&tracker, "qwen-plus", 2, 0.03);

        let events = tracker.summarize_at(7, fixed_today()).unwrap();
        let costs: Vec<_> = events.iter().map(|e| e.cost.unwrap()).collect();
        assert_eq!(costs, vec![0.01, 0.02, 0.03]);
    }
}
