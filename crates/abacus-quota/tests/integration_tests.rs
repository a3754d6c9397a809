//! Integration tests for abacus-quota with mock log files.

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use abacus_ledger::{LineOutcome, UsageLog};
use abacus_quota::quotas::FREE_TIER_MODELS;
use abacus_quota::{ACTIVATION_FILE, FREE_QUOTA_FILE, QuotaTracker};

/// Free-quota log content with a corrupt line wedged between valid records.
const MIXED_LOG_CONTENT: &str = r#"{"timestamp":"2026-03-01T10:00:00Z","model":"qwen-max","tokens_input":1000,"tokens_output":500,"project":"demo"}
this line is not json
{"timestamp":"2026-03-02T11:30:00Z","model":"qwen-plus","tokens_input":200,"tokens_output":80,"project":"demo"}
{"timestamp":"2026-03-03T09:15:00Z","model":"qwen-max","tokens_input":50,"tokens_output":25,"project":"other"}
"#;

fn backdate_activation(dir: &TempDir, instant: DateTime<Utc>) {
    std::fs::write(dir.path().join(ACTIVATION_FILE), instant.to_rfc3339()).unwrap();
}

#[test]
fn test_fresh_install_reports_empty_usage() {
    let dir = TempDir::new().unwrap();
    let tracker = QuotaTracker::open(dir.path()).unwrap();

    let report = tracker.compute_usage().unwrap();

    assert!(dir.path().join(ACTIVATION_FILE).exists());
    assert_eq!(report.usage.len(), FREE_TIER_MODELS.len());
    assert_eq!(report.total_used(), 0);
    assert!(report.days_remaining > 0);
    // No usage file until something is logged
    assert!(!dir.path().join(FREE_QUOTA_FILE).exists());
}

#[test]
fn test_interleaved_models_tally_independently() {
    let dir = TempDir::new().unwrap();
    let tracker = QuotaTracker::open(dir.path()).unwrap();

    tracker.log_usage("qwen-max", 1000, 500).unwrap();
    tracker.log_usage("qwen-plus", 300, 100).unwrap();
    tracker.log_usage("qwen-max", 50, 25).unwrap();
    tracker.log_usage("qwen-turbo", 10, 0).unwrap();
    tracker.log_usage("qwen-plus", 700, 400).unwrap();

    let report = tracker.compute_usage().unwrap();

    let max = report.usage_for("qwen-max").unwrap();
    assert_eq!(max.tokens_input, 1050);
    assert_eq!(max.tokens_output, 525);
    assert_eq!(max.total(), 1575);

    let plus = report.usage_for("qwen-plus").unwrap();
    assert_eq!(plus.total(), 1500);

    let turbo = report.usage_for("qwen-turbo").unwrap();
    assert_eq!(turbo.total(), 10);

    assert_eq!(report.total_used(), 1575 + 1500 + 10);
}

#[test]
fn test_corrupt_line_skipped_and_counted() {
    let dir = TempDir::new().unwrap();
    let tracker = QuotaTracker::open(dir.path()).unwrap();

    let log_path = dir.path().join(FREE_QUOTA_FILE);
    std::fs::write(&log_path, MIXED_LOG_CONTENT).unwrap();

    // Aggregation sees only the valid records
    let report = tracker.compute_usage().unwrap();
    assert_eq!(report.usage_for("qwen-max").unwrap().total(), 1575);
    assert_eq!(report.usage_for("qwen-plus").unwrap().total(), 280);

    // The per-line read reports exactly one skip, at the right line
    let log = UsageLog::new(&log_path);
    let skipped: Vec<_> = log
        .records()
        .unwrap()
        .map(|outcome| outcome.unwrap())
        .filter(|outcome| matches!(outcome, LineOutcome::Skipped { .. }))
        .collect();
    assert_eq!(skipped.len(), 1);
    assert!(matches!(
        skipped[0],
        LineOutcome::Skipped { line_number: 2, .. }
    ));
}

#[test]
fn test_reset_restarts_window_and_history() {
    let dir = TempDir::new().unwrap();
    let tracker = QuotaTracker::open(dir.path()).unwrap();

    tracker.log_usage("qwen-max", 500_000, 250_000).unwrap();
    backdate_activation(&dir, Utc::now() - Duration::days(100));

    tracker.reset().unwrap();
    let report = tracker.compute_usage().unwrap();

    assert_eq!(report.days_remaining, 180);
    assert_eq!(report.total_used(), 0);
    for row in &report.usage {
        assert_eq!(row.remaining(), row.quota);
    }
}

#[test]
fn test_expired_window_never_goes_negative() {
    let dir = TempDir::new().unwrap();
    let tracker = QuotaTracker::open(dir.path()).unwrap();

    let activation = "2026-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    backdate_activation(&dir, activation);

    let report = tracker
        .compute_usage_at(activation + Duration::days(181))
        .unwrap();
    assert_eq!(report.days_remaining, 0);
}

#[test]
fn test_logged_records_are_line_delimited_json_without_cost() {
    let dir = TempDir::new().unwrap();
    let tracker = QuotaTracker::open(dir.path()).unwrap();

    tracker.log_usage("qwen-max", 1, 2).unwrap();
    tracker.log_usage("qwen-plus", 3, 4).unwrap();

    let raw = std::fs::read_to_string(dir.path().join(FREE_QUOTA_FILE)).unwrap();
    let lines: Vec<_> = raw.lines().collect();
    assert_eq!(lines.len(), 2);

    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("timestamp").is_some());
        assert!(value.get("model").is_some());
        assert!(value.get("project").is_some());
        assert!(value.get("cost").is_none());
    }
}
