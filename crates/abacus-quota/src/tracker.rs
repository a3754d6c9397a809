//! Free-quota accounting over the usage log.
//!
//! The tracker is a stateless request/response service over two files in the
//! configuration directory: the activation record and the free-tier usage
//! log. Every operation re-reads from disk; nothing is cached between calls.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use abacus_ledger::{UsageEvent, UsageLog};

use crate::error::{QuotaError, Result};
use crate::quotas::{FREE_QUOTA_TOKENS, FREE_TIER_MODELS, QUOTA_WINDOW_DAYS};
use crate::report::{ModelUsage, QuotaReport};

/// File holding free-tier usage events, one JSON record per line.
pub const FREE_QUOTA_FILE: &str = "free_quota_usage.json";

/// File holding the activation instant as a single RFC 3339 value.
pub const ACTIVATION_FILE: &str = "activation_date.txt";

/// Tracks free-tier token usage against the 180-day activation window.
///
/// The storage directory is injected at construction so tests can point the
/// tracker at a temporary location instead of the real home directory.
pub struct QuotaTracker {
    config_dir: PathBuf,
    log: UsageLog,
}

impl QuotaTracker {
    /// Open a tracker rooted at `config_dir`, creating the directory (with
    /// parents) and the activation record on first use.
    pub fn open(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        abacus_core::ensure_dir(&config_dir)?;

        let tracker = Self {
            log: UsageLog::new(config_dir.join(FREE_QUOTA_FILE)),
            config_dir,
        };
        tracker.ensure_activation()?;
        Ok(tracker)
    }

    fn activation_path(&self) -> PathBuf {
        self.config_dir.join(ACTIVATION_FILE)
    }

    /// Stamp the activation record with the current instant if none exists.
    /// An existing record is left untouched, whatever it holds.
    pub fn ensure_activation(&self) -> Result<()> {
        let path = self.activation_path();
        if path.exists() {
            return Ok(());
        }
        let now = Utc::now();
        std::fs::write(&path, now.to_rfc3339())?;
        info!(activation = %now, "started free-quota tracking window");
        Ok(())
    }

    /// Read and parse the activation instant.
    pub fn activation(&self) -> Result<DateTime<Utc>> {
        let path = self.activation_path();
        let raw = std::fs::read_to_string(&path)?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| QuotaError::ActivationParse {
                path,
                message: e.to_string(),
            })
    }

    /// Append one zero-cost usage event and return it.
    pub fn log_usage(
        &self,
        model: &str,
        tokens_input: u64,
        tokens_output: u64,
    ) -> Result<UsageEvent> {
        let event = UsageEvent::new(model, tokens_input, tokens_output);
        self.log.append(&event)?;
        debug!(model, total = event.total_tokens(), "logged free-quota usage");
        Ok(event)
    }

    /// Aggregate usage against the quota table as of the current instant.
    pub fn compute_usage(&self) -> Result<QuotaReport> {
        self.compute_usage_at(Utc::now())
    }

    /// Aggregate usage against the quota table as of `now`.
    ///
    /// Days remaining counts whole calendar days from `now` to expiry,
    /// clamped at zero once the window has closed.
    pub fn compute_usage_at(&self, now: DateTime<Utc>) -> Result<QuotaReport> {
        let activation = self.activation()?;
        let expiry = activation + Duration::days(QUOTA_WINDOW_DAYS);
        let days_remaining = (expiry.date_naive() - now.date_naive())
            .num_days()
            .max(0);

        let mut usage: Vec<ModelUsage> = FREE_TIER_MODELS
            .iter()
            .map(|model| ModelUsage::new(*model, FREE_QUOTA_TOKENS))
            .collect();

        for event in self.log.read_events()? {
            // Unknown models are tolerated in the log but never tallied
            if let Some(row) = usage.iter_mut().find(|row| row.model == event.model) {
                row.tokens_input += event.tokens_input;
                row.tokens_output += event.tokens_output;
            }
        }

        debug!(
            days_remaining,
            events_tallied = usage.iter().filter(|row| row.total() > 0).count(),
            "computed quota report"
        );

        Ok(QuotaReport {
            activation,
            expiry,
            days_remaining,
            usage,
        })
    }

    /// Delete the usage log and restart the activation window at the current
    /// instant. Both effects happen in one call so historical aggregates and
    /// the window reset together.
    pub fn reset(&self) -> Result<()> {
        self.log.remove()?;
        let now = Utc::now();
        std::fs::write(self.activation_path(), now.to_rfc3339())?;
        info!(activation = %now, "reset free-quota tracking");
        Ok(())
    }
}
