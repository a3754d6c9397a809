//! Usage event data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged API call's token and cost attribution.
///
/// Events are immutable once written: one record per call, appended to the
/// log and never updated. The quota tracker logs events without a cost; the
/// cost tracker populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    /// When the call was logged.
    pub timestamp: DateTime<Utc>,
    /// Model identifier, e.g. "qwen-max".
    pub model: String,
    /// Input (prompt) tokens consumed.
    pub tokens_input: u64,
    /// Output (completion) tokens produced.
    pub tokens_output: u64,
    /// Cost in USD. Absent for free-quota events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Project name, taken from the working directory at log time.
    pub project: String,
}

impl UsageEvent {
    /// Create an event stamped with the current instant and project.
    pub fn new(model: impl Into<String>, tokens_input: u64, tokens_output: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            model: model.into(),
            tokens_input,
            tokens_output,
            cost: None,
            project: current_project(),
        }
    }

    /// Set the cost in USD.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Override the timestamp (used by tests to backdate events).
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Override the project name.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Total tokens for this event (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.tokens_input + self.tokens_output
    }
}

/// Name of the current working directory, or "unknown" when it has none
/// (e.g. the filesystem root) or cannot be read.
fn current_project() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unknown".to_string())
}
