//! # abacus-cost
//!
//! API spend accounting for Qwen model usage.
//!
//! This crate provides:
//! - [`CostTracker`] - Costed event logging and trailing-window aggregation
//! - [`CostReport`] - Totals, per-model accumulators, and recent activity
//! - [`ProviderConfig`] - API settings read from the environment
//!
//! ## Example
//!
//! ```no_run
//! use abacus_cost::CostTracker;
//!
//! fn main() -> abacus_cost::Result<()> {
//!     let tracker = CostTracker::open("/tmp/abacus")?;
//!     tracker.log("qwen-max", 1200, 480, 0.0125)?;
//!
//!     if let Some(report) = tracker.report(7)? {
//!         println!("${:.4} over {} days", report.total_cost, report.window_days);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod provider;
pub mod report;
pub mod tracker;

// Re-export main types for convenience
pub use error::{CostError, Result};
pub use provider::ProviderConfig;
pub use report::{CostReport, ModelSpend};
pub use tracker::{CostTracker, DEFAULT_WINDOW_DAYS, USAGE_FILE};
