//! # abacus-quota
//!
//! Free-tier quota accounting for Qwen model usage.
//!
//! This crate provides:
//! - [`QuotaTracker`] - Activation window, usage logging, and aggregation
//! - [`QuotaReport`] - Structured per-model usage against the quota table
//! - [`quotas`] - The embedded free-tier quota configuration
//!
//! ## Example
//!
//! ```no_run
//! use abacus_quota::QuotaTracker;
//!
//! fn main() -> abacus_quota::Result<()> {
//!     let tracker = QuotaTracker::open("/tmp/abacus")?;
//!     tracker.log_usage("qwen-max", 1200, 480)?;
//!
//!     let report = tracker.compute_usage()?;
//!     println!("{} days remaining", report.days_remaining);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod quotas;
pub mod report;
pub mod tracker;

// Re-export main types for convenience
pub use error::{QuotaError, Result};
pub use report::{ModelUsage, QuotaReport};
pub use tracker::{ACTIVATION_FILE, FREE_QUOTA_FILE, QuotaTracker};
