//! # abacus-ledger
//!
//! Append-only usage event log shared by the abacus trackers.
//!
//! This crate provides:
//! - [`UsageEvent`] - One logged API call's token/cost attribution
//! - [`UsageLog`] - Line-delimited JSON persistence with per-line read outcomes
//!
//! ## Example
//!
//! ```no_run
//! use abacus_ledger::{UsageEvent, UsageLog};
//!
//! fn main() -> abacus_ledger::Result<()> {
//!     let log = UsageLog::new("/tmp/usage.json");
//!     log.append(&UsageEvent::new("qwen-max", 1200, 480))?;
//!
//!     for event in log.read_events()? {
//!         println!("{}: {} tokens", event.model, event.total_tokens());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod event;
pub mod store;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use event::UsageEvent;
pub use store::{LineOutcome, Records, UsageLog};
