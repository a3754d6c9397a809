//! # abacus-core
//!
//! Shared foundation for the abacus usage trackers.
//!
//! This crate provides:
//! - [`AbacusError`] - Errors for path resolution and directory setup
//! - [`logging`] - Tracing setup for the CLI binaries
//! - [`paths`] - Configuration-directory resolution
//! - [`fmt`] - Number formatting for the report renderers
//!
//! ## Example
//!
//! ```no_run
//! use abacus_core::{logging, paths};
//!
//! fn main() -> abacus_core::Result<()> {
//!     logging::init_logging(0);
//!
//!     let dir = paths::default_config_dir()?;
//!     paths::ensure_dir(&dir)?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fmt;
pub mod logging;
pub mod paths;

// Re-export main types for convenience
pub use error::{AbacusError, Result};
pub use paths::{default_config_dir, ensure_dir};
