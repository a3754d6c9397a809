//! Append-only usage log persistence.
//!
//! Events are stored as newline-delimited JSON, one record per line:
//!
//! ```json
//! {"timestamp":"2026-02-17T10:30:00Z","model":"qwen-max","tokens_input":1200,"tokens_output":480,"project":"abacus"}
//! ```
//!
//! Appends never rewrite prior records; each append is a single write of one
//! complete line. Reads are restartable and lazy, and report a per-line
//! outcome so callers can count malformed lines instead of silently losing
//! them.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::event::UsageEvent;

/// Handle to one append-only usage log file.
///
/// The path is injected at construction so binaries can point at the real
/// configuration directory while tests point at a temporary one.
pub struct UsageLog {
    path: PathBuf,
}

/// Outcome of parsing one line of the log.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line parsed into a valid event.
    Parsed(UsageEvent),
    /// The line was malformed and dropped.
    Skipped {
        /// 1-based physical line number in the file.
        line_number: usize,
        /// Parser message describing why the line was dropped.
        reason: String,
    },
}

impl UsageLog {
    /// Create a handle for the log at `path`. The file itself is created
    /// lazily on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the log file exists on disk yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one event as a single JSON line, creating the file if needed.
    pub fn append(&self, event: &UsageEvent) -> Result<()> {
        let json = serde_json::to_string(event)?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", json)?;
        file.flush()?;

        debug!(path = %self.path.display(), model = %event.model, "appended usage event");
        Ok(())
    }

    /// Lazily iterate the log, yielding one [`LineOutcome`] per non-blank
    /// line. A missing file yields an empty iterator. Each call re-reads
    /// from the start.
    pub fn records(&self) -> Result<Records> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "usage log does not exist, treating as empty");
            return Ok(Records {
                lines: None,
                line_number: 0,
            });
        }

        let file = File::open(&self.path)?;
        Ok(Records {
            lines: Some(BufReader::new(file).lines()),
            line_number: 0,
        })
    }

    /// Read every parseable event in append order, logging a warning for
    /// each malformed line.
    pub fn read_events(&self) -> Result<Vec<UsageEvent>> {
        let mut events = Vec::new();
        for outcome in self.records()? {
            match outcome? {
                LineOutcome::Parsed(event) => events.push(event),
                LineOutcome::Skipped {
                    line_number,
                    reason,
                } => {
                    warn!(
                        "Skipping malformed usage record at line {}: {}",
                        line_number, reason
                    );
                }
            }
        }
        Ok(events)
    }

    /// Delete the log file if present. Missing file is not an error.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            debug!(path = %self.path.display(), "removed usage log");
        }
        Ok(())
    }
}

/// Lazy iterator over the log's per-line outcomes.
///
/// IO failures while reading surface as `Err` items; malformed lines surface
/// as [`LineOutcome::Skipped`], never as errors.
pub struct Records {
    lines: Option<std::io::Lines<BufReader<File>>>,
    line_number: usize,
}

impl Iterator for Records {
    type Item = Result<LineOutcome>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;
        loop {
            let line = match lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(Ok(match serde_json::from_str::<UsageEvent>(&line) {
                Ok(event) => LineOutcome::Parsed(event),
                Err(e) => LineOutcome::Skipped {
                    line_number: self.line_number,
                    reason: e.to_string(),
                },
            }));
        }
    }
}
