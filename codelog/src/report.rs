//! Error reporter: turns an [`ErrorEvent`] into a timestamped report line.
//!
//! A report has three parts, each styled separately by
//! [`crate::terminal`]:
//!
//! ```text
//! ERROR [from 14:03:59] ERROR: Variable 'x' does not exist.
//! ^^^^^ ^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! marker  timestamp     message
//! ```

use std::fmt;

use crate::clock::Clock;
use crate::error::ErrorEvent;

/// The emphasised marker that opens every report.
pub const MARKER: &str = "ERROR";

/// A formatted error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Clock reading when the error was reported (`HH:MM:SS`).
    pub timestamp: String,
    pub event: ErrorEvent,
}

impl Report {
    /// The bracketed timestamp part, `[from HH:MM:SS]`.
    pub fn stamp(&self) -> String {
        format!("[from {}]", self.timestamp)
    }

    /// The message part, e.g. `ERROR: Variable 'x' does not exist.`
    pub fn message(&self) -> String {
        self.event.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MARKER} {} {}", self.stamp(), self.event)
    }
}

/// Build a report for `event`, reading the current time from `clock`.
pub fn report(event: ErrorEvent, clock: &dyn Clock) -> Report {
    Report {
        timestamp: clock.now_hms(),
        event,
    }
}
