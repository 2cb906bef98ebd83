//! Half-open query window `[start, end)`

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SlotGuardError};

/// A validated time window with `start < end`.
///
/// Both bounds keep their original UTC offset so the provider sees the same
/// wall-clock time the agent asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeWindow {
    /// Window from two parsed bounds.
    ///
    /// # Errors
    /// `InvalidInput` if `start >= end`.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Result<Self> {
        if start >= end {
            return Err(SlotGuardError::InvalidInput(format!(
                "start ({}) must be before end ({})",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse two RFC3339 timestamps into a window.
    ///
    /// # Errors
    /// `InvalidInput` if either bound is not RFC3339 or `start >= end`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_rfc3339(start)?, parse_rfc3339(end)?)
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Lower bound as a UTC instant.
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.with_timezone(&Utc)
    }

    /// Upper bound as a UTC instant.
    pub fn end_utc(&self) -> DateTime<Utc> {
        self.end.with_timezone(&Utc)
    }

    /// Lower bound as sent on the wire (`timeMin`).
    pub fn start_rfc3339(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }

    /// Upper bound as sent on the wire (`timeMax`).
    pub fn end_rfc3339(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }
}

fn parse_rfc3339(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|e| {
        SlotGuardError::InvalidInput(format!("'{value}' is not an RFC3339 timestamp: {e}"))
    })
}
