//! `get_time` payload

use serde::{Deserialize, Serialize};

/// Current time in the reference timezone, optionally with a shifted date.
///
/// The `shifted_*` fields are present only when a non-zero day offset was
/// requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    pub current_datetime: String,
    pub today_date: String,
    pub today_day_of_week: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifted_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifted_day_of_week: Option<String>,
    pub timezone: String,
    /// `+HHMM` / `-HHMM`
    pub utc_offset: String,
}

impl TimeSnapshot {
    /// Whether the shifted fields are present.
    pub fn is_shifted(&self) -> bool {
        self.shifted_datetime.is_some()
    }
}
