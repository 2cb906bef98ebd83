//! Structured result of `remove_event`
//!
//! Removal never fails outward: every path ends in one of these records.

use serde::{Deserialize, Serialize};

use crate::impl_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStatus {
    Cancelled,
    NotFound,
    Error,
}

impl_status_conversions!(RemovalStatus {
    Cancelled => "cancelled",
    NotFound => "not_found",
    Error => "error",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalOutcome {
    pub event_id: String,
    pub status: RemovalStatus,
    /// Machine-readable tag, present only for `status == error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RemovalOutcome {
    /// The event was deleted.
    pub fn cancelled(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            status: RemovalStatus::Cancelled,
            error: None,
            http_status: None,
            message: None,
        }
    }

    /// No event with that id exists.
    pub fn not_found(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            status: RemovalStatus::NotFound,
            error: None,
            http_status: None,
            message: Some("Event does not exist (already deleted or invalid event_id).".into()),
        }
    }

    /// Removal failed; `error` is the machine-readable tag.
    pub fn failed(
        event_id: impl Into<String>,
        error: impl Into<String>,
        http_status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            status: RemovalStatus::Error,
            error: Some(error.into()),
            http_status,
            message: Some(message.into()),
        }
    }
}
