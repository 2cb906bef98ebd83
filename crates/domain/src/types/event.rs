//! Normalized calendar event and its write shapes

use serde::{Deserialize, Serialize};

use crate::constants::EVENT_STATUS_CANCELLED;

/// Provider-agnostic calendar event.
///
/// `start`/`end` keep the provider's textual form: RFC3339 with offset for
/// timed events, `YYYY-MM-DD` for all-day events. Records are never cached;
/// every read goes back to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: Option<String>,
    pub start: String,
    pub end: String,
    pub organizer: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub status: Option<String>,
    /// Deep link into the provider's UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}

impl Event {
    /// Whether the provider has marked this event as no longer occupying time.
    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(EVENT_STATUS_CANCELLED))
    }

    /// All-day events carry date-only boundaries.
    pub fn is_all_day(&self) -> bool {
        !self.start.contains('T')
    }
}

/// Fields for a new event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

/// Partial update. `None` leaves the stored value untouched; an empty
/// attendee list clears attendees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub attendees: Option<Vec<String>>,
}

impl EventPatch {
    /// Whether applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.start.is_none() && self.end.is_none() && self.attendees.is_none()
    }
}

/// What the write tools hand back to the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReceipt {
    pub event_id: String,
    pub html_link: Option<String>,
}

impl From<&Event> for EventReceipt {
    fn from(event: &Event) -> Self {
        Self { event_id: event.id.clone(), html_link: event.html_link.clone() }
    }
}
