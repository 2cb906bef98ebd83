//! Google Calendar wire shapes and their normalization into [`Event`]
//!
//! Every provider field is optional at the wire level. Normalization fills
//! safe defaults instead of failing.

use serde::{Deserialize, Serialize};
use slotguard_domain::{Event, EventDraft};
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GoogleEventsPage {
    #[serde(default)]
    pub items: Vec<GoogleEvent>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GoogleEvent {
    #[serde(default)]
    pub id: Option<String>,
    pub summary: Option<String>,
    pub start: Option<GoogleEventTime>,
    pub end: Option<GoogleEventTime>,
    pub organizer: Option<GooglePerson>,
    pub attendees: Option<Vec<GooglePerson>>,
    pub status: Option<String>,
    pub html_link: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GoogleEventTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl GoogleEventTime {
    pub fn date_time(value: impl Into<String>) -> Self {
        Self { date_time: Some(value.into()), date: None }
    }

    fn into_text(self) -> String {
        self.date_time.or(self.date).unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct GooglePerson {
    #[serde(default)]
    pub email: Option<String>,
}

impl GooglePerson {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()) }
    }
}

/// Insert request body.
#[derive(Debug, Serialize)]
pub(crate) struct GoogleEventInsert {
    pub summary: String,
    pub start: GoogleEventTime,
    pub end: GoogleEventTime,
    pub attendees: Vec<GooglePerson>,
}

impl From<EventDraft> for GoogleEventInsert {
    fn from(draft: EventDraft) -> Self {
        Self {
            summary: draft.title,
            start: GoogleEventTime::date_time(draft.start),
            end: GoogleEventTime::date_time(draft.end),
            attendees: draft.attendees.into_iter().map(GooglePerson::with_email).collect(),
        }
    }
}

impl GoogleEvent {
    pub fn into_event(self) -> Event {
        let id = self.id.unwrap_or_default();
        if id.is_empty() {
            warn!("provider returned an event without an id");
        }

        let attendees = self
            .attendees
            .unwrap_or_default()
            .into_iter()
            .filter_map(|person| validate_and_log_email(person.email.as_deref(), &id))
            .collect();

        Event {
            title: self.summary,
            start: self.start.unwrap_or_default().into_text(),
            end: self.end.unwrap_or_default().into_text(),
            organizer: self.organizer.and_then(|person| person.email),
            attendees,
            status: self.status,
            html_link: self.html_link,
            id,
        }
    }
}

/// Validate an attendee email and log warnings for malformed ones
///
/// Returns `None` only for absent or empty emails. Malformed emails (missing
/// @) are logged but kept, as provider data is canonical.
fn validate_and_log_email(email: Option<&str>, event_id: &str) -> Option<String> {
    let Some(email) = email else {
        warn!(event_id, "attendee without email dropped");
        return None;
    };
    let trimmed = email.trim();
    if trimmed.is_empty() {
        warn!(event_id, email, "empty attendee email");
        return None;
    }
    if !trimmed.contains('@') {
        warn!(event_id, email, "attendee email missing @ symbol");
    }
    Some(trimmed.to_string())
}
