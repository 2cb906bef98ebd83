//! The five calendar tools and their advertised schemas

use serde_json::json;
use slotguard_domain::constants::{
    TOOL_CREATE_EVENT, TOOL_GET_EVENTS, TOOL_GET_TIME, TOOL_REMOVE_EVENT, TOOL_UPDATE_EVENT,
};

use super::schema::ToolDefinition;

const RFC3339_EXAMPLE: &str = "RFC3339 timestamp (e.g. 2026-01-27T10:00:00+11:00)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarTool {
    GetTime,
    GetEvents,
    CreateEvent,
    UpdateEvent,
    RemoveEvent,
}

impl CalendarTool {
    pub const ALL: [Self; 5] =
        [Self::GetTime, Self::GetEvents, Self::CreateEvent, Self::UpdateEvent, Self::RemoveEvent];

    /// Name the agent calls the tool by.
    pub fn name(self) -> &'static str {
        match self {
            Self::GetTime => TOOL_GET_TIME,
            Self::GetEvents => TOOL_GET_EVENTS,
            Self::CreateEvent => TOOL_CREATE_EVENT,
            Self::UpdateEvent => TOOL_UPDATE_EVENT,
            Self::RemoveEvent => TOOL_REMOVE_EVENT,
        }
    }

    /// Advertised definition; `timezone` is named in `get_time`'s description.
    pub fn definition(self, timezone: &str) -> ToolDefinition {
        match self {
            Self::GetTime => ToolDefinition::new(
                self.name(),
                format!(
                    "Get the current date and time in {timezone} timezone, optionally shifted \
                     by a number of days."
                ),
                json!({
                    "type": "object",
                    "properties": {
                        "days": {
                            "type": "integer",
                            "description": "Number of days from the current date (default 0)."
                        }
                    },
                    "additionalProperties": false
                }),
            ),
            Self::GetEvents => ToolDefinition::new(
                self.name(),
                "Get calendar events between two RFC3339 timestamps from the user's calendar.",
                json!({
                    "type": "object",
                    "properties": {
                        "start_time": {"type": "string", "description": RFC3339_EXAMPLE},
                        "end_time": {"type": "string", "description": RFC3339_EXAMPLE}
                    },
                    "required": ["start_time", "end_time"],
                    "additionalProperties": false
                }),
            ),
            Self::CreateEvent => ToolDefinition::new(
                self.name(),
                "Add an event between two RFC3339 timestamps to the user's calendar. \
                 Rejected with a conflict report if the slot overlaps existing events.",
                json!({
                    "type": "object",
                    "properties": {
                        "title": {"type": "string", "description": "Title of the event."},
                        "start_time": {"type": "string", "description": RFC3339_EXAMPLE},
                        "end_time": {"type": "string", "description": RFC3339_EXAMPLE},
                        "attendees": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "Attendee email addresses."
                        }
                    },
                    "required": ["title", "start_time", "end_time"],
                    "additionalProperties": false
                }),
            ),
            Self::UpdateEvent => ToolDefinition::new(
                self.name(),
                "Update a calendar event by event id. Omitted fields keep their current values; \
                 start_time and end_time are always required for the overlap check.",
                json!({
                    "type": "object",
                    "properties": {
                        "event_id": {"type": "string", "description": "ID of the event to update."},
                        "title": {"type": ["string", "null"], "description": "New title."},
                        "start_time": {"type": ["string", "null"], "description": RFC3339_EXAMPLE},
                        "end_time": {"type": ["string", "null"], "description": RFC3339_EXAMPLE},
                        "attendees": {
                            "type": ["array", "null"],
                            "items": {"type": "string"},
                            "description": "Replacement attendee email addresses."
                        }
                    },
                    "required": ["event_id"],
                    "additionalProperties": false
                }),
            ),
            Self::RemoveEvent => ToolDefinition::new(
                self.name(),
                "Cancel a calendar event by event id. Always returns a status: cancelled, \
                 not_found or error.",
                json!({
                    "type": "object",
                    "properties": {
                        "event_id": {"type": "string", "description": "ID of the event to cancel."}
                    },
                    "required": ["event_id"],
                    "additionalProperties": false
                }),
            ),
        }
    }
}
