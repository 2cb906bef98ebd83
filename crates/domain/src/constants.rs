//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Calendar provider defaults
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_CREDENTIALS_PATH: &str = "./auth/token.json";
pub const DEFAULT_REFERENCE_TIMEZONE: &str = "Australia/Melbourne";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// `sendUpdates` value requesting attendee notifications on every write.
pub const SEND_UPDATES_ALL: &str = "all";

// Tool names exposed to the agent loop
pub const TOOL_GET_TIME: &str = "get_time";
pub const TOOL_GET_EVENTS: &str = "get_events";
pub const TOOL_CREATE_EVENT: &str = "create_event";
pub const TOOL_UPDATE_EVENT: &str = "update_event";
pub const TOOL_REMOVE_EVENT: &str = "remove_event";

// Argument keys shared by the write tools and the conflict guard
pub const ARG_START_TIME: &str = "start_time";
pub const ARG_END_TIME: &str = "end_time";
pub const ARG_EVENT_ID: &str = "event_id";

// Conflict report
pub const CONFLICT_ERROR_TAG: &str = "conflict_detected";
pub const CONFLICT_MESSAGE: &str = "The requested time overlaps with existing events.";

// remove_event error tags
pub const REMOVAL_ERROR_AUTH_MISSING: &str = "auth_missing";
pub const REMOVAL_ERROR_HTTP: &str = "calendar_http_error";
pub const REMOVAL_ERROR_UNEXPECTED: &str = "unexpected_error";

/// Provider lifecycle tag for events that no longer occupy time.
pub const EVENT_STATUS_CANCELLED: &str = "cancelled";
