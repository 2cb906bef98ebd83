//! Typed argument shapes for the calendar tools

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use slotguard_domain::{Result, SlotGuardError, ToolCall};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetTimeArgs {
    #[serde(default)]
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetEventsArgs {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEventArgs {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEventArgs {
    pub event_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub attendees: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveEventArgs {
    pub event_id: String,
}

/// Deserialize a call's argument bag into its typed shape.
///
/// # Errors
/// `SlotGuardError::MalformedCall` when the bag does not fit `T`.
pub fn parse_arguments<T: DeserializeOwned>(call: &ToolCall) -> Result<T> {
    serde_json::from_value(Value::Object(call.arguments.clone())).map_err(|e| {
        SlotGuardError::MalformedCall(format!("{}: invalid arguments: {e}", call.name))
    })
}
