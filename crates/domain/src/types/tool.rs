//! Tool invocation envelopes exchanged with the agent loop

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::constants::{CONFLICT_ERROR_TAG, CONFLICT_MESSAGE};
use crate::types::event::Event;

/// Argument bag as supplied by the agent. Keys are unique by construction.
pub type ToolArguments = Map<String, Value>;

/// A single tool invocation. Transient: lives for one dispatch only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default = "generate_call_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub arguments: ToolArguments,
}

fn generate_call_id() -> String {
    Uuid::now_v7().to_string()
}

impl ToolCall {
    /// Build a call with a generated id.
    pub fn new(name: impl Into<String>, arguments: ToolArguments) -> Self {
        Self { id: generate_call_id(), name: name.into(), arguments }
    }

    /// Build a call from a JSON value; anything but an object yields an
    /// empty argument bag.
    pub fn from_json(name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(name, arguments)
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Raw argument value.
    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    /// A non-empty string argument, if present.
    pub fn str_argument(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str).filter(|s| !s.trim().is_empty())
    }
}

/// Veto produced when a write would overlap existing events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub error: String,
    pub message: String,
    pub conflicting_events: Vec<Event>,
}

impl ConflictReport {
    /// Report carrying the standard conflict tag and message.
    pub fn new(conflicting_events: Vec<Event>) -> Self {
        Self {
            error: CONFLICT_ERROR_TAG.to_string(),
            message: CONFLICT_MESSAGE.to_string(),
            conflicting_events,
        }
    }
}

/// Non-failing result of a tool invocation.
///
/// Failures travel as `Err(SlotGuardError)`; the two variants here are
/// the shapes the agent is expected to reason over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolOutcome {
    #[serde(rename = "ok")]
    Completed { content: Value },
    Conflict(ConflictReport),
}

impl ToolOutcome {
    /// Wrap any serializable payload as a completed outcome.
    ///
    /// # Errors
    /// Propagates serialization failures as `SlotGuardError::Internal`.
    pub fn completed<T: Serialize>(payload: &T) -> crate::Result<Self> {
        serde_json::to_value(payload)
            .map(|content| Self::Completed { content })
            .map_err(|e| crate::SlotGuardError::Internal(format!("serialize tool result: {e}")))
    }

    /// Whether the call was vetoed.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Payload of a completed call.
    pub fn content(&self) -> Option<&Value> {
        match self {
            Self::Completed { content } => Some(content),
            Self::Conflict(_) => None,
        }
    }

    /// Report of a vetoed call.
    pub fn conflict(&self) -> Option<&ConflictReport> {
        match self {
            Self::Conflict(report) => Some(report),
            Self::Completed { .. } => None,
        }
    }
}

/// Tool result addressed back to the originating call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub call_id: String,
    pub tool: String,
    #[serde(flatten)]
    pub outcome: ToolOutcome,
}
