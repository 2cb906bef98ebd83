//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SlotGuard
///
/// A conflict veto is deliberately absent: it is a tool outcome
/// ([`crate::ToolOutcome::Conflict`]), not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SlotGuardError {
    /// The calendar credential artifact is absent or unusable.
    #[error("Authentication missing: {0}")]
    AuthMissing(String),

    /// The provider reports that the target event does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other provider-side failure. `status` is `None` for transport
    /// failures where no HTTP response was received.
    #[error("Provider error: {message}")]
    Provider { status: Option<u16>, message: String },

    /// A tool invocation that does not satisfy its declared shape.
    #[error("Malformed tool call: {0}")]
    MalformedCall(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SlotGuardError {
    /// Convenience constructor for provider failures.
    pub fn provider(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Provider { status, message: message.into() }
    }

    /// Stable, machine-readable tag for logs and structured tool results.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthMissing(_) => "auth_missing",
            Self::NotFound(_) => "not_found",
            Self::Provider { .. } => "provider_error",
            Self::MalformedCall(_) => "malformed_call",
            Self::InvalidInput(_) => "invalid_input",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// HTTP status attached to a provider failure, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => *status,
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// Result type alias for SlotGuard operations
pub type Result<T> = std::result::Result<T, SlotGuardError>;
