//! Configuration structures
//!
//! Loading lives in the infrastructure crate; these are the plain shapes it
//! produces.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_ID, DEFAULT_CREDENTIALS_PATH, DEFAULT_REFERENCE_TIMEZONE,
    DEFAULT_REQUEST_TIMEOUT_SECS, GOOGLE_CALENDAR_API_BASE, SEND_UPDATES_ALL, TOOL_CREATE_EVENT,
    TOOL_UPDATE_EVENT,
};
use crate::errors::{Result, SlotGuardError};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Calendar provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Provider calendar identifier (single calendar per deployment).
    pub calendar_id: String,
    pub api_base_url: String,
    /// Pre-authorized token artifact. Refreshing it is somebody else's job.
    pub credentials_path: String,
    /// IANA zone used by `get_time` and for all-day event boundaries.
    pub reference_timezone: String,
    pub send_updates: String,
    pub request_timeout_secs: u64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            api_base_url: GOOGLE_CALENDAR_API_BASE.to_string(),
            credentials_path: DEFAULT_CREDENTIALS_PATH.to_string(),
            reference_timezone: DEFAULT_REFERENCE_TIMEZONE.to_string(),
            send_updates: SEND_UPDATES_ALL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl CalendarConfig {
    /// Parse the configured reference timezone.
    ///
    /// # Errors
    /// Returns `SlotGuardError::Config` for names outside the IANA database.
    pub fn reference_tz(&self) -> Result<Tz> {
        self.reference_timezone.parse::<Tz>().map_err(|e| {
            SlotGuardError::Config(format!(
                "Invalid reference timezone '{}': {}",
                self.reference_timezone, e
            ))
        })
    }
}

/// Settings for the tool pipeline exposed to the agent loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Tool names routed through the conflict guard.
    pub guarded_tools: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { guarded_tools: vec![TOOL_CREATE_EVENT.to_string(), TOOL_UPDATE_EVENT.to_string()] }
    }
}
