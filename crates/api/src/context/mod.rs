//! Application context - dependency injection container

use std::sync::Arc;

use slotguard_core::{
    calendar_pipeline, CalendarProvider, Clock, InMemoryCheckpointStore, SystemClock, ToolPipeline,
};
use slotguard_domain::{Config, Result};
use slotguard_infra::{config, GoogleCalendarClient, TokenFileCredentials};
use tracing::{debug, info};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub provider: Arc<dyn CalendarProvider>,
    pub pipeline: Arc<ToolPipeline>,
    pub checkpoints: Arc<InMemoryCheckpointStore>,
}

impl AppContext {
    /// Create a new application context from `.env`, environment variables
    /// and config files
    pub fn new() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(e) => debug!(error = %e, "no .env file loaded"),
        }

        Self::new_with_config(config::load()?)
    }

    /// Create a new application context with custom configuration, talking to
    /// Google Calendar with the token file named in `config`
    pub fn new_with_config(config: Config) -> Result<Self> {
        let credentials = Arc::new(TokenFileCredentials::new(&config.calendar.credentials_path));
        let provider = Arc::new(GoogleCalendarClient::new(&config.calendar, credentials)?);

        Self::with_provider(config, provider, Arc::new(SystemClock))
    }

    /// Create a context around an arbitrary provider and clock
    ///
    /// Tests use this to substitute in-memory collaborators.
    pub fn with_provider(
        config: Config,
        provider: Arc<dyn CalendarProvider>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let timezone = config.calendar.reference_tz()?;
        let pipeline = calendar_pipeline(
            Arc::clone(&provider),
            clock,
            timezone,
            &config.agent.guarded_tools,
        )?;

        info!(
            calendar_id = %config.calendar.calendar_id,
            timezone = %timezone,
            guarded_tools = ?config.agent.guarded_tools,
            tools = pipeline.registry().len(),
            "SlotGuard context initialized"
        );

        Ok(Self {
            config,
            provider,
            pipeline: Arc::new(pipeline),
            checkpoints: Arc::new(InMemoryCheckpointStore::new()),
        })
    }

    /// Release per-process state. Conversation checkpoints do not survive.
    pub fn shutdown(&self) -> Result<()> {
        let dropped = self.checkpoints.len();
        self.checkpoints.clear();
        info!(dropped_checkpoints = dropped, "shutdown called on AppContext");
        Ok(())
    }
}
