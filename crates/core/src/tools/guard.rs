//! Conflict guard
//!
//! Intercepts the calendar write tools and refuses any call whose requested
//! slot overlaps an existing event. The check always queries the provider;
//! nothing is cached between calls.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono_tz::Tz;
use slotguard_domain::constants::{
    ARG_END_TIME, ARG_EVENT_ID, ARG_START_TIME, TOOL_CREATE_EVENT, TOOL_UPDATE_EVENT,
};
use slotguard_domain::{
    ConflictReport, Event, Result, SlotGuardError, TimeWindow, ToolCall, ToolOutcome,
};
use tracing::{debug, instrument, warn};

use super::pipeline::{Next, ToolInterceptor};
use crate::calendar_ports::CalendarProvider;
use crate::schedule::{find_conflicts, Interval};

/// Interceptor that vetoes guarded writes overlapping existing events.
pub struct ConflictGuard {
    provider: Arc<dyn CalendarProvider>,
    timezone: Tz,
    guarded: BTreeSet<String>,
}

impl ConflictGuard {
    /// Guard `create_event` and `update_event`.
    pub fn new(provider: Arc<dyn CalendarProvider>, timezone: Tz) -> Self {
        Self {
            provider,
            timezone,
            guarded: [TOOL_CREATE_EVENT, TOOL_UPDATE_EVENT].into_iter().map(String::from).collect(),
        }
    }

    /// Replace the set of guarded tool names.
    #[must_use]
    pub fn with_guarded_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guarded = tools.into_iter().map(Into::into).collect();
        self
    }

    /// Whether calls to `tool` are overlap-checked.
    pub fn is_guarded(&self, tool: &str) -> bool {
        self.guarded.contains(tool)
    }

    /// Events that collide with the slot requested by `call`.
    ///
    /// # Errors
    /// `MalformedCall` when either time argument is absent, `InvalidInput`
    /// when they do not form a valid window, and any provider failure.
    pub async fn conflicts_for(&self, call: &ToolCall) -> Result<Vec<Event>> {
        let (Some(start), Some(end)) =
            (call.str_argument(ARG_START_TIME), call.str_argument(ARG_END_TIME))
        else {
            return Err(SlotGuardError::MalformedCall(format!(
                "{}: '{ARG_START_TIME}' and '{ARG_END_TIME}' are required for the overlap check",
                call.name
            )));
        };

        let window = TimeWindow::parse(start, end)?;
        let existing = self.provider.list_events(&window).await?;

        let exclude = call.str_argument(ARG_EVENT_ID);
        Ok(find_conflicts(&Interval::from(&window), &existing, self.timezone, exclude))
    }
}

#[async_trait]
impl ToolInterceptor for ConflictGuard {
    fn name(&self) -> &'static str {
        "conflict_guard"
    }

    #[instrument(skip(self, call, next), fields(tool = %call.name))]
    async fn intercept(&self, call: &ToolCall, next: Next<'_>) -> Result<ToolOutcome> {
        if !self.is_guarded(&call.name) {
            return next.run(call).await;
        }

        let conflicts = self.conflicts_for(call).await?;
        if !conflicts.is_empty() {
            let ids: Vec<&str> = conflicts.iter().map(|event| event.id.as_str()).collect();
            warn!(conflicting = ?ids, "write vetoed: requested slot overlaps existing events");
            return Ok(ToolOutcome::Conflict(ConflictReport::new(conflicts)));
        }

        debug!("slot is free");
        next.run(call).await
    }
}
