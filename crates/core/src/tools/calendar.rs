//! Calendar tool operations - core business logic
//!
//! Each operation validates its inputs and talks to the provider port.
//! `remove_event` is the odd one out: it never fails, every path ends in a
//! [`RemovalOutcome`].

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use chrono_tz::Tz;
use slotguard_domain::constants::{
    REMOVAL_ERROR_AUTH_MISSING, REMOVAL_ERROR_HTTP, REMOVAL_ERROR_UNEXPECTED,
};
use slotguard_domain::{
    Event, EventDraft, EventPatch, EventReceipt, RemovalOutcome, Result, SlotGuardError,
    TimeSnapshot, TimeWindow,
};
use tracing::{debug, info, instrument, warn};

use super::arguments::{CreateEventArgs, UpdateEventArgs};
use crate::calendar_ports::CalendarProvider;
use crate::clock::Clock;
use crate::schedule::parse_event_time;

/// Largest `get_time` day offset honoured; larger requests are clamped.
pub const MAX_DAY_OFFSET: i64 = 36_500;

/// Calendar tool service
pub struct CalendarTools {
    provider: Arc<dyn CalendarProvider>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl CalendarTools {
    /// Tools over `provider`, reporting times in `timezone`.
    pub fn new(provider: Arc<dyn CalendarProvider>, clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self { provider, clock, timezone }
    }

    /// Reference timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Current time in the reference timezone, plus the date `days` away
    /// when `days != 0`.
    pub fn get_time(&self, days: i64) -> TimeSnapshot {
        let now = self.clock.now().with_timezone(&self.timezone);
        let mut snapshot = TimeSnapshot {
            current_datetime: now.to_rfc3339_opts(SecondsFormat::Secs, false),
            today_date: now.date_naive().to_string(),
            today_day_of_week: now.format("%A").to_string(),
            shifted_datetime: None,
            shifted_date: None,
            shifted_day_of_week: None,
            timezone: self.timezone.name().to_string(),
            utc_offset: now.format("%z").to_string(),
        };

        if days != 0 {
            let clamped = days.clamp(-MAX_DAY_OFFSET, MAX_DAY_OFFSET);
            let shifted = now + TimeDelta::days(clamped);
            snapshot.shifted_datetime = Some(shifted.to_rfc3339_opts(SecondsFormat::Secs, false));
            snapshot.shifted_date = Some(shifted.date_naive().to_string());
            snapshot.shifted_day_of_week = Some(shifted.format("%A").to_string());
        }

        snapshot
    }

    /// Events intersecting `[start_time, end_time)`, ordered by start.
    #[instrument(skip(self))]
    pub async fn get_events(&self, start_time: &str, end_time: &str) -> Result<Vec<Event>> {
        let window = TimeWindow::parse(start_time, end_time)?;
        let mut events = self.provider.list_events(&window).await?;

        let tz = self.timezone;
        events.sort_by_key(|event| {
            parse_event_time(&event.start, tz).unwrap_or(DateTime::<Utc>::MAX_UTC)
        });

        debug!(count = events.len(), "listed calendar events");
        Ok(events)
    }

    #[instrument(skip(self, args), fields(title = %args.title))]
    pub async fn create_event(&self, args: CreateEventArgs) -> Result<EventReceipt> {
        if args.title.trim().is_empty() {
            return Err(SlotGuardError::InvalidInput("title must not be empty".into()));
        }
        TimeWindow::parse(&args.start_time, &args.end_time)?;

        let draft = EventDraft {
            title: args.title,
            start: args.start_time,
            end: args.end_time,
            attendees: args.attendees,
        };
        let created = self.provider.insert_event(draft).await?;

        info!(event_id = %created.id, "calendar event created");
        Ok(EventReceipt::from(&created))
    }

    #[instrument(skip(self, args), fields(event_id = %args.event_id))]
    pub async fn update_event(&self, args: UpdateEventArgs) -> Result<EventReceipt> {
        if args.event_id.trim().is_empty() {
            return Err(SlotGuardError::InvalidInput("event_id must not be empty".into()));
        }

        match (args.start_time.as_deref(), args.end_time.as_deref()) {
            (Some(start), Some(end)) => {
                TimeWindow::parse(start, end)?;
            }
            (Some(single), None) | (None, Some(single)) => {
                DateTime::parse_from_rfc3339(single).map_err(|e| {
                    SlotGuardError::InvalidInput(format!(
                        "'{single}' is not an RFC3339 timestamp: {e}"
                    ))
                })?;
            }
            (None, None) => {}
        }

        let patch = EventPatch {
            title: args.title.filter(|title| !title.trim().is_empty()),
            start: args.start_time,
            end: args.end_time,
            attendees: args.attendees,
        };
        let updated = self.provider.update_event(&args.event_id, patch).await?;

        info!(event_id = %updated.id, "calendar event updated");
        Ok(EventReceipt::from(&updated))
    }

    /// Cancel an event. Never fails: errors become an `error` status.
    #[instrument(skip(self))]
    pub async fn remove_event(&self, event_id: &str) -> RemovalOutcome {
        match self.cancel(event_id).await {
            Ok(()) => {
                info!(event_id, "calendar event cancelled");
                RemovalOutcome::cancelled(event_id)
            }
            Err(SlotGuardError::NotFound(_)) => {
                debug!(event_id, "event already gone");
                RemovalOutcome::not_found(event_id)
            }
            Err(err) => {
                warn!(event_id, error = %err, "failed to cancel calendar event");
                let (tag, status) = match &err {
                    SlotGuardError::AuthMissing(_) => (REMOVAL_ERROR_AUTH_MISSING, None),
                    SlotGuardError::Provider { status, .. } => (REMOVAL_ERROR_HTTP, *status),
                    _ => (REMOVAL_ERROR_UNEXPECTED, None),
                };
                RemovalOutcome::failed(event_id, tag, status, removal_message(&err))
            }
        }
    }

    async fn cancel(&self, event_id: &str) -> Result<()> {
        self.provider.get_event(event_id).await?;
        self.provider.delete_event(event_id).await
    }
}

fn removal_message(err: &SlotGuardError) -> String {
    match err {
        SlotGuardError::AuthMissing(_) => {
            "Calendar token not found. User needs to authenticate.".to_string()
        }
        SlotGuardError::Provider { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
