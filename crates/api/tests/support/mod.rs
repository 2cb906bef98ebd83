#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use slotguard_core::{CalendarProvider, FixedClock};
use slotguard_domain::{
    Config, Event, EventDraft, EventPatch, Result as DomainResult, SlotGuardError, TimeWindow,
};
use slotguard_lib::AppContext;

/// In-memory provider that returns every stored event for any window and
/// counts writes.
#[derive(Default, Clone)]
pub struct InMemoryProvider {
    pub events: Arc<Mutex<Vec<Event>>>,
    pub writes: Arc<Mutex<usize>>,
}

impl InMemoryProvider {
    pub fn with_event(self, id: &str, start: &str, end: &str) -> Self {
        self.events.lock().unwrap().push(Event {
            id: id.into(),
            title: Some(format!("Event {id}")),
            start: start.into(),
            end: end.into(),
            organizer: None,
            attendees: Vec::new(),
            status: Some("confirmed".into()),
            html_link: None,
        });
        self
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl CalendarProvider for InMemoryProvider {
    async fn list_events(&self, _window: &TimeWindow) -> DomainResult<Vec<Event>> {
        Ok(self.events.lock().unwrap().clone())
    }

    async fn get_event(&self, event_id: &str) -> DomainResult<Event> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|event| event.id == event_id)
            .cloned()
            .ok_or_else(|| SlotGuardError::NotFound(event_id.to_string()))
    }

    async fn insert_event(&self, draft: EventDraft) -> DomainResult<Event> {
        *self.writes.lock().unwrap() += 1;
        let event = Event {
            id: format!("created-{}", self.write_count()),
            title: Some(draft.title),
            start: draft.start,
            end: draft.end,
            organizer: None,
            attendees: draft.attendees,
            status: Some("confirmed".into()),
            html_link: None,
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, event_id: &str, _patch: EventPatch) -> DomainResult<Event> {
        *self.writes.lock().unwrap() += 1;
        self.get_event(event_id).await
    }

    async fn delete_event(&self, event_id: &str) -> DomainResult<()> {
        *self.writes.lock().unwrap() += 1;
        self.events.lock().unwrap().retain(|event| event.id != event_id);
        Ok(())
    }
}

/// Context over `provider` with the clock frozen at Monday 2 February 2026,
/// 09:15 Melbourne time.
pub fn test_context(provider: InMemoryProvider) -> AppContext {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 2, 1, 22, 15, 0).unwrap());
    AppContext::with_provider(Config::default(), Arc::new(provider), Arc::new(clock))
        .expect("context should build")
}
