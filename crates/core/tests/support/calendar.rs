use std::sync::Arc;

use async_trait::async_trait;
use chrono_tz::Tz;
use parking_lot::Mutex;
use slotguard_core::schedule::event_interval;
use slotguard_core::{CalendarProvider, Interval};
use slotguard_domain::{
    Event, EventDraft, EventPatch, Result as DomainResult, SlotGuardError, TimeWindow,
};

/// In-memory spy for `CalendarProvider`.
///
/// Holds a mutable event list and records every port call by method name so
/// tests can assert what reached the provider.
#[derive(Clone)]
pub struct MockCalendarProvider {
    events: Arc<Mutex<Vec<Event>>>,
    calls: Arc<Mutex<Vec<String>>>,
    timezone: Tz,
    next_id: Arc<Mutex<u32>>,
}

impl MockCalendarProvider {
    pub fn new(timezone: Tz) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            timezone,
            next_id: Arc::new(Mutex::new(0)),
        }
    }

    /// Seed a confirmed event.
    pub fn with_event(self, id: &str, start: &str, end: &str) -> Self {
        self.events.lock().push(event(id, start, end));
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls.lock().iter().filter(|name| name.as_str() == method).count()
    }

    fn record(&self, method: &str) {
        self.calls.lock().push(method.to_string());
    }
}

#[async_trait]
impl CalendarProvider for MockCalendarProvider {
    async fn list_events(&self, window: &TimeWindow) -> DomainResult<Vec<Event>> {
        self.record("list_events");
        let requested = Interval::from(window);
        Ok(self
            .events
            .lock()
            .iter()
            .filter(|event| {
                event_interval(event, self.timezone)
                    .map_or(true, |interval| interval.overlaps(&requested))
            })
            .cloned()
            .collect())
    }

    async fn get_event(&self, event_id: &str) -> DomainResult<Event> {
        self.record("get_event");
        self.events
            .lock()
            .iter()
            .find(|event| event.id == event_id)
            .cloned()
            .ok_or_else(|| SlotGuardError::NotFound(format!("event {event_id}")))
    }

    async fn insert_event(&self, draft: EventDraft) -> DomainResult<Event> {
        self.record("insert_event");
        let id = {
            let mut next = self.next_id.lock();
            *next += 1;
            format!("evt-{next}")
        };
        let created = Event {
            id: id.clone(),
            title: Some(draft.title),
            start: draft.start,
            end: draft.end,
            organizer: Some("me@example.com".into()),
            attendees: draft.attendees,
            status: Some("confirmed".into()),
            html_link: Some(format!("https://calendar.example.com/event?eid={id}")),
        };
        self.events.lock().push(created.clone());
        Ok(created)
    }

    async fn update_event(&self, event_id: &str, patch: EventPatch) -> DomainResult<Event> {
        self.record("update_event");
        let mut events = self.events.lock();
        let stored = events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or_else(|| SlotGuardError::NotFound(format!("event {event_id}")))?;

        if let Some(title) = patch.title {
            stored.title = Some(title);
        }
        if let Some(start) = patch.start {
            stored.start = start;
        }
        if let Some(end) = patch.end {
            stored.end = end;
        }
        if let Some(attendees) = patch.attendees {
            stored.attendees = attendees;
        }
        Ok(stored.clone())
    }

    async fn delete_event(&self, event_id: &str) -> DomainResult<()> {
        self.record("delete_event");
        let mut events = self.events.lock();
        let before = events.len();
        events.retain(|event| event.id != event_id);
        if events.len() == before {
            return Err(SlotGuardError::NotFound(format!("event {event_id}")));
        }
        Ok(())
    }
}

pub fn event(id: &str, start: &str, end: &str) -> Event {
    Event {
        id: id.into(),
        title: Some(format!("Event {id}")),
        start: start.into(),
        end: end.into(),
        organizer: None,
        attendees: Vec::new(),
        status: Some("confirmed".into()),
        html_link: None,
    }
}
