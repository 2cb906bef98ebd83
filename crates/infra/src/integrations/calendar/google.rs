//! Google Calendar v3 client implementing the `CalendarProvider` port
//!
//! Every call fetches the bearer token first, so a missing credential is
//! reported as `AuthMissing` before any request leaves the process.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use slotguard_core::{CalendarProvider, CredentialProvider};
use slotguard_domain::{
    CalendarConfig, Event, EventDraft, EventPatch, Result, SlotGuardError, TimeWindow,
};
use tracing::{debug, instrument};
use url::Url;

use super::wire::{GoogleEvent, GoogleEventInsert, GoogleEventsPage};
use crate::http::HttpClient;

/// Upper bound on followed `nextPageToken`s for one listing.
const MAX_PAGES: usize = 50;

/// Calendar client bound to a single calendar id.
#[derive(Clone)]
pub struct GoogleCalendarClient {
    http: HttpClient,
    credentials: Arc<dyn CredentialProvider>,
    events_url: String,
    send_updates: String,
}

impl GoogleCalendarClient {
    /// # Errors
    /// `SlotGuardError::Config` when the API base URL is not a valid URL.
    pub fn new(config: &CalendarConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()?;
        Self::with_http(config, credentials, http)
    }

    /// # Errors
    /// `SlotGuardError::Config` when the API base URL is not a valid URL.
    pub fn with_http(
        config: &CalendarConfig,
        credentials: Arc<dyn CredentialProvider>,
        http: HttpClient,
    ) -> Result<Self> {
        let base = Url::parse(&config.api_base_url).map_err(|e| {
            SlotGuardError::Config(format!("Invalid API base URL '{}': {e}", config.api_base_url))
        })?;
        let events_url = format!(
            "{}/calendars/{}/events",
            base.as_str().trim_end_matches('/'),
            urlencoding::encode(&config.calendar_id)
        );

        Ok(Self { http, credentials, events_url, send_updates: config.send_updates.clone() })
    }

    fn event_url(&self, event_id: &str) -> String {
        format!("{}/{}", self.events_url, urlencoding::encode(event_id))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T> {
        let token = self.credentials.access_token().await?;

        let mut request = self.http.request(method, url).bearer_auth(token).query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http.send_checked(request).await?;
        response.json::<T>().await.map_err(|e| {
            SlotGuardError::provider(None, format!("Failed to parse Google response: {e}"))
        })
    }

    fn send_updates_query(&self) -> Vec<(&'static str, String)> {
        vec![("sendUpdates", self.send_updates.clone())]
    }

    /// Full stored body, unknown fields included.
    async fn raw_event(&self, event_id: &str) -> Result<Map<String, Value>> {
        let value: Value = self.fetch_json(Method::GET, &self.event_url(event_id), &[], None).await?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(SlotGuardError::provider(None, "Google returned a non-object event body")),
        }
    }
}

/// Overlay `patch` onto a stored event body. Fields the patch leaves unset,
/// and fields this crate does not model, are kept as stored.
fn merge_patch(stored: &mut Map<String, Value>, patch: EventPatch) {
    if let Some(title) = patch.title {
        stored.insert("summary".into(), Value::String(title));
    }
    if let Some(start) = patch.start {
        stored.insert("start".into(), json!({"dateTime": start}));
    }
    if let Some(end) = patch.end {
        stored.insert("end".into(), json!({"dateTime": end}));
    }
    if let Some(attendees) = patch.attendees {
        let list: Vec<Value> = attendees.into_iter().map(|email| json!({"email": email})).collect();
        stored.insert("attendees".into(), Value::Array(list));
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarClient {
    #[instrument(skip(self, window), fields(start = %window.start_rfc3339(), end = %window.end_rfc3339()))]
    async fn list_events(&self, window: &TimeWindow) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        let mut page_token: Option<String> = None;

        for page in 1..=MAX_PAGES {
            let mut query = vec![
                ("timeMin", window.start_rfc3339()),
                ("timeMax", window.end_rfc3339()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let response: GoogleEventsPage =
                self.fetch_json(Method::GET, &self.events_url, &query, None).await?;
            debug!(page, items = response.items.len(), "fetched events page");

            events.extend(response.items.into_iter().map(GoogleEvent::into_event));

            match response.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => return Ok(events),
            }
        }

        Err(SlotGuardError::provider(
            None,
            format!("event listing did not finish within {MAX_PAGES} pages"),
        ))
    }

    #[instrument(skip(self))]
    async fn get_event(&self, event_id: &str) -> Result<Event> {
        let event: GoogleEvent =
            self.fetch_json(Method::GET, &self.event_url(event_id), &[], None).await?;
        Ok(event.into_event())
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn insert_event(&self, draft: EventDraft) -> Result<Event> {
        let body = serde_json::to_value(GoogleEventInsert::from(draft))
            .map_err(|e| SlotGuardError::Internal(format!("serialize event body: {e}")))?;

        let created: GoogleEvent = self
            .fetch_json(Method::POST, &self.events_url, &self.send_updates_query(), Some(&body))
            .await?;
        Ok(created.into_event())
    }

    #[instrument(skip(self, patch))]
    async fn update_event(&self, event_id: &str, patch: EventPatch) -> Result<Event> {
        if patch.is_empty() {
            debug!("empty patch, returning stored event without notifying attendees");
            return self.get_event(event_id).await;
        }

        let mut stored = self.raw_event(event_id).await?;
        merge_patch(&mut stored, patch);

        let updated: GoogleEvent = self
            .fetch_json(
                Method::PUT,
                &self.event_url(event_id),
                &self.send_updates_query(),
                Some(&Value::Object(stored)),
            )
            .await?;
        Ok(updated.into_event())
    }

    #[instrument(skip(self))]
    async fn delete_event(&self, event_id: &str) -> Result<()> {
        let token = self.credentials.access_token().await?;
        let request = self
            .http
            .request(Method::DELETE, self.event_url(event_id))
            .bearer_auth(token)
            .query(&self.send_updates_query());

        self.http.send_checked(request).await?;
        Ok(())
    }
}
