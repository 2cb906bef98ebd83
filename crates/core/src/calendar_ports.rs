//! Calendar integration port interfaces

use async_trait::async_trait;
use slotguard_domain::{Event, EventDraft, EventPatch, Result, TimeWindow};

/// Trait for calendar provider operations against a single calendar.
///
/// Implementations check credential availability before any network call
/// and report its absence as `SlotGuardError::AuthMissing`. A missing event
/// is `SlotGuardError::NotFound`; everything else the provider rejects is
/// `SlotGuardError::Provider`. Nothing is retried here.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Events intersecting `window`, ordered by start time ascending.
    async fn list_events(&self, window: &TimeWindow) -> Result<Vec<Event>>;

    async fn get_event(&self, event_id: &str) -> Result<Event>;

    async fn insert_event(&self, draft: EventDraft) -> Result<Event>;

    /// Merge `patch` onto the stored event; unset fields are preserved.
    async fn update_event(&self, event_id: &str, patch: EventPatch) -> Result<Event>;

    async fn delete_event(&self, event_id: &str) -> Result<()>;
}

/// Source of the pre-authorized calendar credential.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Bearer token for the provider.
    ///
    /// # Errors
    /// `SlotGuardError::AuthMissing` when no credential is available.
    async fn access_token(&self) -> Result<String>;
}
