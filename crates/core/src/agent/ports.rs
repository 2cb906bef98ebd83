//! Port interfaces for conversation checkpoints

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slotguard_domain::Result;

/// Opaque agent state saved against a conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub thread_id: String,
    pub state: Value,
    pub updated_at: DateTime<Utc>,
}

impl Checkpoint {
    /// Checkpoint stamped with the current time.
    pub fn new(thread_id: impl Into<String>, state: Value) -> Self {
        Self { thread_id: thread_id.into(), state, updated_at: Utc::now() }
    }
}

/// Trait for checkpoint persistence keyed by thread id
#[async_trait]
pub trait CheckpointStore: Send + Sync {
    /// Latest checkpoint for a thread, if any
    async fn get(&self, thread_id: &str) -> Result<Option<Checkpoint>>;

    /// Insert or replace the checkpoint for `checkpoint.thread_id`
    async fn put(&self, checkpoint: Checkpoint) -> Result<()>;

    /// Returns whether a checkpoint was removed
    async fn delete(&self, thread_id: &str) -> Result<bool>;

    /// Known thread ids, sorted
    async fn thread_ids(&self) -> Result<Vec<String>>;
}
