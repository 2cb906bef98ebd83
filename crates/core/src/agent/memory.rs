//! Process-local checkpoint store. Contents are lost on shutdown.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use slotguard_domain::{Result, SlotGuardError};

use super::ports::{Checkpoint, CheckpointStore};

#[derive(Debug, Default)]
pub struct InMemoryCheckpointStore {
    checkpoints: RwLock<HashMap<String, Checkpoint>>,
}

impl InMemoryCheckpointStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored threads.
    pub fn len(&self) -> usize {
        self.checkpoints.read().len()
    }

    /// Whether no thread is stored.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.read().is_empty()
    }

    /// Drop every checkpoint.
    pub fn clear(&self) {
        self.checkpoints.write().clear();
    }
}

#[async_trait]
impl CheckpointStore for InMemoryCheckpointStore {
    async fn get(&self, thread_id: &str) -> Result<Option<Checkpoint>> {
        Ok(self.checkpoints.read().get(thread_id).cloned())
    }

    async fn put(&self, checkpoint: Checkpoint) -> Result<()> {
        if checkpoint.thread_id.trim().is_empty() {
            return Err(SlotGuardError::InvalidInput("thread_id must not be empty".into()));
        }
        self.checkpoints.write().insert(checkpoint.thread_id.clone(), checkpoint);
        Ok(())
    }

    async fn delete(&self, thread_id: &str) -> Result<bool> {
        Ok(self.checkpoints.write().remove(thread_id).is_some())
    }

    async fn thread_ids(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self.checkpoints.read().keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
