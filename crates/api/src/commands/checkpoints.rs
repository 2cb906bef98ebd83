//! Conversation checkpoint commands

use serde_json::Value;
use slotguard_core::{Checkpoint, CheckpointStore};
use slotguard_domain::Result;

use crate::AppContext;

/// Store `state` for `thread_id`, replacing any earlier checkpoint.
pub async fn save_checkpoint(ctx: &AppContext, thread_id: &str, state: Value) -> Result<()> {
    ctx.checkpoints.put(Checkpoint::new(thread_id, state)).await
}

/// Latest checkpoint for `thread_id`, if any.
pub async fn load_checkpoint(ctx: &AppContext, thread_id: &str) -> Result<Option<Checkpoint>> {
    ctx.checkpoints.get(thread_id).await
}

/// Returns whether a checkpoint existed.
pub async fn delete_checkpoint(ctx: &AppContext, thread_id: &str) -> Result<bool> {
    ctx.checkpoints.delete(thread_id).await
}

/// Thread ids with a checkpoint, sorted.
pub async fn list_threads(ctx: &AppContext) -> Result<Vec<String>> {
    ctx.checkpoints.thread_ids().await
}
