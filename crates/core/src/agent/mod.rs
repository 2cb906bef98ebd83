//! Conversation checkpoint persistence for the agent loop
//!
//! The agent runtime itself lives outside this workspace. What it needs from
//! us is a place to park per-thread state between turns.

pub mod memory;
pub mod ports;

pub use memory::InMemoryCheckpointStore;
pub use ports::{Checkpoint, CheckpointStore};
