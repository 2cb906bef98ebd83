//! # SlotGuard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the calendar provider, credentials, clock and
//!   conversation checkpoints
//! - The half-open interval overlap test
//! - The five calendar tools, their argument schemas and registry
//! - The interceptor pipeline and the conflict guard that vetoes
//!   overlapping writes
//!
//! ## Architecture Principles
//! - Only depends on `slotguard-domain`
//! - No HTTP, filesystem, or environment access
//! - All external dependencies via traits

pub mod agent;
pub mod calendar_ports;
pub mod clock;
pub mod schedule;
pub mod tools;

pub use agent::{Checkpoint, CheckpointStore, InMemoryCheckpointStore};
pub use calendar_ports::{CalendarProvider, CredentialProvider};
pub use clock::{Clock, FixedClock, SystemClock};
pub use schedule::{find_conflicts, Interval};
pub use tools::{
    calendar_pipeline, CalendarTool, CalendarTools, ConflictGuard, Next, ToolDefinition,
    ToolHandler, ToolInterceptor, ToolPipeline, ToolRegistry,
};
