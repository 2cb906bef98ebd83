//! # SlotGuard App
//!
//! Application layer - the surface the agent loop talks to.
//!
//! This crate contains:
//! - Commands (agent loop → tool pipeline bridge)
//! - Application context (dependency injection)
//! - Logging setup and helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
pub use utils::logging::init_tracing;
