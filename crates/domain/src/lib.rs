//! # SlotGuard Domain
//!
//! Business domain types for the scheduling assistant.
//!
//! This crate contains:
//! - The normalized calendar `Event` and its write shapes (draft, patch)
//! - Tool call / tool outcome envelopes exchanged with the agent loop
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other SlotGuard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
