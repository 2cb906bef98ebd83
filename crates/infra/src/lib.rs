//! # SlotGuard Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The Google Calendar client behind the `CalendarProvider` port
//! - Credential sources behind the `CredentialProvider` port
//! - HTTP client plumbing and error conversions
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements traits defined in `slotguard-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::calendar::{GoogleCalendarClient, StaticCredentials, TokenFileCredentials};
