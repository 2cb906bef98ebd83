//! Google Calendar integration
//!
//! - `credentials`: where the pre-authorized bearer token comes from
//! - `google`: the `CalendarProvider` implementation over Calendar API v3
//! - `wire`: provider JSON shapes and normalization into `Event`

pub mod credentials;
pub mod google;
mod wire;

pub use credentials::{StaticCredentials, TokenFileCredentials};
pub use google::GoogleCalendarClient;
