//! Logging setup and command plumbing

pub mod command_helpers;
pub mod logging;
