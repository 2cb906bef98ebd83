//! Shared test helpers for `slotguard-core` integration tests.

pub mod calendar;
