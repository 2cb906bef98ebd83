//! Interval arithmetic over calendar events

pub mod overlap;

pub use overlap::{event_interval, find_conflicts, parse_event_time, Interval};
