//! Half-open interval overlap test
//!
//! Two intervals conflict iff `a.start < b.end && a.end > b.start`. Touching
//! boundaries (`a.end == b.start`) do not conflict.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use slotguard_domain::{Event, TimeWindow};
use tracing::warn;

/// `[start, end)` on the UTC timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Inclusive start.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl From<&TimeWindow> for Interval {
    fn from(window: &TimeWindow) -> Self {
        Self { start: window.start_utc(), end: window.end_utc() }
    }
}

/// Parse an event boundary.
///
/// RFC3339 values are taken as-is. Date-only values (all-day events) resolve
/// to local midnight in `tz`; if midnight falls in a DST gap the first valid
/// instant after it is used.
pub fn parse_event_time(value: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    let midnight = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + TimeDelta::hours(1))).earliest())
        .map(|local| local.with_timezone(&Utc))
}

/// Resolve an event's interval, or `None` if either boundary is unreadable.
pub fn event_interval(event: &Event, tz: Tz) -> Option<Interval> {
    let start = parse_event_time(&event.start, tz)?;
    let end = parse_event_time(&event.end, tz)?;
    Interval::new(start, end)
}

/// Existing events that collide with `requested`, in their original order.
///
/// Cancelled events and the event named by `exclude_id` never conflict.
/// An event whose boundaries cannot be read is reported as a conflict: the
/// provider already placed it inside the queried window.
pub fn find_conflicts(
    requested: &Interval,
    existing: &[Event],
    tz: Tz,
    exclude_id: Option<&str>,
) -> Vec<Event> {
    existing
        .iter()
        .filter(|event| !event.is_cancelled())
        .filter(|event| exclude_id != Some(event.id.as_str()))
        .filter(|event| match event_interval(event, tz) {
            Some(interval) => requested.overlaps(&interval),
            None => {
                warn!(
                    event_id = %event.id,
                    start = %event.start,
                    end = %event.end,
                    "unreadable event boundaries; treating as conflicting"
                );
                true
            }
        })
        .cloned()
        .collect()
}
